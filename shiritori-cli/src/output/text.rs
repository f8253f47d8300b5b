//! Plain text output formatter

use super::{ChainRecord, OutputFormatter};
use anyhow::Result;
use std::borrow::Cow;
use std::io::Write;

/// Plain text formatter - outputs one sequence per line
///
/// Messages without a chain produce an empty line so that output lines
/// stay aligned with input messages. Line breaks inside a sequence are
/// written as the two-character escapes `\n` and `\r`.
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_record(&mut self, record: &ChainRecord) -> Result<()> {
        writeln!(self.writer, "{}", escape_line_breaks(&record.sequence))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Replace `\n` and `\r` with their backslash escapes
fn escape_line_breaks(sequence: &str) -> Cow<'_, str> {
    if !sequence.contains(['\n', '\r']) {
        return Cow::Borrowed(sequence);
    }
    let mut escaped = String::with_capacity(sequence.len() + 2);
    for c in sequence.chars() {
        match c {
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(sequence: &str) -> ChainRecord {
        ChainRecord {
            source: "<text>".to_string(),
            line: None,
            sequence: sequence.to_string(),
            start_word: None,
            word_count: 0,
            metadata: None,
        }
    }

    #[test]
    fn test_one_line_per_record() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_record(&record("ab bc")).unwrap();
        formatter.format_record(&record("")).unwrap();
        formatter.format_record(&record("Dog Great")).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(out, "ab bc\n\nDog Great\n");
    }

    #[test]
    fn test_line_breaks_are_escaped() {
        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_record(&record("ab\nbc cd")).unwrap();
        formatter.format_record(&record("")).unwrap();
        formatter.format_record(&record("ab\r\nbc cd")).unwrap();
        formatter.finish().unwrap();

        let out = String::from_utf8(formatter.writer).unwrap();
        assert_eq!(out, "ab\\nbc cd\n\nab\\r\\nbc cd\n");
        assert_eq!(out.lines().count(), 3);
    }

    #[test]
    fn test_plain_sequence_is_borrowed() {
        assert!(matches!(escape_line_breaks("ab bc"), Cow::Borrowed("ab bc")));
    }
}
