//! Markdown output formatter

use super::{ChainRecord, OutputFormatter};
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs results as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    message_count: usize,
    chain_count: usize,
    longest: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            message_count: 0,
            chain_count: 0,
            longest: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_record(&mut self, record: &ChainRecord) -> Result<()> {
        self.message_count += 1;
        if record.sequence.is_empty() {
            writeln!(
                self.writer,
                "{}. `{}`: *(no chain)*",
                self.message_count,
                record.label()
            )?;
        } else {
            self.chain_count += 1;
            self.longest = self.longest.max(record.word_count);
            writeln!(
                self.writer,
                "{}. `{}`: {}",
                self.message_count,
                record.label(),
                record.sequence
            )?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(
            self.writer,
            "*Total messages: {}, chains found: {}, longest chain: {} words*",
            self.message_count, self.chain_count, self.longest
        )?;
        self.writer.flush()?;
        Ok(())
    }
}
