//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use shiritori_core::Output;
use std::io::Write;

use crate::config::OutputConfig;
use crate::input::Message;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the result for a single message
    fn format_record(&mut self, record: &ChainRecord) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one sequence per message
    Text,
    /// JSON array of results with positions
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as written in the configuration file
    pub fn from_name(name: &str) -> Option<Self> {
        <Self as clap::ValueEnum>::from_str(name, true).ok()
    }
}

/// Result for one message, ready for formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainRecord {
    /// Where the message came from
    pub source: String,
    /// One-based line number in per-line mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    /// The longest chain joined with single spaces, empty when none
    pub sequence: String,
    /// Index of the first chain word, absent when no chain was found
    pub start_word: Option<usize>,
    /// Number of words in the chain
    pub word_count: usize,
    /// Scan details, present when requested in the configuration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<RecordMetadata>,
}

/// Scan details for one message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordMetadata {
    /// Bytes of text scanned
    pub bytes_processed: usize,
    /// Words produced by splitting
    pub words_scanned: usize,
    /// Words produced by adjacent spaces
    pub empty_words: usize,
    /// Chains closed during the scan
    pub chains_seen: usize,
    /// Processing time in microseconds
    pub duration_us: u64,
}

impl ChainRecord {
    /// Build a record from a message and its processing output
    pub fn new(message: &Message, output: &Output, include_metadata: bool) -> Self {
        let metadata = include_metadata.then(|| RecordMetadata {
            bytes_processed: output.metadata.bytes_processed,
            words_scanned: output.metadata.stats.words_scanned,
            empty_words: output.metadata.stats.empty_words,
            chains_seen: output.metadata.stats.chains_seen,
            duration_us: u64::try_from(output.metadata.duration.as_micros()).unwrap_or(u64::MAX),
        });

        Self {
            source: message.source.clone(),
            line: message.line,
            sequence: output.sequence.clone(),
            start_word: output.chain.as_ref().map(|c| c.start_word),
            word_count: output.word_count(),
            metadata,
        }
    }

    /// Source label including the line number when present
    pub fn label(&self) -> String {
        match self.line {
            Some(line) => format!("{}:{}", self.source, line),
            None => self.source.clone(),
        }
    }
}

/// Create the formatter for `format` writing to `writer`
pub fn create_formatter(
    format: OutputFormat,
    writer: Box<dyn Write + Send + Sync>,
    config: &OutputConfig,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, config.pretty_json)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
