//! Output types for the processing API

use std::time::Duration;

use crate::domain::{ScanOutcome, ScanStats};

/// Processing output with metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Output {
    /// The longest chain joined with single spaces, empty when none exists
    pub sequence: String,
    /// Position and words of the chain, if one was found
    pub chain: Option<ChainMatch>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
}

/// The winning chain, detached from the input it was found in
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChainMatch {
    /// Index of the first chain word among all words of the message
    pub start_word: usize,
    /// Number of words in the chain (always at least two)
    pub word_count: usize,
    /// The chain words with their original casing
    pub words: Vec<String>,
}

/// Metadata about the processing
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProcessingMetadata {
    /// Total processing duration
    pub duration: Duration,
    /// Bytes of text scanned
    pub bytes_processed: usize,
    /// Counters from the scan
    pub stats: ScanStats,
}

impl Output {
    /// Output for input that held no text
    pub(crate) fn empty(duration: Duration) -> Self {
        Self {
            sequence: String::new(),
            chain: None,
            metadata: ProcessingMetadata {
                duration,
                bytes_processed: 0,
                stats: ScanStats::default(),
            },
        }
    }

    /// Create output from a scan of `text`
    pub(crate) fn from_scan(outcome: ScanOutcome<'_>, text: &str, duration: Duration) -> Self {
        let sequence = outcome.sequence();
        let chain = outcome.chain.map(|chain| ChainMatch {
            start_word: chain.start(),
            word_count: chain.len(),
            words: chain.words().iter().map(|w| w.to_string()).collect(),
        });

        Self {
            sequence,
            chain,
            metadata: ProcessingMetadata {
                duration,
                bytes_processed: text.len(),
                stats: outcome.stats,
            },
        }
    }

    /// Whether a chain of at least two words was found
    pub fn has_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// Number of words in the found chain, zero when none
    pub fn word_count(&self) -> usize {
        self.chain.as_ref().map_or(0, |c| c.word_count)
    }
}
