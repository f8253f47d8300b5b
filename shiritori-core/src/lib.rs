//! Longest word-chain detection
//!
//! A word chain is a run of consecutive words in which every word begins
//! with the letter the previous word ended with, compared without regard to
//! case (the word game *shiritori*). This crate finds the longest such run in
//! space-delimited text.
//!
//! # Architecture
//!
//! - **Domain layer**: word splitting, the link rule and the single-pass scan
//! - **API layer**: input sources, limits, batch processing and metadata
//!
//! # Example
//!
//! ```rust
//! use shiritori_core::{find_longest_chain_sequence, ChainProcessor};
//!
//! assert_eq!(
//!     find_longest_chain_sequence(Some("Dog Great Tea Apple")),
//!     "Dog Great Tea Apple"
//! );
//! assert_eq!(find_longest_chain_sequence(Some("cat dog bird")), "");
//! assert_eq!(find_longest_chain_sequence(None), "");
//!
//! let output = ChainProcessor::new().process_text("ab ba x xy yz");
//! assert_eq!(output.sequence, "x xy yz");
//! assert_eq!(output.chain.unwrap().start_word, 2);
//! ```

pub mod api;
pub mod domain;

pub use api::{
    ChainMatch, ChainProcessor, Config, ConfigBuilder, Error, Input, Output, ProcessingMetadata,
};
pub use domain::{Chain, ChainSequenceFinder, ScanOutcome, ScanStats, Word};

/// Find the longest chain in a message that may be absent
///
/// Words are separated by single spaces. Absent, empty and single-word
/// messages yield the empty string, as does a message in which no two
/// adjacent words link. Never fails.
pub fn find_longest_chain_sequence(message: Option<&str>) -> String {
    message.map(find_longest_chain).unwrap_or_default()
}

/// Find the longest chain in a message
pub fn find_longest_chain(message: &str) -> String {
    ChainSequenceFinder::new().find(message)
}
