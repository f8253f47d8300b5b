//! Domain layer: word splitting, chain linking and the longest-chain scan
//!
//! Everything here is pure and allocation-light. The API layer wraps it
//! with input handling, limits and metadata.

pub mod chain;
pub mod finder;
pub mod word;

pub use chain::{Chain, MIN_SEQUENCE_LEN};
pub use finder::{ChainSequenceFinder, ScanOutcome, ScanStats};
pub use word::{split_words, Letter, Word, WORD_DELIMITER};
