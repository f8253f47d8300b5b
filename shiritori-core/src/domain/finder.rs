//! Single-pass search for the longest word chain
//!
//! The scan walks the words left to right keeping two buffers: the chain in
//! progress and the best chain seen so far. When a word fails to link to its
//! predecessor the chain in progress ends and is compared with the best one;
//! the chain still open at end of input gets one final comparison.

use std::mem;

use super::chain::Chain;
use super::word::{split_words, Word};

/// Counters collected while scanning a message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScanStats {
    /// Words produced by splitting, empty words included
    pub words_scanned: usize,
    /// Words produced by adjacent delimiters
    pub empty_words: usize,
    /// Chains closed during the scan, including single-word chains
    pub chains_seen: usize,
    /// Length of the longest chain, even when it is too short to report
    pub longest_chain_len: usize,
}

impl ScanStats {
    fn record(&mut self, word: &Word<'_>) {
        self.words_scanned += 1;
        if word.is_empty() {
            self.empty_words += 1;
        }
    }
}

/// Outcome of scanning one message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome<'a> {
    /// The leftmost longest chain, present only when it has at least two words
    pub chain: Option<Chain<'a>>,
    /// Scan counters
    pub stats: ScanStats,
}

impl ScanOutcome<'_> {
    /// The chain joined with single spaces, or the empty string
    pub fn sequence(&self) -> String {
        self.chain.as_ref().map(Chain::join).unwrap_or_default()
    }
}

/// Finder for the longest run of words linked end-to-start
#[derive(Debug, Clone, Copy, Default)]
pub struct ChainSequenceFinder;

impl ChainSequenceFinder {
    /// Create a finder
    pub fn new() -> Self {
        Self
    }

    /// Find the longest chain and return it joined with single spaces
    ///
    /// Returns the empty string when the text is empty, holds a single word,
    /// or contains no two adjacent linked words.
    pub fn find(&self, text: &str) -> String {
        self.scan(text).sequence()
    }

    /// Scan the text and report the winning chain together with statistics
    pub fn scan<'a>(&self, text: &'a str) -> ScanOutcome<'a> {
        let mut stats = ScanStats::default();

        if text.is_empty() {
            return ScanOutcome { chain: None, stats };
        }

        let mut words = split_words(text);

        // `str::split` always yields at least one item
        let Some(first) = words.next() else {
            return ScanOutcome { chain: None, stats };
        };
        stats.record(&first);

        let mut previous: Word<'a> = first;
        let mut current = Chain::starting_at(first);
        let mut best = Chain::default();
        let mut chains_seen = 0;

        for word in words {
            stats.record(&word);
            if previous.links_to(&word) {
                current.extend(word);
            } else {
                let ended = mem::replace(&mut current, Chain::starting_at(word));
                chains_seen += 1;
                if ended.outranks(&best) {
                    log::trace!(
                        "new longest chain: {} words starting at word {}",
                        ended.len(),
                        ended.start()
                    );
                    best = ended;
                }
            }
            previous = word;
        }

        // The chain still open at end of input is never compared in the loop
        chains_seen += 1;
        if current.outranks(&best) {
            best = current;
        }

        stats.chains_seen = chains_seen;
        stats.longest_chain_len = best.len();

        let chain = best.is_sequence().then_some(best);
        ScanOutcome { chain, stats }
    }
}
