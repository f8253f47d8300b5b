//! Chains of linked words

use smallvec::SmallVec;

use super::word::{Word, WORD_DELIMITER};

/// Inline capacity of a chain before it spills to the heap
const INLINE_WORDS: usize = 8;

/// Minimum number of words for a chain to count as a sequence
pub const MIN_SEQUENCE_LEN: usize = 2;

/// An ordered run of consecutive words from the input
///
/// Every word after the first links to its predecessor. A chain owns its
/// word buffer, so two chains never share storage. Chains are grown only by
/// [`ChainSequenceFinder`](super::ChainSequenceFinder), which appends words in
/// input order:
///
/// ```compile_fail
/// use shiritori_core::{Chain, Word};
///
/// let mut chain = Chain::starting_at(Word::new("ab", 0));
/// chain.extend(Word::new("bc", 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chain<'a> {
    start: usize,
    words: SmallVec<[&'a str; INLINE_WORDS]>,
}

impl<'a> Chain<'a> {
    /// Start a new chain at `word`
    pub fn starting_at(word: Word<'a>) -> Self {
        let mut words = SmallVec::new();
        words.push(word.as_str());
        Self {
            start: word.index(),
            words,
        }
    }

    /// Append the word that follows the last word of the chain
    pub(crate) fn extend(&mut self, word: Word<'a>) {
        debug_assert_eq!(word.index(), self.start + self.words.len());
        self.words.push(word.as_str());
    }

    /// Index of the first word of the chain in the input
    pub fn start(&self) -> usize {
        self.start
    }

    /// Number of words in the chain
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the chain holds no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether the chain is long enough to be reported
    pub fn is_sequence(&self) -> bool {
        self.len() >= MIN_SEQUENCE_LEN
    }

    /// Whether this chain should replace `best`
    ///
    /// Only a strictly longer chain wins, so the leftmost of several equally
    /// long chains is kept.
    pub fn outranks(&self, best: &Chain<'_>) -> bool {
        self.len() > best.len()
    }

    /// The words of the chain in input order
    pub fn words(&self) -> &[&'a str] {
        &self.words
    }

    /// Join the words with a single space
    pub fn join(&self) -> String {
        let mut buf = [0u8; 4];
        let delimiter: &str = WORD_DELIMITER.encode_utf8(&mut buf);
        self.words.join(delimiter)
    }
}
