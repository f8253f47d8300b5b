//! Word tokenization and letter comparison

/// The only character that separates words
pub const WORD_DELIMITER: char = ' ';

/// A word borrowed from the scanned text
///
/// Words are produced by splitting on every single space, so repeated
/// delimiters yield empty words. An empty word has neither a first nor a
/// last letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    text: &'a str,
    index: usize,
}

impl<'a> Word<'a> {
    /// Create a word at the given position in the word sequence
    pub fn new(text: &'a str, index: usize) -> Self {
        Self { text, index }
    }

    /// The word exactly as it appeared in the input
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Zero-based position of this word in the split sequence
    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether the word came from two adjacent delimiters
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// First character of the word, if any
    pub fn first_letter(&self) -> Option<Letter> {
        self.text.chars().next().map(Letter)
    }

    /// Last character of the word, if any
    pub fn last_letter(&self) -> Option<Letter> {
        self.text.chars().next_back().map(Letter)
    }

    /// Whether `next` may follow this word in a chain
    ///
    /// The last letter of `self` must equal the first letter of `next`
    /// ignoring case. An empty word on either side never links.
    pub fn links_to(&self, next: &Word<'_>) -> bool {
        match (self.last_letter(), next.first_letter()) {
            (Some(last), Some(first)) => last.eq_ignore_case(first),
            _ => false,
        }
    }
}

/// A single character taken from the edge of a word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(pub char);

impl Letter {
    /// Compare two letters using full Unicode lower-case mapping
    ///
    /// Some characters lower-case to more than one `char` (e.g. `'İ'`), so the
    /// mapped sequences are compared rather than a single code point.
    pub fn eq_ignore_case(self, other: Letter) -> bool {
        self.0 == other.0 || self.0.to_lowercase().eq(other.0.to_lowercase())
    }
}

/// Split text into words on every single space
///
/// No trimming is applied and repeated spaces are not collapsed. The empty
/// string yields one empty word, matching `str::split`.
pub fn split_words(text: &str) -> impl Iterator<Item = Word<'_>> {
    text.split(WORD_DELIMITER)
        .enumerate()
        .map(|(index, word)| Word::new(word, index))
}
