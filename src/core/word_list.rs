//! Sorted word list with exact-match lookup
//!
//! The binary form is a little-endian `u16` byte count followed by that many
//! bytes of packed 5-letter words, sorted ascending by byte value.

use super::{WORD_LENGTH, Word};
use thiserror::Error;

/// Errors decoding or encoding a packed word list
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("word list is truncated: header says {expected} bytes, found {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("word list has {0} words, more than the format can hold")]
    TooLarge(usize),

    #[error("invalid word {word:?} on line {line}")]
    InvalidWord { line: usize, word: String },
}

/// Collection of allowed guesses
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build from words that are already sorted ascending
    ///
    /// Lookups on an unsorted list give unspecified (but non-panicking)
    /// results; use [`WordList::from_unsorted`] when in doubt.
    #[must_use]
    pub const fn from_sorted(words: Vec<[u8; WORD_LENGTH]>) -> Self {
        Self { words }
    }

    /// Sort and deduplicate `words`
    #[must_use]
    pub fn from_unsorted(words: impl IntoIterator<Item = Word>) -> Self {
        let mut words: Vec<[u8; WORD_LENGTH]> = words.into_iter().map(|w| *w.chars()).collect();
        words.sort_unstable();
        words.dedup();
        Self { words }
    }

    /// Decode the packed binary form
    ///
    /// # Errors
    /// Returns `WordListError::Truncated` if the data is shorter than its
    /// header claims. A byte count that is not a multiple of 5 ignores the
    /// trailing partial word.
    pub fn from_bytes(data: &[u8]) -> Result<Self, WordListError> {
        let (header, body) = data.split_at_checked(2).ok_or(WordListError::Truncated {
            expected: 2,
            actual: data.len(),
        })?;
        let byte_count = usize::from(u16::from_le_bytes([header[0], header[1]]));

        let body = body.get(..byte_count).ok_or(WordListError::Truncated {
            expected: byte_count,
            actual: body.len(),
        })?;

        let words = body
            .chunks_exact(WORD_LENGTH)
            .map(|chunk| {
                let mut word = [0u8; WORD_LENGTH];
                word.copy_from_slice(chunk);
                word
            })
            .collect();

        Ok(Self { words })
    }

    /// Encode to the packed binary form
    ///
    /// # Errors
    /// Returns `WordListError::TooLarge` if the byte count does not fit in
    /// the `u16` header.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WordListError> {
        let byte_count = u16::try_from(self.words.len() * WORD_LENGTH)
            .map_err(|_| WordListError::TooLarge(self.words.len()))?;

        let mut out = Vec::with_capacity(2 + usize::from(byte_count));
        out.extend_from_slice(&byte_count.to_le_bytes());
        for word in &self.words {
            out.extend_from_slice(word);
        }
        Ok(out)
    }

    /// Exact byte match, no case folding
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::{Word, WordList};
    ///
    /// let list = WordList::from_unsorted([Word::new("crane").unwrap()]);
    /// assert!(list.contains(b"CRANE"));
    /// assert!(!list.contains(b"crane"));
    /// ```
    #[must_use]
    pub fn contains(&self, word: &[u8; WORD_LENGTH]) -> bool {
        self.words.binary_search(word).is_ok()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8; WORD_LENGTH]> {
        self.words.iter()
    }
}
