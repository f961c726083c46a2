//! Wordle word representation
//!
//! A Word stores exactly five uppercase ASCII letters. Puzzle targets and
//! word list entries are both Words, so comparisons are plain byte equality.

use super::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

/// A 5-letter word, normalised to uppercase ASCII
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Word {
    chars: [u8; WORD_LENGTH],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("Word must be exactly 5 letters, got {0}")]
    InvalidLength(usize),
    #[error("Word must contain only ASCII letters")]
    NonAscii,
    #[error("Word contains invalid characters")]
    InvalidCharacters,
}

impl Word {
    /// Create a new Word from a string
    ///
    /// Input is uppercased, so `"crane"` and `"CRANE"` are the same word.
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use daily_wordle::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.to_string(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let bytes = text.as_bytes();
        if bytes.len() != WORD_LENGTH {
            return Err(WordError::InvalidLength(bytes.len()));
        }

        let mut chars = [0u8; WORD_LENGTH];
        for (slot, &byte) in chars.iter_mut().zip(bytes) {
            *slot = byte.to_ascii_uppercase();
        }
        Self::from_bytes(chars)
    }

    /// Create a Word from raw bytes without case folding
    ///
    /// # Errors
    /// Returns `WordError::InvalidCharacters` unless every byte is `A`-`Z`.
    pub fn from_bytes(chars: [u8; WORD_LENGTH]) -> Result<Self, WordError> {
        if chars.iter().all(u8::is_ascii_uppercase) {
            Ok(Self { chars })
        } else {
            Err(WordError::InvalidCharacters)
        }
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_LENGTH] {
        &self.chars
    }

    /// Get the character at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> u8 {
        self.chars[position]
    }

    /// Number of times `letter` occurs anywhere in the word
    #[inline]
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.chars.iter().filter(|&&c| c == letter).count()
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.chars.contains(&letter)
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.chars {
            write!(f, "{}", char::from(c))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("CRANE").unwrap();
        assert_eq!(word.chars(), b"CRANE");
    }

    #[test]
    fn word_creation_lowercase_normalized() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.chars(), b"CRANE");

        let word2 = Word::new("CrAnE").unwrap();
        assert_eq!(word, word2);
    }

    #[test]
    fn word_creation_invalid_length() {
        assert!(matches!(
            Word::new("too long"),
            Err(WordError::InvalidLength(8))
        ));
        assert!(matches!(
            Word::new("shrt"),
            Err(WordError::InvalidLength(4))
        ));
        assert!(matches!(Word::new(""), Err(WordError::InvalidLength(0))));
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err()); // Number
        assert!(Word::new("cran ").is_err()); // Space
        assert!(Word::new("cran!").is_err()); // Punctuation
        assert!(matches!(Word::new("crané"), Err(WordError::NonAscii)));
    }

    #[test]
    fn from_bytes_rejects_lowercase_and_sentinel() {
        assert!(Word::from_bytes(*b"CRANE").is_ok());
        assert!(Word::from_bytes(*b"crane").is_err());
        assert!(Word::from_bytes([b'C', b'R', 0, 0, 0]).is_err());
    }

    #[test]
    fn word_char_at() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.char_at(0), b'C');
        assert_eq!(word.char_at(4), b'E');
    }

    #[test]
    fn word_count_of_duplicates() {
        let word = Word::new("allow").unwrap();
        assert_eq!(word.count_of(b'L'), 2);
        assert_eq!(word.count_of(b'A'), 1);
        assert_eq!(word.count_of(b'Z'), 0);
        assert!(word.has_letter(b'W'));
        assert!(!word.has_letter(b'X'));
    }

    #[test]
    fn word_display() {
        let word = Word::new("crane").unwrap();
        assert_eq!(format!("{word}"), "CRANE");
    }
}
