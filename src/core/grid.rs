//! The 6×5 guess grid
//!
//! Unfilled positions hold the [`EMPTY`] sentinel. Letters are only ever
//! appended to the end of a row or removed from its end, so a row is always
//! a run of letters followed by a run of sentinels.

use super::{MAX_GUESSES, WORD_LENGTH, Word};
use std::ops::{Index, IndexMut};

/// Sentinel byte for an unfilled position
pub const EMPTY: u8 = 0;

/// One row of the guess grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GuessRow([u8; WORD_LENGTH]);

impl GuessRow {
    /// Build a row from raw bytes (letters or [`EMPTY`])
    #[must_use]
    pub const fn from_bytes(bytes: [u8; WORD_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Build a complete row holding `word`
    #[must_use]
    pub const fn from_word(word: &Word) -> Self {
        Self(*word.chars())
    }

    #[inline]
    #[must_use]
    pub const fn bytes(&self) -> &[u8; WORD_LENGTH] {
        &self.0
    }

    /// Letter at `pos`, or `None` for the empty sentinel
    ///
    /// # Panics
    /// Panics if pos >= 5
    #[inline]
    #[must_use]
    pub const fn letter(&self, pos: usize) -> Option<u8> {
        match self.0[pos] {
            EMPTY => None,
            c => Some(c),
        }
    }

    /// Number of leading filled positions
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.iter().take_while(|&&c| c != EMPTY).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0[0] == EMPTY
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len() == WORD_LENGTH
    }

    /// Append a letter; returns `false` when the row is already full
    pub fn push(&mut self, letter: u8) -> bool {
        let len = self.len();
        if len == WORD_LENGTH {
            return false;
        }
        self.0[len] = letter;
        true
    }

    /// Remove and return the last letter
    pub fn pop(&mut self) -> Option<u8> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        let letter = self.0[len - 1];
        self.0[len - 1] = EMPTY;
        Some(letter)
    }

    pub fn clear(&mut self) {
        self.0 = [EMPTY; WORD_LENGTH];
    }

    /// True if `letter` appears at any position
    #[must_use]
    pub fn contains(&self, letter: u8) -> bool {
        letter != EMPTY && self.0.contains(&letter)
    }

    /// True if the row spells exactly `word`
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        &self.0 == word.chars()
    }
}

/// The full board: one row per allowed guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct GuessGrid([GuessRow; MAX_GUESSES]);

impl GuessGrid {
    #[must_use]
    pub const fn from_rows(rows: [GuessRow; MAX_GUESSES]) -> Self {
        Self(rows)
    }

    #[must_use]
    pub const fn rows(&self) -> &[GuessRow; MAX_GUESSES] {
        &self.0
    }

    /// Row at `index`, or `None` past the last row
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&GuessRow> {
        self.0.get(index)
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut GuessRow> {
        self.0.get_mut(index)
    }

    pub fn clear(&mut self) {
        self.0 = [GuessRow::default(); MAX_GUESSES];
    }
}

impl Index<usize> for GuessGrid {
    type Output = GuessRow;

    fn index(&self, index: usize) -> &GuessRow {
        &self.0[index]
    }
}

impl IndexMut<usize> for GuessGrid {
    fn index_mut(&mut self, index: usize) -> &mut GuessRow {
        &mut self.0[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_push_until_full() {
        let mut row = GuessRow::default();
        assert!(row.is_empty());
        for &c in b"CRANE" {
            assert!(row.push(c));
        }
        assert!(row.is_complete());
        assert!(!row.push(b'S'));
        assert_eq!(row.bytes(), b"CRANE");
    }

    #[test]
    fn row_pop_removes_last_letter() {
        let mut row = GuessRow::from_bytes([b'C', b'R', b'A', EMPTY, EMPTY]);
        assert_eq!(row.len(), 3);
        assert_eq!(row.pop(), Some(b'A'));
        assert_eq!(row.len(), 2);
        assert_eq!(row.letter(2), None);
        assert_eq!(row.pop(), Some(b'R'));
        assert_eq!(row.pop(), Some(b'C'));
        assert_eq!(row.pop(), None);
    }

    #[test]
    fn row_contains_ignores_sentinel() {
        let row = GuessRow::from_bytes([b'A', b'B', EMPTY, EMPTY, EMPTY]);
        assert!(row.contains(b'A'));
        assert!(!row.contains(b'C'));
        assert!(!row.contains(EMPTY));
    }

    #[test]
    fn row_matches_word() {
        let word = Word::new("crane").unwrap();
        assert!(GuessRow::from_word(&word).matches(&word));
        assert!(!GuessRow::from_bytes([b'C', b'R', b'A', b'N', EMPTY]).matches(&word));
    }

    #[test]
    fn grid_row_bounds_checked() {
        let mut grid = GuessGrid::default();
        assert!(grid.row(MAX_GUESSES - 1).is_some());
        assert!(grid.row(MAX_GUESSES).is_none());
        assert!(grid.row_mut(MAX_GUESSES).is_none());

        grid[2].push(b'Q');
        assert_eq!(grid[2].len(), 1);
        grid.clear();
        assert_eq!(grid, GuessGrid::default());
    }
}
