//! Best known hint per letter
//!
//! Summarises the submitted rows for the on-screen keyboard: each letter maps
//! to the most informative tile it has received so far.

use super::tile::{TileType, evaluate};
use super::{GuessGrid, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// Letter → best tile type seen in submitted rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    best: FxHashMap<u8, TileType>,
}

impl LetterHints {
    /// Collect hints from the first `num_submitted` rows
    #[must_use]
    pub fn from_grid(grid: &GuessGrid, target: &Word, num_submitted: usize) -> Self {
        let mut best: FxHashMap<u8, TileType> = FxHashMap::default();

        for (row, guess) in grid.rows().iter().enumerate().take(num_submitted) {
            for pos in 0..WORD_LENGTH {
                let Some(letter) = guess.letter(pos) else {
                    continue;
                };
                let tile = evaluate(grid, row, pos, target, num_submitted);
                best.entry(letter)
                    .and_modify(|seen| *seen = (*seen).max(tile))
                    .or_insert(tile);
            }
        }

        Self { best }
    }

    /// Best hint for `letter`, or `None` if it has not been guessed
    #[must_use]
    pub fn get(&self, letter: u8) -> Option<TileType> {
        self.best.get(&letter).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
