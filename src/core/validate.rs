//! Guess validation
//!
//! A submitted row must be complete, must be in the word list, and in hard
//! mode must reuse the hints revealed by the previous row: letters shown as
//! correct stay in place, letters shown as present appear somewhere.

use super::tile::{TileType, evaluate};
use super::{GuessGrid, Settings, WORD_LENGTH, Word, WordList};
use thiserror::Error;

const ORDINALS: [&str; WORD_LENGTH] = ["1st", "2nd", "3rd", "4th", "5th"];

/// Why a guess was rejected
///
/// The display string is built on demand, so the same error can be shown
/// any number of times without shared buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum GuessError {
    #[error("Not enough letters")]
    NotEnoughLetters,

    #[error("Not in word list")]
    NotInWordList,

    /// Hard mode: `letter` was correct at `position` (0-based) last guess
    #[error("{} letter must be {}", ORDINALS[*position], char::from(*letter))]
    LetterAtPosition { position: usize, letter: u8 },

    /// Hard mode: `letter` was present last guess but is missing now
    #[error("Guess must contain {}", char::from(*letter))]
    MissingLetter { letter: u8 },
}

/// Checks rows against the word list and hard-mode rules
#[derive(Debug, Clone, Copy)]
pub struct GuessValidator<'a> {
    words: &'a WordList,
}

impl<'a> GuessValidator<'a> {
    #[must_use]
    pub const fn new(words: &'a WordList) -> Self {
        Self { words }
    }

    /// Validate row `current` of `grid`
    ///
    /// At most one error is reported: completeness first, then word list
    /// membership, then the first misplaced correct letter, then the first
    /// missing present letter.
    ///
    /// # Errors
    /// Returns the first rule the row breaks.
    ///
    /// # Panics
    /// Panics if `current >= MAX_GUESSES`.
    pub fn validate(
        &self,
        grid: &GuessGrid,
        target: &Word,
        current: usize,
        settings: Settings,
    ) -> Result<(), GuessError> {
        let guess = &grid[current];
        if !guess.is_complete() {
            return Err(GuessError::NotEnoughLetters);
        }
        if !self.words.contains(guess.bytes()) {
            return Err(GuessError::NotInWordList);
        }

        if settings.hard_mode() && current > 0 {
            let previous = current - 1;
            let prev_row = &grid[previous];
            let tiles: [TileType; WORD_LENGTH] =
                std::array::from_fn(|pos| evaluate(grid, previous, pos, target, current));

            for (position, tile) in tiles.iter().enumerate() {
                let letter = prev_row.bytes()[position];
                if *tile == TileType::Correct && guess.bytes()[position] != letter {
                    return Err(GuessError::LetterAtPosition { position, letter });
                }
            }

            for (position, tile) in tiles.iter().enumerate() {
                let letter = prev_row.bytes()[position];
                if *tile == TileType::Present && !guess.contains(letter) {
                    return Err(GuessError::MissingLetter { letter });
                }
            }
        }

        Ok(())
    }
}
