//! Core domain types for the daily puzzle
//!
//! Everything here is pure: no I/O, no clocks, no terminal. The game
//! controller and the shells build on these pieces.

mod animation;
mod grid;
mod hints;
mod settings;
mod tile;
mod validate;
mod word;
mod word_list;

pub use animation::{AnimationClock, AnimationFrame, AnimationKind};
pub use grid::{EMPTY, GuessGrid, GuessRow};
pub use hints::LetterHints;
pub use settings::{Setting, Settings};
pub use tile::{TileType, evaluate, evaluate_row};
pub use validate::{GuessError, GuessValidator};
pub use word::{Word, WordError};
pub use word_list::{WordList, WordListError};

/// Letters per word
pub const WORD_LENGTH: usize = 5;

/// Rows on the board
pub const MAX_GUESSES: usize = 6;
