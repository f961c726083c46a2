//! Startup checks and puzzle selection
//!
//! Every fatal condition is detected here, before a session exists. The
//! caller shows the error's message lines and exits.

use crate::core::WordList;
use crate::core::WordListError;
use crate::session::{LoadOutcome, SaveStore, SessionState, load_or_default};
use crate::wordlists::loader::{load_from_file, load_word_list};
use crate::wordlists::{AnswerTable, Puzzle};
use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Calendar date of puzzle #0
///
/// # Panics
/// Will not panic - the date is a valid constant.
#[must_use]
pub fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2021, 6, 19).expect("epoch is a valid date")
}

/// Whole days from the epoch to `date` (negative before it)
#[must_use]
pub fn day_index(date: NaiveDate) -> i64 {
    (date - epoch()).num_days()
}

/// Day index for the local calendar date
#[must_use]
pub fn today_index() -> i64 {
    day_index(Local::now().date_naive())
}

/// Time left until the next local midnight, when a new puzzle appears
#[must_use]
pub fn time_until_next_puzzle(now: NaiveDateTime) -> TimeDelta {
    now.date()
        .succ_opt()
        .and_then(|tomorrow| tomorrow.and_hms_opt(0, 0, 0))
        .map_or(TimeDelta::zero(), |midnight| midnight - now)
}

/// Conditions that stop the game before it starts
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("word list not found at {}: {source}", .path.display())]
    MissingWordList {
        path: PathBuf,
        #[source]
        source: WordListError,
    },

    #[error("answer table not found at {}: {source}", .path.display())]
    MissingAnswers {
        path: PathBuf,
        #[source]
        source: WordListError,
    },

    #[error("clock is not set (day index {day})")]
    ClockNotSet { day: i64 },

    #[error("no puzzle for day {day} ({available} available)")]
    NoPuzzle { day: i64, available: usize },
}

impl StartupError {
    /// Lines for the full-screen error display
    #[must_use]
    pub const fn message_lines(&self) -> &'static [&'static str] {
        match self {
            Self::MissingWordList { .. } => {
                &["Word list not found.", "Please reinstall the word list."]
            }
            Self::MissingAnswers { .. } => {
                &["Answer table not found.", "Please reinstall the answers."]
            }
            Self::ClockNotSet { .. } => &[
                "Before playing, please set",
                "the system clock to today's",
                "date.",
            ],
            Self::NoPuzzle { .. } => &[
                "We've somehow run out of puzzles.",
                "",
                "Sorry about that, inhabitant",
                "of the far future.",
            ],
        }
    }
}

/// Pick the puzzle for `day`
///
/// # Errors
/// `ClockNotSet` for a negative day, `NoPuzzle` past the end of the table.
pub fn select_puzzle(answers: &AnswerTable, day: i64) -> Result<Puzzle, StartupError> {
    if day < 0 {
        return Err(StartupError::ClockNotSet { day });
    }
    u16::try_from(day)
        .ok()
        .and_then(|day| answers.puzzle(day))
        .ok_or(StartupError::NoPuzzle {
            day,
            available: answers.len(),
        })
}

/// Everything needed to start a game
#[derive(Debug)]
pub struct Startup {
    pub words: WordList,
    pub puzzle: Puzzle,
    pub session: SessionState,
    pub outcome: LoadOutcome,
}

/// Load resources, check fatal conditions, then resume the saved session
///
/// Checks run in order: word list, clock, answer table, puzzle range. The
/// save is only read once they all pass.
///
/// # Errors
/// Returns the first fatal condition found.
pub fn prepare(
    words_path: &Path,
    answers_path: &Path,
    day: i64,
    store: &dyn SaveStore,
) -> Result<Startup, StartupError> {
    let words = load_word_list(words_path).map_err(|source| StartupError::MissingWordList {
        path: words_path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = words.len(), "word list loaded");

    if day < 0 {
        return Err(StartupError::ClockNotSet { day });
    }

    let answers = load_from_file(answers_path)
        .map(AnswerTable::new)
        .map_err(|source| StartupError::MissingAnswers {
            path: answers_path.to_path_buf(),
            source,
        })?;

    let puzzle = select_puzzle(&answers, day)?;
    tracing::info!(day = puzzle.day, "puzzle selected");

    let (session, outcome) = SessionState::resume(load_or_default(store), puzzle.day);

    Ok(Startup {
        words,
        puzzle,
        session,
        outcome,
    })
}
