//! Persistent session record
//!
//! Progress on today's puzzle, lifetime statistics and settings, plus the
//! binary codec and file store used to keep them across runs.

mod codec;
mod state;
mod store;

pub use codec::RECORD_LEN;
pub use state::{LoadOutcome, SessionState};
pub use store::{FileSaveStore, SaveStore, load_or_default, persist};

use thiserror::Error;

/// Errors reading or writing the save record
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("save record has {actual} bytes, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("save encoding failed: {0}")]
    Encoding(#[from] bincode::Error),

    #[error("corrupted save: {0}")]
    Corrupt(String),
}
