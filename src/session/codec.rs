//! Fixed-layout binary save record
//!
//! 52 bytes, little-endian, no padding:
//!
//! | offset | field          | type       |
//! |--------|----------------|------------|
//! | 0      | day            | u16        |
//! | 2      | num_guesses    | u8         |
//! | 3      | guesses        | 6×5 bytes  |
//! | 33     | games_played   | u16        |
//! | 35     | current_streak | u16        |
//! | 37     | max_streak     | u16        |
//! | 39     | guess_counts   | 6×u16      |
//! | 51     | settings       | u8         |

use super::{SaveError, SessionState};
use crate::core::{EMPTY, GuessGrid, GuessRow, MAX_GUESSES, Settings, WORD_LENGTH};
use serde::{Deserialize, Serialize};

/// Size of an encoded record
pub const RECORD_LEN: usize = 2 + 1 + MAX_GUESSES * WORD_LENGTH + 2 + 2 + 2 + MAX_GUESSES * 2 + 1;

/// On-disk field order; bincode writes fixed-width little-endian integers and
/// arrays without a length prefix, which gives the layout above
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    day: u16,
    num_guesses: u8,
    guesses: [[u8; WORD_LENGTH]; MAX_GUESSES],
    games_played: u16,
    current_streak: u16,
    max_streak: u16,
    guess_counts: [u16; MAX_GUESSES],
    settings: u8,
}

impl From<&SessionState> for Record {
    fn from(state: &SessionState) -> Self {
        Self {
            day: state.day,
            num_guesses: state.num_guesses,
            guesses: (*state.guesses.rows()).map(|row| *row.bytes()),
            games_played: state.games_played,
            current_streak: state.current_streak,
            max_streak: state.max_streak,
            guess_counts: state.guess_counts,
            settings: state.settings.bits(),
        }
    }
}

impl Record {
    /// Reject anything a running game could not have written
    fn check(&self) -> Result<(), SaveError> {
        if usize::from(self.num_guesses) > MAX_GUESSES {
            return Err(SaveError::Corrupt(format!(
                "guess count {} exceeds {MAX_GUESSES}",
                self.num_guesses
            )));
        }

        for (index, row) in self.guesses.iter().enumerate() {
            if let Some(&bad) = row.iter().find(|&&b| b != EMPTY && !b.is_ascii_uppercase()) {
                return Err(SaveError::Corrupt(format!("invalid guess byte {bad:#04x}")));
            }
            let filled = row.iter().take_while(|&&b| b != EMPTY).count();
            if row[filled..].iter().any(|&b| b != EMPTY) {
                return Err(SaveError::Corrupt(format!(
                    "row {index} has a letter after an empty position"
                )));
            }
            if index < usize::from(self.num_guesses) && filled < WORD_LENGTH {
                return Err(SaveError::Corrupt(format!(
                    "submitted row {index} is incomplete"
                )));
            }
        }
        Ok(())
    }

    fn into_session(self) -> SessionState {
        SessionState {
            day: self.day,
            num_guesses: self.num_guesses,
            guesses: GuessGrid::from_rows(self.guesses.map(GuessRow::from_bytes)),
            games_played: self.games_played,
            current_streak: self.current_streak,
            max_streak: self.max_streak,
            guess_counts: self.guess_counts,
            settings: Settings::from_bits(self.settings),
        }
    }
}

impl SessionState {
    /// Encode as the fixed-layout record
    ///
    /// # Errors
    /// Returns `SaveError::Encoding` if bincode fails to serialize the record.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
        let bytes = bincode::serialize(&Record::from(self))?;
        debug_assert_eq!(bytes.len(), RECORD_LEN);
        Ok(bytes)
    }

    /// Decode a record
    ///
    /// # Errors
    /// Returns `SaveError::WrongLength` for any length other than
    /// [`RECORD_LEN`], and `SaveError::Corrupt` if the guess count is out of
    /// range, a guess byte is neither a letter nor the empty sentinel, a row
    /// has a gap, or a submitted row is incomplete.
    pub fn from_bytes(data: &[u8]) -> Result<Self, SaveError> {
        if data.len() != RECORD_LEN {
            return Err(SaveError::WrongLength {
                expected: RECORD_LEN,
                actual: data.len(),
            });
        }
        let record: Record = bincode::deserialize(data)?;
        record.check()?;
        Ok(record.into_session())
    }
}
