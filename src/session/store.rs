//! Save-file storage
//!
//! The record is read once at startup and written once at exit. Failures on
//! either side are never fatal: a bad read means a fresh start, a bad write is
//! logged.

use super::{SaveError, SessionState};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Where the session record lives
pub trait SaveStore {
    /// Read the saved record; `Ok(None)` when nothing has been saved yet
    ///
    /// # Errors
    /// Returns an error if the record exists but cannot be read or decoded.
    fn load(&self) -> Result<Option<SessionState>, SaveError>;

    /// Replace the saved record
    ///
    /// # Errors
    /// Returns an error if the record cannot be written.
    fn save(&self, state: &SessionState) -> Result<(), SaveError>;
}

/// Record stored as a single binary file
#[derive(Debug, Clone)]
pub struct FileSaveStore {
    path: PathBuf,
}

impl FileSaveStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling written first and then renamed over the record
    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl SaveStore for FileSaveStore {
    fn load(&self) -> Result<Option<SessionState>, SaveError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        SessionState::from_bytes(&bytes).map(Some)
    }

    fn save(&self, state: &SessionState) -> Result<(), SaveError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let bytes = state.to_bytes()?;

        // Write to temp file, then rename so a partial write never replaces the record
        let temp_path = self.temp_path();
        fs::write(&temp_path, bytes)?;
        fs::rename(&temp_path, &self.path)?;

        tracing::debug!("saved session to {}", self.path.display());
        Ok(())
    }
}

/// Load a saved record, treating any failure as "nothing saved"
pub fn load_or_default(store: &dyn SaveStore) -> Option<SessionState> {
    match store.load() {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!("ignoring unreadable save: {err}");
            None
        }
    }
}

/// Write the record at exit; failures are logged only
pub fn persist(store: &dyn SaveStore, state: &SessionState) {
    match store.save(state) {
        Ok(()) => tracing::info!(day = state.day, "session saved"),
        Err(err) => tracing::warn!("failed to save session: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GuessRow, Settings, Word};
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileSaveStore::new(dir.path().join("save.bin"));
        assert!(store.load().unwrap().is_none());
        assert!(load_or_default(&store).is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let dir = tempdir().unwrap();
        let store = FileSaveStore::new(dir.path().join("nested").join("save.bin"));

        let mut state = SessionState {
            day: 321,
            num_guesses: 1,
            games_played: 5,
            current_streak: 2,
            max_streak: 3,
            guess_counts: [0, 0, 1, 1, 0, 0],
            settings: Settings::DARK,
            ..SessionState::default()
        };
        state.guesses[0] = GuessRow::from_word(&Word::new("slate").unwrap());

        store.save(&state).unwrap();
        assert_eq!(store.load().unwrap(), Some(state));
    }

    #[test]
    fn corrupt_file_is_an_error_but_loads_as_none() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("save.bin");
        fs::write(&path, b"not a save").unwrap();

        let store = FileSaveStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(SaveError::WrongLength { .. })
        ));
        assert!(load_or_default(&store).is_none());
    }

    #[test]
    fn persist_swallows_write_failure() {
        let dir = tempdir().unwrap();
        // A directory cannot be overwritten with a file
        let store = FileSaveStore::new(dir.path());
        persist(&store, &SessionState::default());
        assert!(store.save(&SessionState::default()).is_err());
    }

    #[test]
    fn save_leaves_no_temp_file() {
        let dir = tempdir().unwrap();
        let store = FileSaveStore::new(dir.path().join("save.bin"));

        store.save(&SessionState::default()).unwrap();
        assert!(store.path().exists());
        assert!(!dir.path().join("save.bin.tmp").exists());
    }

    #[test]
    fn leftover_temp_file_does_not_affect_load() {
        let dir = tempdir().unwrap();
        let store = FileSaveStore::new(dir.path().join("save.bin"));
        let state = SessionState {
            day: 77,
            games_played: 9,
            current_streak: 4,
            ..SessionState::default()
        };
        store.save(&state).unwrap();

        // A write interrupted before the rename
        fs::write(dir.path().join("save.bin.tmp"), b"partial").unwrap();
        assert_eq!(store.load().unwrap(), Some(state));

        // The next save replaces it
        store.save(&state).unwrap();
        assert!(!dir.path().join("save.bin.tmp").exists());
    }
}
