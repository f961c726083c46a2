//! File locations
//!
//! Everything lives in the platform data directory unless overridden on the
//! command line.

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "daily_wordle";

/// Resolved paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub words: PathBuf,
    pub answers: PathBuf,
    pub save: PathBuf,
    pub log_dir: PathBuf,
}

impl Paths {
    /// Default layout under `data_dir`
    #[must_use]
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            words: data_dir.join("words.bin"),
            answers: data_dir.join("answers.txt"),
            save: data_dir.join("save.bin"),
            log_dir: data_dir.join("logs"),
        }
    }

    /// Platform data directory, or the working directory when there is none
    #[must_use]
    pub fn data_dir() -> PathBuf {
        ProjectDirs::from("", "", APP_NAME)
            .map_or_else(|| PathBuf::from("."), |dirs| dirs.data_dir().to_path_buf())
    }

    /// Defaults with any command-line overrides applied
    #[must_use]
    pub fn resolve(
        words: Option<PathBuf>,
        answers: Option<PathBuf>,
        save: Option<PathBuf>,
    ) -> Self {
        let defaults = Self::in_dir(&Self::data_dir());
        Self {
            words: words.unwrap_or(defaults.words),
            answers: answers.unwrap_or(defaults.answers),
            save: save.unwrap_or(defaults.save),
            log_dir: defaults.log_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_under_data_dir() {
        let paths = Paths::in_dir(Path::new("/data"));
        assert_eq!(paths.words, Path::new("/data/words.bin"));
        assert_eq!(paths.answers, Path::new("/data/answers.txt"));
        assert_eq!(paths.save, Path::new("/data/save.bin"));
        assert_eq!(paths.log_dir, Path::new("/data/logs"));
    }

    #[test]
    fn overrides_win() {
        let paths = Paths::resolve(Some(PathBuf::from("w.bin")), None, Some(PathBuf::from("s.bin")));
        assert_eq!(paths.words, PathBuf::from("w.bin"));
        assert_eq!(paths.save, PathBuf::from("s.bin"));
        assert!(paths.answers.ends_with("answers.txt"));
    }
}
