//! Word list loading utilities
//!
//! Reads the packed binary word list, the plain-text answer table, and packs
//! plain-text lists into the binary form.

use crate::core::{Word, WordList, WordListError};
use std::fs;
use std::path::Path;

/// Load a packed binary word list
///
/// # Errors
///
/// Returns an error if the file cannot be read or is truncated.
///
/// # Examples
/// ```no_run
/// use daily_wordle::wordlists::loader::load_word_list;
///
/// let words = load_word_list("words.bin").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<WordList, WordListError> {
    let data = fs::read(path)?;
    WordList::from_bytes(&data)
}

/// Parse one word per line, in file order
///
/// Blank lines are skipped. Any other line that is not a 5-letter word is an
/// error, since line position matters for the answer table.
///
/// # Errors
///
/// Returns `WordListError::InvalidWord` naming the first bad line (1-based).
pub fn parse_words(content: &str) -> Result<Vec<Word>, WordListError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            let trimmed = line.trim();
            Word::new(trimmed).map_err(|_| WordListError::InvalidWord {
                line: index + 1,
                word: trimmed.to_string(),
            })
        })
        .collect()
}

/// Load words from a text file
///
/// # Errors
///
/// Returns an error if the file cannot be read or holds an invalid line.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, WordListError> {
    let content = fs::read_to_string(path)?;
    parse_words(&content)
}

/// Convert a plain-text list to the packed binary form
///
/// Words are uppercased, sorted and deduplicated.
///
/// # Errors
///
/// Returns an error on an invalid line or if the list is too large for the
/// format's `u16` byte count.
pub fn pack_words(content: &str) -> Result<(WordList, Vec<u8>), WordListError> {
    let list = WordList::from_unsorted(parse_words(content)?);
    let bytes = list.to_bytes()?;
    Ok((list, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_words_keeps_order_and_uppercases() {
        let words = parse_words("slate\nCrane\n\n  irate  \n").unwrap();
        let text: Vec<String> = words.iter().map(ToString::to_string).collect();
        assert_eq!(text, vec!["SLATE", "CRANE", "IRATE"]);
    }

    #[test]
    fn parse_words_reports_bad_line() {
        let err = parse_words("crane\ntoolong\n").unwrap_err();
        assert!(matches!(
            err,
            WordListError::InvalidWord { line: 2, ref word } if word == "toolong"
        ));
    }

    #[test]
    fn parse_words_empty() {
        assert!(parse_words("").unwrap().is_empty());
    }

    #[test]
    fn pack_sorts_and_dedups() {
        let (list, bytes) = pack_words("slate\ncrane\nslate\n").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(&bytes[..2], &10u16.to_le_bytes());
        assert_eq!(&bytes[2..], b"CRANESLATE");
    }

    #[test]
    fn packed_file_loads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("words.bin");
        let (_, bytes) = pack_words("crane\nslate\n").unwrap();
        fs::write(&path, bytes).unwrap();

        let list = load_word_list(&path).unwrap();
        assert!(list.contains(b"CRANE"));
        assert!(list.contains(b"SLATE"));
        assert!(!list.contains(b"IRATE"));
    }

    #[test]
    fn missing_word_list_is_io_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            load_word_list(dir.path().join("absent.bin")),
            Err(WordListError::Io(_))
        ));
    }
}
