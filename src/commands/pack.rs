//! Convert a plain-text word list into the packed binary form

use crate::wordlists::loader::pack_words;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Pack `input` (one word per line) into `output`; returns the word count
///
/// # Errors
///
/// Returns an error if either file cannot be accessed, a line is not a
/// 5-letter word, or the list is too large for the format.
pub fn run_pack(input: &Path, output: &Path) -> Result<usize> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("reading {}", input.display()))?;
    let (list, bytes) = pack_words(&content)?;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;

    tracing::info!(words = list.len(), output = %output.display(), "word list packed");
    Ok(list.len())
}
