//! Print lifetime statistics from the save file

use crate::config::Paths;
use crate::game::{StatsSnapshot, time_until_next_puzzle};
use crate::output::print_stats;
use crate::session::{FileSaveStore, SaveStore, SessionState};
use anyhow::{Context, Result};
use chrono::Local;

/// Print the saved statistics, or a note when nothing is saved yet
///
/// The streak is reported as of `day`, so a missed day shows as broken. The
/// save file itself is left untouched.
///
/// # Errors
///
/// Returns an error if the save file exists but cannot be read or decoded.
pub fn run_stats(paths: &Paths, day: i64) -> Result<()> {
    let store = FileSaveStore::new(&paths.save);
    let saved = store
        .load()
        .with_context(|| format!("reading {}", paths.save.display()))?;

    match saved {
        Some(session) => print_stats(
            &stats_as_of(session, day),
            Some(time_until_next_puzzle(Local::now().naive_local())),
        ),
        None => println!("No games played yet."),
    }
    Ok(())
}

/// Lifetime statistics with the saved record reconciled to `day`
fn stats_as_of(saved: SessionState, day: i64) -> StatsSnapshot {
    let session = match u16::try_from(day) {
        Ok(today) => SessionState::resume(Some(saved), today).0,
        Err(_) => {
            tracing::warn!(day, "day out of range, showing saved statistics as-is");
            saved
        }
    };
    StatsSnapshot::lifetime(&session)
}
