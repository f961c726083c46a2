//! Full-screen play mode

use crate::config::Paths;
use crate::game::{GameController, Startup, prepare};
use crate::interactive::{App, run_tui, show_startup_error};
use crate::session::{FileSaveStore, persist};
use anyhow::Result;

/// Play today's puzzle in the TUI and save on exit
///
/// # Errors
///
/// Returns the startup condition after showing it, or any terminal error.
pub fn run_play(paths: &Paths, day: i64) -> Result<()> {
    let store = FileSaveStore::new(&paths.save);

    let Startup {
        words,
        puzzle,
        session,
        outcome,
    } = match prepare(&paths.words, &paths.answers, day, &store) {
        Ok(startup) => startup,
        Err(err) => {
            tracing::error!(%err, "cannot start");
            show_startup_error(&err)?;
            return Err(err.into());
        }
    };

    let controller = GameController::new(session, puzzle, &words, outcome);
    let session = run_tui(App::new(controller))?;
    persist(&store, &session);
    Ok(())
}
