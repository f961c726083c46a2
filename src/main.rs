//! Daily Wordle - CLI
//!
//! Daily word puzzle with a full-screen TUI, a plain line mode, a statistics
//! printout and a word list packer.

use anyhow::Result;
use clap::{Parser, Subcommand};
use daily_wordle::{
    commands::{run_pack, run_play, run_simple, run_stats},
    config::Paths,
    game::today_index,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "daily_wordle",
    about = "Guess the daily five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Packed word list (default: words.bin in the data directory)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Answer table, one word per line (default: answers.txt in the data directory)
    #[arg(long, global = true)]
    answers: Option<PathBuf>,

    /// Save file (default: save.bin in the data directory)
    #[arg(long, global = true)]
    save: Option<PathBuf>,

    /// Play this day index instead of today's
    #[arg(long, global = true, allow_negative_numbers = true)]
    day: Option<i64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line input without TUI)
    Simple,

    /// Print lifetime statistics
    Stats,

    /// Pack a plain-text word list into the binary word list format
    Pack {
        /// Text file with one 5-letter word per line
        input: PathBuf,

        /// Destination for the packed list
        output: PathBuf,
    },
}

/// Log to a file in `log_dir`; the terminal belongs to the game
fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, "daily_wordle.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::resolve(cli.words, cli.answers, cli.save);

    // Held until exit so buffered log lines are flushed
    let _guard = match setup_logging(&paths.log_dir) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("warning: logging disabled: {err}");
            None
        }
    };

    let day = cli.day.unwrap_or_else(today_index);
    tracing::info!(
        day,
        words = %paths.words.display(),
        answers = %paths.answers.display(),
        save = %paths.save.display(),
        "starting"
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&paths, day),
        Commands::Simple => run_simple(&paths, day),
        Commands::Stats => run_stats(&paths, day),
        Commands::Pack { input, output } => {
            let count = run_pack(&input, &output)?;
            println!("Packed {count} words into {}", output.display());
            Ok(())
        }
    }
}
