//! Simple interactive CLI mode
//!
//! Line-based play without a full-screen terminal. Guesses are typed as
//! words; commands start with `:`.

use crate::config::Paths;
use crate::core::{Setting, WORD_LENGTH};
use crate::game::{GameController, GameEvent, Screen, Startup, Toast, prepare, time_until_next_puzzle};
use crate::output::{print_board, print_keyboard, print_startup_error, print_stats, print_toast};
use crate::session::{FileSaveStore, persist};
use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use std::io::{self, BufRead, Write};

const HELP: &[&str] = &[
    "Guess the WORDLE in 6 tries.",
    "",
    "Each guess must be a valid 5 letter word.",
    "Hit the enter key to submit.",
    "",
    "After each guess, the color of the tiles will change to show how",
    "close your guess was to the word.",
    "",
    "  green   the letter is in the word and in the correct spot",
    "  yellow  the letter is in the word but in the wrong spot",
    "  gray    the letter is not in the word in any spot",
    "",
    "A new WORDLE will be available each day!",
    "",
    "Commands: :help  :stats  :hard  :theme  :contrast  :quit",
];

/// One line of player input
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Guess(String),
    Help,
    Stats,
    Toggle(Setting),
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Command::Guess(line.to_string());
    };
    match command.to_lowercase().as_str() {
        "q" | "quit" | "exit" => Command::Quit,
        "h" | "help" => Command::Help,
        "s" | "stats" => Command::Stats,
        "hard" => Command::Toggle(Setting::HardMode),
        "theme" | "dark" => Command::Toggle(Setting::DarkTheme),
        "contrast" => Command::Toggle(Setting::HighContrast),
        _ => Command::Unknown(line.to_string()),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns the startup condition after printing it, or an I/O error reading
/// input.
pub fn run_simple(paths: &Paths, day: i64) -> Result<()> {
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
            print_startup_error(&err);
            return Err(err.into());
        }
    };

    println!("\n╔══════════════════════════════════════════╗");
    println!("║          W O R D L E   #{:<5}            ║", puzzle.day);
    println!("╚══════════════════════════════════════════╝");

    let mut controller = GameController::new(session, puzzle, &words, outcome);
    if controller.screen() == Screen::Help {
        print_help();
        controller.handle(GameEvent::Close);
    }

    let result = play_lines(&mut controller, io::stdin().lock());
    persist(&store, controller.session());
    result?;
    Ok(())
}

/// Drive `controller` from `input` until the game ends, `:quit`, or EOF
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn play_lines<R: BufRead>(controller: &mut GameController, mut input: R) -> io::Result<()> {
    loop {
        let request = controller.frame();
        let high_contrast = request.settings.high_contrast();
        print_board(&request.grid, &request.target, request.num_submitted, high_contrast);

        if request.complete {
            if let Some(toast) = request.toast {
                print_toast(&toast);
            }
            print_stats(
                &request.stats,
                Some(time_until_next_puzzle(Local::now().naive_local())),
            );
            return Ok(());
        }

        print_keyboard(&request.hints(), high_contrast);

        let Some(line) = get_user_input("\nGuess", &mut input)? else {
            println!();
            return Ok(());
        };

        match parse_command(&line) {
            Command::Quit => {
                println!("\n👋 See you tomorrow!\n");
                return Ok(());
            }
            Command::Help => print_help(),
            Command::Stats => print_stats(&request.stats, None),
            Command::Toggle(setting) => toggle(controller, setting),
            Command::Unknown(text) => {
                println!("  {}", format!("Unknown command {text}, try :help").red());
            }
            Command::Guess(word) if word.is_empty() => {}
            Command::Guess(word) => submit_word(controller, &word),
        }
    }
}

fn submit_word(controller: &mut GameController, word: &str) {
    if word.chars().count() > WORD_LENGTH {
        println!("  {}", "❌ Too many letters".red());
        return;
    }

    for _ in 0..WORD_LENGTH {
        controller.handle(GameEvent::Backspace);
    }
    for c in word.chars() {
        controller.handle(GameEvent::Letter(c));
    }
    controller.handle(GameEvent::Submit);

    if let Some(toast @ Toast::Invalid(_)) = controller.toast() {
        print_toast(&toast);
    }
}

fn toggle(controller: &mut GameController, setting: Setting) {
    let index = Setting::ALL
        .iter()
        .position(|&s| s == setting)
        .unwrap_or_default();
    controller.handle(GameEvent::OpenSettings);
    controller.handle(GameEvent::ToggleSetting(index));
    controller.handle(GameEvent::Close);

    let state = if controller.session().settings.contains(setting) {
        "on".green()
    } else {
        "off".red()
    };
    println!("  {setting}: {state}");
}

fn print_help() {
    println!("\n {}\n", "HOW TO PLAY".bright_cyan().bold());
    for line in HELP {
        println!("   {line}");
    }
}

/// Prompt and read one trimmed line; `None` at end of input
fn get_user_input<R: BufRead>(prompt: &str, input: &mut R) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, WordList};
    use crate::session::{LoadOutcome, SessionState};
    use crate::wordlists::Puzzle;
    use std::io::Cursor;

    fn words() -> WordList {
        WordList::from_unsorted(
            ["crane", "grape", "slate"]
                .iter()
                .map(|w| Word::new(w).unwrap()),
        )
    }

    fn puzzle() -> Puzzle {
        Puzzle {
            day: 4,
            target: Word::new("grape").unwrap(),
        }
    }

    #[test]
    fn parse_commands_and_guesses() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(" :HELP "), Command::Help);
        assert_eq!(parse_command(":hard"), Command::Toggle(Setting::HardMode));
        assert_eq!(parse_command("crane"), Command::Guess("crane".to_string()));
        assert!(matches!(parse_command(":nope"), Command::Unknown(_)));
    }

    #[test]
    fn lines_play_to_a_win() {
        let words = words();
        let session = SessionState::resume(None, 4).0;
        let mut game = GameController::new(session, puzzle(), &words, LoadOutcome::Continuing);

        play_lines(&mut game, Cursor::new("crane\nzzzzz\ntoolong\ngrape\n")).unwrap();

        let state = game.session();
        assert_eq!(state.num_guesses, 2);
        assert_eq!(state.guess_counts[1], 1);
        assert!(state.is_won(&puzzle().target));
    }

    #[test]
    fn eof_leaves_game_in_progress() {
        let words = words();
        let session = SessionState::resume(None, 4).0;
        let mut game = GameController::new(session, puzzle(), &words, LoadOutcome::Continuing);

        play_lines(&mut game, Cursor::new("slate\n:hard\n")).unwrap();

        let state = game.session();
        assert_eq!(state.num_guesses, 1);
        assert_eq!(state.games_played, 0);
        assert!(state.settings.hard_mode());
    }

    #[test]
    fn rejected_guess_is_replaced_by_next() {
        let words = words();
        let session = SessionState::resume(None, 4).0;
        let mut game = GameController::new(session, puzzle(), &words, LoadOutcome::Continuing);

        play_lines(&mut game, Cursor::new("cra\nslate\n:quit\n")).unwrap();
        assert_eq!(game.session().guesses[0].bytes(), b"SLATE");
        assert_eq!(game.session().num_guesses, 1);
    }
}
