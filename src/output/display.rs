//! Colored line output for the plain shell and the `stats` command

use super::formatters::{distribution_bar, format_countdown, format_win_percentage};
use crate::core::{GuessGrid, LetterHints, MAX_GUESSES, TileType, Word, evaluate_row};
use crate::game::{StartupError, StatsSnapshot, Toast};
use chrono::TimeDelta;
use colored::{ColoredString, Colorize};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

fn paint(text: &str, tile: Option<TileType>, high_contrast: bool) -> ColoredString {
    match (tile, high_contrast) {
        (Some(TileType::Correct), false) => text.black().on_green().bold(),
        (Some(TileType::Correct), true) => text.black().on_truecolor(0xf5, 0x79, 0x3a).bold(),
        (Some(TileType::Present), false) => text.black().on_yellow().bold(),
        (Some(TileType::Present), true) => text.black().on_truecolor(0x85, 0xc0, 0xf9).bold(),
        (Some(TileType::Absent), _) => text.white().on_bright_black(),
        _ => text.bright_white(),
    }
}

/// Print submitted rows as coloured letters, plus the row being typed
pub fn print_board(grid: &GuessGrid, target: &Word, num_submitted: usize, high_contrast: bool) {
    println!();
    for row in 0..MAX_GUESSES {
        let guess = &grid[row];
        if row > num_submitted || (row == num_submitted && guess.is_empty()) {
            break;
        }
        let tiles = evaluate_row(grid, row, target, num_submitted);
        let line: Vec<String> = tiles
            .iter()
            .enumerate()
            .map(|(col, &tile)| {
                let letter = guess.letter(col).map_or('_', char::from);
                paint(&format!(" {letter} "), Some(tile), high_contrast).to_string()
            })
            .collect();
        println!("   {}", line.join(" "));
    }
    println!();
}

/// Print the keyboard with the best-known state of each letter
pub fn print_keyboard(hints: &LetterHints, high_contrast: bool) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .bytes()
            .map(|b| paint(&char::from(b).to_string(), hints.get(b), high_contrast).to_string())
            .collect();
        println!("   {}{}", " ".repeat(indent), keys.join(" "));
    }
}

/// Print a toast on its own line
pub fn print_toast(toast: &Toast) {
    let text = toast.to_string();
    match toast {
        Toast::Praise { .. } => println!("\n  {}", text.bright_green().bold()),
        Toast::Answer(_) => println!("\n  {}", text.bright_yellow().bold()),
        Toast::Invalid(_) => println!("  {}", format!("❌ {text}").red()),
    }
}

/// Print lifetime statistics and the countdown to the next puzzle
pub fn print_stats(stats: &StatsSnapshot, next_puzzle: Option<TimeDelta>) {
    println!("\n{}", "═".repeat(44).cyan());
    println!(" {} ", "STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(44).cyan());

    println!(
        "\n   Played: {}   Win %: {}   Current streak: {}   Max streak: {}",
        stats.games_played.to_string().bright_yellow().bold(),
        format_win_percentage(stats.win_percentage)
            .bright_yellow()
            .bold(),
        stats.current_streak.to_string().bright_yellow().bold(),
        stats.max_streak.to_string().bright_yellow().bold()
    );

    println!("\n {}", "GUESS DISTRIBUTION".bright_cyan().bold());
    let max_count = stats.max_count();
    for (index, &count) in stats.guess_counts.iter().enumerate() {
        let bar = distribution_bar(count, max_count, 30);
        let bar = if stats.highlight == Some(index + 1) {
            bar.green()
        } else {
            bar.bright_black()
        };
        println!("   {}: {bar} {count}", index + 1);
    }

    if let Some(remaining) = next_puzzle {
        println!(
            "\n   Next puzzle in {}",
            format_countdown(remaining).bright_white().bold()
        );
    }
    println!();
}

/// Print a fatal startup condition
pub fn print_startup_error(err: &StartupError) {
    eprintln!();
    for line in err.message_lines() {
        eprintln!("  {}", line.red().bold());
    }
    eprintln!("\n  {}", err.to_string().bright_black());
}
