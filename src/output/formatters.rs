//! Formatting utilities for terminal output

use crate::core::{TileType, WORD_LENGTH};
use chrono::TimeDelta;

/// Emoji square for one tile
///
/// High contrast swaps green/yellow for orange/blue.
#[must_use]
pub const fn tile_to_emoji(tile: TileType, high_contrast: bool) -> char {
    match (tile, high_contrast) {
        (TileType::Correct, false) => '🟩',
        (TileType::Correct, true) => '🟧',
        (TileType::Present, false) => '🟨',
        (TileType::Present, true) => '🟦',
        (TileType::Absent, _) => '⬛',
        (TileType::Empty | TileType::Unsubmitted, _) => '⬜',
    }
}

/// Format a row of tiles as emoji string
#[must_use]
pub fn row_to_emoji(tiles: &[TileType; WORD_LENGTH], high_contrast: bool) -> String {
    tiles
        .iter()
        .map(|&tile| tile_to_emoji(tile, high_contrast))
        .collect()
}

/// Width of a guess distribution bar
///
/// Every bar is at least one cell wide so zero counts stay visible; the
/// largest bucket fills `width`.
#[must_use]
pub fn distribution_width(count: u16, max_count: u16, width: usize) -> usize {
    if max_count == 0 || width == 0 {
        return 1;
    }
    let scaled = usize::from(count) * (width - 1) / usize::from(max_count);
    (scaled + 1).min(width)
}

/// Create a distribution bar string
#[must_use]
pub fn distribution_bar(count: u16, max_count: u16, width: usize) -> String {
    "█".repeat(distribution_width(count, max_count, width))
}

/// Win percentage, or a dash before the first game
#[must_use]
pub fn format_win_percentage(percentage: Option<u32>) -> String {
    percentage.map_or_else(|| "-".to_string(), |p| p.to_string())
}

/// Countdown as `HH:MM:SS`
#[must_use]
pub fn format_countdown(remaining: TimeDelta) -> String {
    let total = remaining.num_seconds().max(0);
    format!(
        "{:02}:{:02}:{:02}",
        total / 3600,
        total / 60 % 60,
        total % 60
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_emoji_default_palette() {
        let tiles = [
            TileType::Correct,
            TileType::Present,
            TileType::Absent,
            TileType::Absent,
            TileType::Correct,
        ];
        assert_eq!(row_to_emoji(&tiles, false), "🟩🟨⬛⬛🟩");
        assert_eq!(row_to_emoji(&tiles, true), "🟧🟦⬛⬛🟧");
    }

    #[test]
    fn distribution_scales_to_largest() {
        assert_eq!(distribution_width(0, 0, 20), 1);
        assert_eq!(distribution_width(0, 8, 20), 1);
        assert_eq!(distribution_width(8, 8, 20), 20);
        assert_eq!(distribution_width(4, 8, 21), 11);
        assert_eq!(distribution_bar(2, 2, 3), "███");
    }

    #[test]
    fn win_percentage_dash_before_first_game() {
        assert_eq!(format_win_percentage(None), "-");
        assert_eq!(format_win_percentage(Some(83)), "83");
    }

    #[test]
    fn countdown_format() {
        assert_eq!(format_countdown(TimeDelta::seconds(3600 + 29 * 60 + 45)), "01:29:45");
        assert_eq!(format_countdown(TimeDelta::zero()), "00:00:00");
        assert_eq!(format_countdown(TimeDelta::seconds(-5)), "00:00:00");
    }
}
