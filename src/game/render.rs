//! What the controller hands to a renderer each frame

use crate::core::{
    AnimationFrame, AnimationKind, GuessError, GuessGrid, LetterHints, MAX_GUESSES, Settings,
    TileType, WORD_LENGTH, Word, evaluate,
};
use crate::session::SessionState;
use std::fmt;

const PRAISE: [&str; MAX_GUESSES] = [
    "Genius",
    "Magnificent",
    "Impressive",
    "Splendid",
    "Great",
    "Phew",
];

/// Short message shown above the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    /// Won after `guesses` rows (1-6)
    Praise { guesses: usize },
    /// Lost; reveal the target
    Answer(Word),
    /// Submission rejected
    Invalid(GuessError),
}

impl fmt::Display for Toast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Praise { guesses } => {
                let index = guesses.saturating_sub(1).min(MAX_GUESSES - 1);
                f.write_str(PRAISE[index])
            }
            Self::Answer(word) => write!(f, "{word}"),
            Self::Invalid(err) => write!(f, "{err}"),
        }
    }
}

/// Which screen is in front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Board,
    Help,
    Stats,
    Settings,
}

/// Lifetime statistics as shown on the stats screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub games_played: u16,
    pub win_percentage: Option<u32>,
    pub current_streak: u16,
    pub max_streak: u16,
    pub guess_counts: [u16; MAX_GUESSES],
    /// Histogram row to highlight (guesses used today, once the game is over)
    pub highlight: Option<usize>,
}

impl StatsSnapshot {
    /// Counters only, nothing highlighted
    #[must_use]
    pub fn lifetime(session: &SessionState) -> Self {
        Self {
            games_played: session.games_played,
            win_percentage: session.win_percentage(),
            current_streak: session.current_streak,
            max_streak: session.max_streak,
            guess_counts: session.guess_counts,
            highlight: None,
        }
    }

    #[must_use]
    pub fn from_session(session: &SessionState, target: &Word) -> Self {
        Self {
            highlight: session.is_complete(target).then(|| session.submitted()),
            ..Self::lifetime(session)
        }
    }

    #[must_use]
    pub fn max_count(&self) -> u16 {
        self.guess_counts.iter().copied().max().unwrap_or(0)
    }
}

/// One frame's worth of state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub day: u16,
    pub grid: GuessGrid,
    /// For tile colouring only, never displayed while playing
    pub target: Word,
    pub num_submitted: usize,
    pub toast: Option<Toast>,
    pub animation: AnimationFrame,
    pub screen: Screen,
    pub settings: Settings,
    pub stats: StatsSnapshot,
    pub complete: bool,
}

impl RenderRequest {
    /// Tile type at (`row`, `col`)
    ///
    /// # Panics
    /// Panics if `row >= MAX_GUESSES` or `col >= WORD_LENGTH`.
    #[must_use]
    pub fn tile(&self, row: usize, col: usize) -> TileType {
        evaluate(&self.grid, row, col, &self.target, self.num_submitted)
    }

    /// Tiles of every row
    #[must_use]
    pub fn tiles(&self) -> [[TileType; WORD_LENGTH]; MAX_GUESSES] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.tile(row, col)))
    }

    #[must_use]
    pub fn hints(&self) -> LetterHints {
        LetterHints::from_grid(&self.grid, &self.target, self.num_submitted)
    }

    /// Toast to draw this frame
    ///
    /// Hidden while a reveal is playing so the outcome is not spoiled; error
    /// toasts show alongside the shake.
    #[must_use]
    pub fn visible_toast(&self) -> Option<Toast> {
        self.toast
            .filter(|_| self.animation.is_idle() || self.animation.kind == AnimationKind::InvalidWord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn praise_by_guess_count() {
        let text: Vec<String> = (1..=6)
            .map(|guesses| Toast::Praise { guesses }.to_string())
            .collect();
        assert_eq!(
            text,
            vec!["Genius", "Magnificent", "Impressive", "Splendid", "Great", "Phew"]
        );
    }

    #[test]
    fn answer_and_error_toasts() {
        let word = Word::new("grape").unwrap();
        assert_eq!(Toast::Answer(word).to_string(), "GRAPE");
        assert_eq!(
            Toast::Invalid(GuessError::NotInWordList).to_string(),
            "Not in word list"
        );
    }

    #[test]
    fn highlight_only_when_complete() {
        let target = Word::new("grape").unwrap();
        let mut session = SessionState::default();
        session.guesses[0] = crate::core::GuessRow::from_word(&target);
        session.num_guesses = 1;
        assert_eq!(
            StatsSnapshot::from_session(&session, &target).highlight,
            Some(1)
        );

        let other = Word::new("crane").unwrap();
        assert_eq!(StatsSnapshot::from_session(&session, &other).highlight, None);

        // Out of rows: the last bucket is highlighted
        session.guesses = crate::core::GuessGrid::from_rows(
            [crate::core::GuessRow::from_word(&other); crate::core::MAX_GUESSES],
        );
        session.num_guesses = 6;
        assert_eq!(
            StatsSnapshot::from_session(&session, &target).highlight,
            Some(6)
        );
    }
}
