//! Session progress and lifetime statistics
//!
//! One `SessionState` covers a single puzzle day plus the counters that carry
//! across days. It is loaded once at startup, mutated by the controller, and
//! saved once at exit.

use crate::core::{GuessGrid, GuessRow, MAX_GUESSES, Settings, Word};

/// How a saved session related to today's puzzle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoadOutcome {
    /// No usable save; defaults were constructed
    Fresh,
    /// The save is for today; guesses kept
    Continuing,
    /// The save is for yesterday; guesses cleared, streak kept
    Rolled,
    /// The save is older (or from the future); guesses cleared, streak reset
    Broken,
}

impl LoadOutcome {
    /// First run: show the tutorial once
    #[must_use]
    pub const fn needs_tutorial(self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// Persisted progress record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionState {
    pub day: u16,
    pub num_guesses: u8,
    pub guesses: GuessGrid,
    pub games_played: u16,
    pub current_streak: u16,
    pub max_streak: u16,
    /// Wins keyed by guesses used minus one
    pub guess_counts: [u16; MAX_GUESSES],
    pub settings: Settings,
}

impl SessionState {
    /// Reconcile a saved record (if any) with today's day index
    #[must_use]
    pub fn resume(saved: Option<Self>, today: u16) -> (Self, LoadOutcome) {
        let Some(mut state) = saved else {
            let state = Self {
                day: today,
                settings: Settings::DARK,
                ..Self::default()
            };
            tracing::info!(day = today, "no saved session, starting fresh");
            return (state, LoadOutcome::Fresh);
        };

        if state.day == today {
            tracing::info!(day = today, guesses = state.num_guesses, "continuing today's session");
            return (state, LoadOutcome::Continuing);
        }

        let outcome = if state.day.checked_add(1) == Some(today) {
            LoadOutcome::Rolled
        } else {
            state.current_streak = 0;
            LoadOutcome::Broken
        };
        tracing::info!(
            saved_day = state.day,
            day = today,
            ?outcome,
            streak = state.current_streak,
            "new puzzle day"
        );

        state.guesses.clear();
        state.num_guesses = 0;
        state.day = today;
        (state, outcome)
    }

    /// Number of submitted rows as an index
    #[must_use]
    pub const fn submitted(&self) -> usize {
        self.num_guesses as usize
    }

    /// Row being typed, or `None` once every row is used
    #[must_use]
    pub fn current_row(&self) -> Option<&GuessRow> {
        self.guesses.row(self.submitted())
    }

    pub fn current_row_mut(&mut self) -> Option<&mut GuessRow> {
        let index = self.submitted();
        self.guesses.row_mut(index)
    }

    /// Last submitted row
    #[must_use]
    pub fn last_submitted(&self) -> Option<&GuessRow> {
        self.submitted()
            .checked_sub(1)
            .and_then(|index| self.guesses.row(index))
    }

    /// Won or out of rows
    #[must_use]
    pub fn is_complete(&self, target: &Word) -> bool {
        self.is_won(target) || self.submitted() >= MAX_GUESSES
    }

    #[must_use]
    pub fn is_won(&self, target: &Word) -> bool {
        self.last_submitted().is_some_and(|row| row.matches(target))
    }

    /// Accept the current row without deciding the game
    pub fn advance(&mut self) {
        debug_assert!(self.submitted() < MAX_GUESSES);
        self.num_guesses = self.num_guesses.saturating_add(1);
    }

    /// Record a win with the current row; returns the guesses used
    pub fn record_win(&mut self) -> usize {
        let index = self.submitted().min(MAX_GUESSES - 1);
        self.games_played = self.games_played.saturating_add(1);
        self.guess_counts[index] = self.guess_counts[index].saturating_add(1);
        self.current_streak = self.current_streak.saturating_add(1);
        self.max_streak = self.max_streak.max(self.current_streak);
        self.advance();
        tracing::info!(
            day = self.day,
            guesses = self.num_guesses,
            streak = self.current_streak,
            "puzzle solved"
        );
        self.submitted()
    }

    /// Record a loss; the final row must already be accepted
    pub fn record_loss(&mut self) {
        self.games_played = self.games_played.saturating_add(1);
        self.current_streak = 0;
        tracing::info!(day = self.day, "puzzle failed");
    }

    #[must_use]
    pub fn total_wins(&self) -> u32 {
        self.guess_counts.iter().map(|&c| u32::from(c)).sum()
    }

    /// Whole-number win rate, or `None` before the first game
    #[must_use]
    pub fn win_percentage(&self) -> Option<u32> {
        (self.games_played > 0).then(|| 100 * self.total_wins() / u32::from(self.games_played))
    }

    /// Largest histogram bucket (for scaling bars)
    #[must_use]
    pub fn max_guess_count(&self) -> u16 {
        self.guess_counts.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn played_state(day: u16) -> SessionState {
        let mut state = SessionState {
            day,
            num_guesses: 2,
            games_played: 10,
            current_streak: 4,
            max_streak: 7,
            guess_counts: [0, 1, 3, 4, 1, 0],
            settings: Settings::HARD,
            ..SessionState::default()
        };
        state.guesses[0] = GuessRow::from_word(&Word::new("crane").unwrap());
        state.guesses[1] = GuessRow::from_word(&Word::new("train").unwrap());
        state.guesses[2].push(b'G');
        state
    }

    #[test]
    fn missing_save_is_fresh_with_dark_theme() {
        let (state, outcome) = SessionState::resume(None, 42);
        assert_eq!(outcome, LoadOutcome::Fresh);
        assert!(outcome.needs_tutorial());
        assert_eq!(state.day, 42);
        assert_eq!(state.settings, Settings::DARK);
        assert_eq!(state.num_guesses, 0);
        assert_eq!(state.current_streak, 0);
    }

    #[test]
    fn same_day_keeps_guesses() {
        let saved = played_state(100);
        let (state, outcome) = SessionState::resume(Some(saved), 100);
        assert_eq!(outcome, LoadOutcome::Continuing);
        assert!(!outcome.needs_tutorial());
        assert_eq!(state, saved);
        assert_eq!(state.current_row().map(GuessRow::len), Some(1));
    }

    #[test]
    fn next_day_clears_guesses_keeps_streak() {
        let saved = played_state(99);
        let (state, outcome) = SessionState::resume(Some(saved), 100);
        assert_eq!(outcome, LoadOutcome::Rolled);
        assert_eq!(state.day, 100);
        assert_eq!(state.num_guesses, 0);
        assert_eq!(state.guesses, GuessGrid::default());
        assert_eq!(state.current_streak, 4);
        assert_eq!(state.max_streak, 7);
        assert_eq!(state.games_played, 10);
        assert_eq!(state.settings, Settings::HARD);
    }

    #[test]
    fn skipped_day_resets_streak() {
        let saved = played_state(98);
        let (state, outcome) = SessionState::resume(Some(saved), 100);
        assert_eq!(outcome, LoadOutcome::Broken);
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.max_streak, 7);
        assert_eq!(state.num_guesses, 0);
        assert_eq!(state.guesses, GuessGrid::default());
        assert_eq!(state.guess_counts, saved.guess_counts);
    }

    #[test]
    fn future_save_resets_streak() {
        let (state, outcome) = SessionState::resume(Some(played_state(101)), 100);
        assert_eq!(outcome, LoadOutcome::Broken);
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.day, 100);
    }

    #[test]
    fn day_zero_never_rolls_from_max() {
        let (_, outcome) = SessionState::resume(Some(played_state(u16::MAX)), 0);
        assert_eq!(outcome, LoadOutcome::Broken);
    }

    #[test]
    fn win_updates_counters_in_one_call() {
        let mut state = played_state(100);
        let used = state.record_win();

        assert_eq!(used, 3);
        assert_eq!(state.num_guesses, 3);
        assert_eq!(state.games_played, 11);
        assert_eq!(state.guess_counts, [0, 1, 4, 4, 1, 0]);
        assert_eq!(state.current_streak, 5);
        assert_eq!(state.max_streak, 7);
    }

    #[test]
    fn win_raises_max_streak_never_lowers() {
        let mut state = SessionState {
            current_streak: 7,
            max_streak: 7,
            ..SessionState::default()
        };
        state.record_win();
        assert_eq!(state.current_streak, 8);
        assert_eq!(state.max_streak, 8);

        let mut state = SessionState {
            current_streak: 0,
            max_streak: 9,
            ..SessionState::default()
        };
        state.record_win();
        assert_eq!(state.max_streak, 9);
        assert!(state.current_streak <= state.max_streak);
    }

    #[test]
    fn loss_resets_streak() {
        let mut state = played_state(100);
        state.num_guesses = 6;
        state.record_loss();
        assert_eq!(state.games_played, 11);
        assert_eq!(state.current_streak, 0);
        assert_eq!(state.max_streak, 7);
        assert_eq!(state.guess_counts, [0, 1, 3, 4, 1, 0]);
    }

    #[test]
    fn completion_detection() {
        let target = Word::new("train").unwrap();
        let mut state = played_state(100);
        assert!(state.is_won(&target));
        assert!(state.is_complete(&target));

        let other = Word::new("grape").unwrap();
        assert!(!state.is_complete(&other));
        state.num_guesses = 6;
        assert!(state.is_complete(&other));
        assert!(state.current_row().is_none());
    }

    #[test]
    fn derived_statistics() {
        let state = played_state(100);
        assert_eq!(state.total_wins(), 9);
        assert_eq!(state.win_percentage(), Some(90));
        assert_eq!(state.max_guess_count(), 4);
        assert_eq!(SessionState::default().win_percentage(), None);
    }
}
