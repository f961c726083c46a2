//! Game controller
//!
//! Turns logical input events into session and animation changes, and builds
//! the render request for each frame. Shells map keys to [`GameEvent`]s and
//! draw whatever [`GameController::frame`] returns.

use super::render::{RenderRequest, Screen, StatsSnapshot, Toast};
use crate::core::{AnimationClock, AnimationKind, GuessRow, GuessValidator, Setting, WordList};
use crate::session::{LoadOutcome, SessionState};
use crate::wordlists::Puzzle;

/// Decoded input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEvent {
    Submit,
    Backspace,
    Letter(char),
    OpenHelp,
    OpenStats,
    OpenSettings,
    /// Flip setting `index` (0 hard, 1 dark, 2 contrast) on the settings screen
    ToggleSetting(usize),
    /// Dismiss the help, stats or settings screen
    Close,
    Quit,
}

/// Drives one day's game
pub struct GameController<'a> {
    session: SessionState,
    puzzle: Puzzle,
    validator: GuessValidator<'a>,
    clock: AnimationClock,
    toast: Option<Toast>,
    screen: Screen,
    finished: bool,
}

impl<'a> GameController<'a> {
    /// Start a game from a resumed session
    ///
    /// A fresh session opens the help screen first.
    #[must_use]
    pub fn new(
        session: SessionState,
        puzzle: Puzzle,
        words: &'a WordList,
        outcome: LoadOutcome,
    ) -> Self {
        let mut clock = AnimationClock::new();
        clock.start(AnimationKind::FlipAll);

        Self {
            session,
            puzzle,
            validator: GuessValidator::new(words),
            clock,
            toast: None,
            screen: if outcome.needs_tutorial() {
                Screen::Help
            } else {
                Screen::Board
            },
            finished: false,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    /// Hand back the session for saving
    #[must_use]
    pub fn into_session(self) -> SessionState {
        self.session
    }

    #[must_use]
    pub const fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub const fn toast(&self) -> Option<Toast> {
        self.toast
    }

    /// Quit was requested
    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.finished
    }

    /// Won or out of rows
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete(&self.puzzle.target)
    }

    /// Apply one event
    pub fn handle(&mut self, event: GameEvent) {
        tracing::debug!(?event, screen = ?self.screen, "event");

        match event {
            GameEvent::Quit => self.finished = true,
            GameEvent::OpenHelp => self.screen = Screen::Help,
            GameEvent::OpenStats => self.screen = Screen::Stats,
            GameEvent::OpenSettings => self.screen = Screen::Settings,
            GameEvent::Close => self.screen = Screen::Board,
            GameEvent::ToggleSetting(index) => self.toggle_setting(index),
            GameEvent::Submit | GameEvent::Backspace | GameEvent::Letter(_)
                if self.screen != Screen::Board => {}
            GameEvent::Submit => self.submit(),
            GameEvent::Backspace => self.backspace(),
            GameEvent::Letter(c) => self.type_letter(c),
        }
    }

    /// Build this frame's render request, then advance the animation
    pub fn frame(&mut self) -> RenderRequest {
        let animation = self.clock.tick();
        RenderRequest {
            day: self.puzzle.day,
            grid: self.session.guesses,
            target: self.puzzle.target,
            num_submitted: self.session.submitted(),
            toast: self.toast,
            animation,
            screen: self.screen,
            settings: self.session.settings,
            stats: StatsSnapshot::from_session(&self.session, &self.puzzle.target),
            complete: self.is_complete(),
        }
    }

    fn type_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() || self.is_complete() {
            return;
        }
        let letter = c.to_ascii_uppercase() as u8;
        let pushed = self
            .session
            .current_row_mut()
            .is_some_and(|row| row.push(letter));
        if pushed {
            self.clock.start(AnimationKind::TypeLetter);
        }
    }

    fn backspace(&mut self) {
        if self.is_complete() {
            return;
        }
        let popped = self
            .session
            .current_row_mut()
            .and_then(GuessRow::pop)
            .is_some();
        if popped {
            self.toast = None;
        }
    }

    fn submit(&mut self) {
        if self.is_complete() {
            return;
        }
        let current = self.session.submitted();
        let target = self.puzzle.target;

        if self
            .session
            .current_row()
            .is_some_and(|row| row.matches(&target))
        {
            let guesses = self.session.record_win();
            self.clock.start(AnimationKind::Success);
            self.toast = Some(Toast::Praise { guesses });
            return;
        }

        match self.validator.validate(
            &self.session.guesses,
            &target,
            current,
            self.session.settings,
        ) {
            Ok(()) => {
                self.session.advance();
                self.clock.start(AnimationKind::FlipLine);
                if self.is_complete() {
                    self.session.record_loss();
                    self.toast = Some(Toast::Answer(target));
                }
            }
            Err(err) => {
                tracing::debug!(%err, "guess rejected");
                self.clock.start(AnimationKind::InvalidWord);
                self.toast = Some(Toast::Invalid(err));
            }
        }
    }

    fn toggle_setting(&mut self, index: usize) {
        if self.screen != Screen::Settings {
            return;
        }
        match Setting::from_index(index) {
            Some(setting) => {
                self.session.settings.toggle(setting);
                tracing::info!(%setting, on = self.session.settings.contains(setting), "setting changed");
            }
            None => tracing::warn!(index, "ignoring unknown setting index"),
        }
    }
}
