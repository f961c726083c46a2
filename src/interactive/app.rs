//! TUI application state and event loop

use crate::core::Setting;
use crate::game::{GameController, GameEvent, Screen, StartupError};
use crate::session::SessionState;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Time between frames when no key arrives (about 30 fps)
const FRAME_TIME: Duration = Duration::from_millis(33);

/// Application state
pub struct App<'a> {
    pub controller: GameController<'a>,
    /// Highlighted row on the settings screen
    pub settings_cursor: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub const fn new(controller: GameController<'a>) -> Self {
        Self {
            controller,
            settings_cursor: 0,
        }
    }

    /// Translate a key press into a game event for the current screen
    pub fn map_key(&mut self, key: KeyEvent) -> Option<GameEvent> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(GameEvent::Quit);
        }

        match self.controller.screen() {
            Screen::Board => match key.code {
                KeyCode::Esc => Some(GameEvent::Quit),
                KeyCode::Enter => Some(GameEvent::Submit),
                KeyCode::Backspace | KeyCode::Delete => Some(GameEvent::Backspace),
                KeyCode::F(1) | KeyCode::Char('?') => Some(GameEvent::OpenHelp),
                KeyCode::F(2) => Some(GameEvent::OpenStats),
                KeyCode::F(3) => {
                    self.settings_cursor = 0;
                    Some(GameEvent::OpenSettings)
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => Some(GameEvent::Letter(c)),
                _ => None,
            },
            Screen::Settings => match key.code {
                KeyCode::Esc | KeyCode::F(3) => Some(GameEvent::Close),
                KeyCode::Up => {
                    self.settings_cursor =
                        (self.settings_cursor + Setting::ALL.len() - 1) % Setting::ALL.len();
                    None
                }
                KeyCode::Down => {
                    self.settings_cursor = (self.settings_cursor + 1) % Setting::ALL.len();
                    None
                }
                KeyCode::Enter | KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => {
                    Some(GameEvent::ToggleSetting(self.settings_cursor))
                }
                _ => None,
            },
            Screen::Help | Screen::Stats => Some(GameEvent::Close),
        }
    }
}

/// Set up the terminal, run `body`, and always restore the terminal
fn with_terminal<T>(
    body: impl FnOnce(&mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<T>,
) -> Result<T> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = body(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Run the TUI application
///
/// Returns the session as it stands when the player quits, for saving.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionState> {
    with_terminal(|terminal| run_app(terminal, app))
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionState> {
    loop {
        let request = app.controller.frame();
        terminal.draw(|f| super::rendering::ui(f, &request, app.settings_cursor))?;

        if event::poll(FRAME_TIME)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
            && let Some(game_event) = app.map_key(key)
        {
            app.controller.handle(game_event);
        }

        if app.controller.is_finished() {
            break;
        }
    }

    Ok(app.controller.into_session())
}

/// Show a fatal startup condition until a key is pressed
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up or drawn to.
pub fn show_startup_error(err: &StartupError) -> Result<()> {
    with_terminal(|terminal| {
        loop {
            terminal.draw(|f| super::rendering::error_screen(f, err.message_lines()))?;
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    })
}
