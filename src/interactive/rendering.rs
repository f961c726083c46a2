//! TUI rendering with ratatui
//!
//! Draws a [`RenderRequest`]: the board with its animated tiles, the toast,
//! the keyboard, and the help, stats and settings screens.

use super::transform::{TILE_SIZE, TileTransform, tile_transform};
use crate::core::{MAX_GUESSES, Setting, Settings, TileType, WORD_LENGTH};
use crate::game::{RenderRequest, Screen, StatsSnapshot, time_until_next_puzzle};
use crate::output::formatters::{distribution_width, format_countdown, format_win_percentage};
use chrono::Local;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

const TILE_WIDTH: u16 = 7;
const TILE_HEIGHT: u16 = 3;
const TILE_GAP: u16 = 1;
const BOARD_WIDTH: u16 = TILE_WIDTH * WORD_LENGTH as u16 + TILE_GAP * (WORD_LENGTH as u16 - 1);
const BOARD_HEIGHT: u16 = TILE_HEIGHT * MAX_GUESSES as u16;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Colours for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub bg: Color,
    pub icons: Color,
    pub text: Color,
    pub unused: Color,
    pub absent: Color,
    pub present: Color,
    pub correct: Color,
    pub white: Color,
}

impl Palette {
    /// Theme for the player's settings
    #[must_use]
    pub const fn from_settings(settings: Settings) -> Self {
        let mut palette = if settings.dark_theme() {
            Self {
                bg: Color::Rgb(0x12, 0x12, 0x13),
                icons: Color::Rgb(0x56, 0x57, 0x58),
                text: Color::Rgb(0xd7, 0xda, 0xdc),
                unused: Color::Rgb(0x81, 0x83, 0x84),
                absent: Color::Rgb(0x3a, 0x3a, 0x3c),
                present: Color::Rgb(0xb5, 0x9f, 0x3b),
                correct: Color::Rgb(0x53, 0x8d, 0x4e),
                white: Color::Rgb(0xd7, 0xda, 0xdc),
            }
        } else {
            Self {
                bg: Color::Rgb(0xff, 0xff, 0xff),
                icons: Color::Rgb(0x87, 0x8a, 0x8c),
                text: Color::Rgb(0x00, 0x00, 0x00),
                unused: Color::Rgb(0xd3, 0xd6, 0xda),
                absent: Color::Rgb(0x78, 0x7c, 0x7e),
                present: Color::Rgb(0xc9, 0xb4, 0x58),
                correct: Color::Rgb(0x6a, 0xaa, 0x64),
                white: Color::Rgb(0xff, 0xff, 0xff),
            }
        };
        if settings.high_contrast() {
            palette.correct = Color::Rgb(0xf5, 0x79, 0x3a);
            palette.present = Color::Rgb(0x85, 0xc0, 0xf9);
        }
        palette
    }

    /// (fill, border) for a tile; `None` fill means background
    #[must_use]
    pub const fn tile_colors(&self, tile: TileType) -> (Option<Color>, Color) {
        match tile {
            TileType::Empty => (None, self.absent),
            TileType::Unsubmitted => (None, self.icons),
            TileType::Absent => (Some(self.absent), self.absent),
            TileType::Present => (Some(self.present), self.present),
            TileType::Correct => (Some(self.correct), self.correct),
        }
    }

    const fn key_color(&self, hint: Option<TileType>) -> Color {
        match hint {
            Some(TileType::Correct) => self.correct,
            Some(TileType::Present) => self.present,
            Some(TileType::Absent) => self.absent,
            _ => self.unused,
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, request: &RenderRequest, settings_cursor: usize) {
    let palette = Palette::from_settings(request.settings);
    f.render_widget(Block::default().style(palette.base()), f.area());

    match request.screen {
        Screen::Board => render_board_screen(f, request, &palette),
        Screen::Help => render_help(f, &palette),
        Screen::Stats => render_stats(f, &request.stats, &palette),
        Screen::Settings => render_settings(f, request, settings_cursor, &palette),
    }
}

/// Full-screen message for a fatal startup condition
pub fn error_screen(f: &mut Frame, lines: &[&str]) {
    let palette = Palette::from_settings(Settings::DARK);
    f.render_widget(Block::default().style(palette.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Percentage(25),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    render_title(f, chunks[0], &palette);

    let text: Vec<Line> = lines.iter().map(|&line| Line::from(line)).collect();
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(palette.base()),
        chunks[2],
    );
    render_footer(f, chunks[3], "Press any key to exit", &palette);
}

fn render_title(f: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new("W O R D L E")
        .alignment(Alignment::Center)
        .style(palette.base().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(palette.icons)),
        );
    f.render_widget(title, area);
}

fn render_footer(f: &mut Frame, area: Rect, text: &str, palette: &Palette) {
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(palette.icons).bg(palette.bg)),
        area,
    );
}

fn render_board_screen(f: &mut Frame, request: &RenderRequest, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Title
            Constraint::Length(1),            // Toast
            Constraint::Length(1),            // Hop headroom
            Constraint::Length(BOARD_HEIGHT), // Board
            Constraint::Length(1),
            Constraint::Length(3), // Keyboard
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(f.area());

    render_title(f, chunks[0], palette);

    if let Some(toast) = request.visible_toast() {
        let text = format!(" {toast} ");
        let width = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
        let toast = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(palette.bg)
                    .bg(palette.text)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(toast, centered(chunks[1], width, 1));
    }

    let board = centered(chunks[3], BOARD_WIDTH, BOARD_HEIGHT);
    for row in 0..MAX_GUESSES {
        for col in 0..WORD_LENGTH {
            let transform = tile_transform(
                request.animation,
                row,
                col,
                &request.grid,
                request.num_submitted,
            );
            let base = Rect::new(
                board.x + col as u16 * (TILE_WIDTH + TILE_GAP),
                board.y + row as u16 * TILE_HEIGHT,
                TILE_WIDTH,
                TILE_HEIGHT,
            );
            render_tile(
                f,
                base,
                request.grid[row].letter(col),
                request.tile(row, col),
                transform,
                palette,
            );
        }
    }

    render_keyboard(f, chunks[5], request, palette);

    let footer = if request.complete {
        "F1 Help | F2 Stats | F3 Settings | Esc Quit"
    } else {
        "Type a word, Enter to submit | F1 Help | F2 Stats | F3 Settings | Esc Quit"
    };
    render_footer(f, chunks[7], footer, palette);
}

/// Apply the animation transform to a tile's cell rectangle
fn transformed_rect(base: Rect, transform: TileTransform) -> Rect {
    let mut rect = base;
    rect.x = rect.x.saturating_add_signed(transform.dx as i16);
    if transform.dy <= -TILE_SIZE / 4 {
        rect.y = rect.y.saturating_sub(1);
    }
    if transform.width > TILE_SIZE {
        rect.x = rect.x.saturating_sub(1);
        rect.width += 2;
    }
    rect
}

fn render_tile(
    f: &mut Frame,
    base: Rect,
    letter: Option<u8>,
    tile: TileType,
    transform: TileTransform,
    palette: &Palette,
) {
    if transform.hidden {
        return;
    }
    let tile = if transform.concealed && tile > TileType::Unsubmitted {
        TileType::Unsubmitted
    } else {
        tile
    };
    let (fill, border) = palette.tile_colors(tile);
    let fill = fill.unwrap_or(palette.bg);
    let rect = transformed_rect(base, transform).intersection(f.area());
    let text = letter.map(char::from).unwrap_or(' ').to_string();
    let letter_style = Style::default()
        .fg(if tile > TileType::Unsubmitted {
            palette.white
        } else {
            palette.text
        })
        .bg(fill)
        .add_modifier(Modifier::BOLD);

    let ratio = transform.height_ratio();
    if ratio < 0.34 {
        // Edge-on mid-flip: a single line
        let line = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1).intersection(rect);
        f.render_widget(
            Paragraph::new("─".repeat(usize::from(line.width)))
                .style(Style::default().fg(border).bg(palette.bg)),
            line,
        );
        return;
    }
    if ratio < 0.67 {
        let line = Rect::new(rect.x, rect.y + rect.height / 2, rect.width, 1).intersection(rect);
        let shown = if transform.height >= TILE_SIZE / 2 { text } else { String::new() };
        f.render_widget(
            Paragraph::new(shown)
                .alignment(Alignment::Center)
                .style(letter_style),
            line,
        );
        return;
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(border).bg(fill))
        .style(Style::default().bg(fill));
    f.render_widget(
        Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(letter_style)
            .block(block),
        rect,
    );
}

fn render_keyboard(f: &mut Frame, area: Rect, request: &RenderRequest, palette: &Palette) {
    let hints = request.hints();
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .bytes()
                .flat_map(|b| {
                    let key = Span::styled(
                        format!(" {} ", char::from(b)),
                        Style::default()
                            .fg(palette.white)
                            .bg(palette.key_color(hints.get(b)))
                            .add_modifier(Modifier::BOLD),
                    );
                    [key, Span::raw(" ")]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(palette.base()),
        area,
    );
}

fn example_row(word: &str, marked: usize, tile: TileType, palette: &Palette) -> Line<'static> {
    let spans: Vec<Span> = word
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let style = if i == marked {
                let (fill, _) = palette.tile_colors(tile);
                Style::default()
                    .fg(palette.white)
                    .bg(fill.unwrap_or(palette.bg))
            } else {
                Style::default().fg(palette.text).bg(palette.absent)
            };
            [
                Span::styled(format!(" {c} "), style.add_modifier(Modifier::BOLD)),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn render_help(f: &mut Frame, palette: &Palette) {
    let heading = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::styled("HOW TO PLAY", heading).alignment(Alignment::Center),
        Line::from(""),
        Line::from("Guess the WORDLE in 6 tries."),
        Line::from(""),
        Line::from("Each guess must be a valid 5 letter word."),
        Line::from("Hit the enter key to submit."),
        Line::from(""),
        Line::from("After each guess, the color of the tiles"),
        Line::from("will change to show how close your guess"),
        Line::from("was to the word."),
        Line::from(""),
        Line::styled("Examples", heading),
        Line::from(""),
        example_row("WEARY", 0, TileType::Correct, palette),
        Line::from("W is in the word and in the correct spot."),
        Line::from(""),
        example_row("PILLS", 1, TileType::Present, palette),
        Line::from("I is in the word but in the wrong spot."),
        Line::from(""),
        example_row("VAGUE", 2, TileType::Absent, palette),
        Line::from("G is not in the word in any spot."),
        Line::from(""),
        Line::from("A new WORDLE will be available each day!"),
    ];

    let area = centered(f.area(), 44, f.area().height.saturating_sub(1));
    f.render_widget(Paragraph::new(lines).style(palette.base()), area);
    render_footer(f, footer_area(f.area()), "Press any key to return", palette);
}

fn render_stats(f: &mut Frame, stats: &StatsSnapshot, palette: &Palette) {
    let number = Style::default()
        .fg(palette.text)
        .add_modifier(Modifier::BOLD);
    let label = Style::default().fg(palette.text);

    let mut lines = vec![
        Line::styled("STATISTICS", number).alignment(Alignment::Center),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{:^10}", stats.games_played), number),
            Span::styled(
                format!("{:^10}", format_win_percentage(stats.win_percentage)),
                number,
            ),
            Span::styled(format!("{:^10}", stats.current_streak), number),
            Span::styled(format!("{:^10}", stats.max_streak), number),
        ])
        .alignment(Alignment::Center),
        Line::from(vec![
            Span::styled(format!("{:^10}", "Played"), label),
            Span::styled(format!("{:^10}", "Win %"), label),
            Span::styled(format!("{:^10}", "Current"), label),
            Span::styled(format!("{:^10}", "Max"), label),
        ])
        .alignment(Alignment::Center),
        Line::from(vec![
            Span::styled(format!("{:^10}", ""), label),
            Span::styled(format!("{:^10}", ""), label),
            Span::styled(format!("{:^10}", "Streak"), label),
            Span::styled(format!("{:^10}", "Streak"), label),
        ])
        .alignment(Alignment::Center),
        Line::from(""),
        Line::styled("GUESS DISTRIBUTION", number).alignment(Alignment::Center),
        Line::from(""),
    ];

    let max_count = stats.max_count();
    for (index, &count) in stats.guess_counts.iter().enumerate() {
        let color = if stats.highlight == Some(index + 1) {
            palette.correct
        } else {
            palette.absent
        };
        let width = distribution_width(count, max_count, 30);
        let bar = format!("{count:>width$} ");
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", index + 1), label),
            Span::styled(
                bar,
                Style::default()
                    .fg(palette.white)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    let countdown = time_until_next_puzzle(Local::now().naive_local());
    lines.extend([
        Line::from(""),
        Line::styled("NEXT WORDLE", number).alignment(Alignment::Center),
        Line::styled(format_countdown(countdown), number).alignment(Alignment::Center),
    ]);

    let area = centered(f.area(), 44, f.area().height.saturating_sub(1));
    f.render_widget(Paragraph::new(lines).style(palette.base()), area);
    render_footer(f, footer_area(f.area()), "Press any key to return", palette);
}

fn render_settings(f: &mut Frame, request: &RenderRequest, cursor: usize, palette: &Palette) {
    let mut lines = vec![
        Line::styled(
            "SETTINGS",
            Style::default()
                .fg(palette.text)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        Line::from(""),
    ];

    for (index, setting) in Setting::ALL.into_iter().enumerate() {
        let on = request.settings.contains(setting);
        let selected = index == cursor;
        let toggle = Span::styled(
            if on { " ON  " } else { " OFF " },
            Style::default()
                .fg(palette.white)
                .bg(if on { palette.correct } else { palette.absent })
                .add_modifier(Modifier::BOLD),
        );
        let marker = if selected { "> " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{:<30}", setting.label()),
                Style::default()
                    .fg(palette.text)
                    .add_modifier(Modifier::BOLD),
            ),
            toggle,
            Span::raw(if selected { " <" } else { "" }),
        ]));
        lines.push(Line::styled(
            format!("  {}", setting.description()),
            Style::default().fg(palette.icons),
        ));
        lines.push(Line::styled(
            "─".repeat(40),
            Style::default().fg(palette.icons),
        ));
    }

    lines.push(Line::from(""));
    lines.push(
        Line::styled(format!("#{}", request.day), Style::default().fg(palette.icons))
            .alignment(Alignment::Right),
    );

    let area = centered(f.area(), 44, f.area().height.saturating_sub(1));
    f.render_widget(Paragraph::new(lines).style(palette.base()), area);
    render_footer(
        f,
        footer_area(f.area()),
        "Up/Down select | Enter toggle | Esc return",
        palette,
    );
}

fn footer_area(area: Rect) -> Rect {
    Rect::new(
        area.x,
        area.y + area.height.saturating_sub(1),
        area.width,
        area.height.min(1),
    )
}

/// Rectangle of at most `width` x `height` centred horizontally in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(area.x + (area.width - width) / 2, area.y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_swaps_hit_colours() {
        let normal = Palette::from_settings(Settings::DARK);
        let contrast = Palette::from_settings(Settings::DARK.with(Setting::HighContrast));
        assert_ne!(normal.correct, contrast.correct);
        assert_ne!(normal.present, contrast.present);
        assert_eq!(normal.absent, contrast.absent);
        assert_eq!(contrast.correct, Color::Rgb(0xf5, 0x79, 0x3a));
    }

    #[test]
    fn light_theme_without_dark_bit() {
        let light = Palette::from_settings(Settings::default());
        assert_eq!(light.bg, Color::Rgb(0xff, 0xff, 0xff));
    }

    #[test]
    fn empty_tiles_have_no_fill() {
        let palette = Palette::from_settings(Settings::DARK);
        assert_eq!(palette.tile_colors(TileType::Empty), (None, palette.absent));
        assert_eq!(
            palette.tile_colors(TileType::Correct),
            (Some(palette.correct), palette.correct)
        );
    }

    #[test]
    fn shake_and_hop_move_the_cell() {
        let base = Rect::new(10, 10, TILE_WIDTH, TILE_HEIGHT);
        let shaken = transformed_rect(
            base,
            TileTransform {
                dx: -1,
                ..TileTransform::default()
            },
        );
        assert_eq!(shaken.x, 9);

        let hopped = transformed_rect(
            base,
            TileTransform {
                dy: -10,
                ..TileTransform::default()
            },
        );
        assert_eq!(hopped.y, 9);

        assert_eq!(transformed_rect(base, TileTransform::default()), base);
    }

    #[test]
    fn centered_clamps_to_area() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered(area, 10, 3), Rect::new(5, 0, 10, 3));
        assert_eq!(centered(area, 40, 9), area);
    }
}
