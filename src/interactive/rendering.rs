//! TUI rendering with ratatui
//!
//! Letter grid, on-screen keyboard, message log and the end-of-game popup.

use super::app::{App, InputMode, MessageStyle};
use crate::core::LetterVerdict;
use crate::output::formatters::share_text;
use crate::output::outcome_message;
use crate::output::palette::{KEY_COLOR, MISSING_COLOR, Palette, Rgb, UNKNOWN_COLOR};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

const KEY_LABELS: [&[&str]; 3] = [
    &["Q", "W", "E", "R", "T", "Y", "U", "I", "O", "P"],
    &["A", "S", "D", "F", "G", "H", "J", "K", "L"],
    &["ENTER", "Z", "X", "C", "V", "B", "N", "M", "DELETE"],
];

const fn rgb(color: Rgb) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

fn tile_style(background: Rgb) -> Style {
    let fg = if background == UNKNOWN_COLOR {
        Color::Black
    } else {
        Color::White
    };
    Style::default()
        .bg(rgb(background))
        .fg(fg)
        .add_modifier(Modifier::BOLD)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    // Each grid row is one line of tiles plus a spacer line
    let grid_height = (app.config.max_rows * 2 + 1) as u16;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Length(grid_height + 2), // Grid
            Constraint::Length(5),               // Keyboard
            Constraint::Min(4),                  // Messages
            Constraint::Length(1),               // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_grid(f, app, chunks[1]);
    render_keyboard(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.input_mode == InputMode::GameOver {
        render_outcome_popup(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("W O R D L E")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn grid_lines(app: &App) -> Vec<Line<'static>> {
    let palette = app.palette;
    let width = app.config.word_length;
    let history = app.game.history();
    let typing_row = (!app.game.is_terminal()).then(|| app.game.current_row());

    let mut lines = vec![Line::from("")];
    for row in 0..app.config.max_rows {
        let mut spans = Vec::with_capacity(width * 2);
        if let Some((word, result)) = history.get(row) {
            for (letter, &verdict) in word.text().chars().zip(result.verdicts()) {
                spans.push(Span::styled(
                    format!(" {} ", letter.to_ascii_uppercase()),
                    tile_style(palette.color(verdict)),
                ));
                spans.push(Span::raw(" "));
            }
        } else {
            let typed: Vec<char> = if typing_row == Some(row) {
                app.input_buffer.chars().collect()
            } else {
                Vec::new()
            };
            for col in 0..width {
                let letter = typed.get(col).copied().unwrap_or(' ');
                spans.push(Span::styled(
                    format!(" {letter} "),
                    tile_style(UNKNOWN_COLOR),
                ));
                spans.push(Span::raw(" "));
            }
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    lines
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let grid = Paragraph::new(grid_lines(app))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guess {}/{} ",
                    (app.game.current_row() + 1).min(app.config.max_rows),
                    app.config.max_rows
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, area);
}

fn key_color(palette: Palette, hint: Option<LetterVerdict>) -> Rgb {
    match hint {
        Some(LetterVerdict::Absent) => MISSING_COLOR,
        Some(verdict) => palette.color(verdict),
        None => KEY_COLOR,
    }
}

fn render_keyboard(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = KEY_LABELS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .flat_map(|&label| {
                    let (text, background) = match label {
                        "ENTER" => ("ENTER".to_string(), KEY_COLOR),
                        "DELETE" => (" ⌫ ".to_string(), KEY_COLOR),
                        _ => {
                            let letter = label.chars().next().unwrap_or(' ');
                            (
                                format!(" {label} "),
                                key_color(app.palette, app.key_hint(letter)),
                            )
                        }
                    };
                    let fg = if background == KEY_COLOR {
                        Color::Black
                    } else {
                        Color::White
                    };
                    [
                        Span::styled(text, Style::default().bg(rgb(background)).fg(fg)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let palette = Paragraph::new(app.palette.name()).alignment(Alignment::Center);
    f.render_widget(palette, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.games_played,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "n: New Game | q: Quit | F2: Palette",
        InputMode::Guessing => "Enter: Submit | F2: Palette | Ctrl-N: New | Esc: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

fn render_outcome_popup(f: &mut Frame, app: &App) {
    let Some(outcome) = outcome_message(app.game.status()) else {
        return;
    };

    let mut lines: Vec<Line> = outcome.message.lines().map(Line::from).collect();
    if let Some(target) = app.game.revealed_target() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("The word was "),
            Span::styled(
                target.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    }
    lines.push(Line::from(""));
    lines.extend(
        share_text(&app.game, app.palette)
            .lines()
            .map(|line| Line::from(line.to_string())),
    );
    lines.push(Line::from(""));
    lines.push(Line::from("n: new game | q: quit"));

    let height = (lines.len() + 2) as u16;
    let area = centered_rect(56, height, f.area());
    let popup = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" {} ", outcome.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of at most `width` × `height` centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::dictionary::loader::words_from_slice;
    use crate::dictionary::{Dictionary, TargetPool};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["train"]),
            5,
            TargetPool::Curated(words_from_slice(&["crane"])),
        )
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    fn app(dictionary: &Dictionary) -> App<'_> {
        App::new(
            dictionary,
            GameConfig::default(),
            Palette::Normal,
            StdRng::seed_from_u64(5),
        )
        .unwrap()
    }

    #[test]
    fn grid_has_one_line_pair_per_row() {
        let dictionary = dictionary();
        let app = app(&dictionary);
        assert_eq!(grid_lines(&app).len(), 1 + 2 * 6);
    }

    #[test]
    fn typed_letters_show_in_current_row() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        app.type_letter('t');
        app.type_letter('r');

        let text = screen(&app);
        assert!(text.contains(" T "));
        assert!(text.contains("Guess 1/6"));
    }

    #[test]
    fn popup_shown_after_win() {
        let dictionary = dictionary();
        let mut app = app(&dictionary);
        for c in "crane".chars() {
            app.type_letter(c);
        }
        app.submit_row();

        let text = screen(&app);
        assert!(text.contains("You guessed it in 1 try."));
        assert!(text.contains("CRANE"));
    }

    #[test]
    fn key_color_uses_palette() {
        assert_eq!(key_color(Palette::Normal, None), KEY_COLOR);
        assert_eq!(key_color(Palette::Colorblind, Some(LetterVerdict::Absent)), MISSING_COLOR);
        assert_eq!(
            key_color(Palette::Colorblind, Some(LetterVerdict::Correct)),
            Palette::Colorblind.correct()
        );
    }

    #[test]
    fn centered_rect_is_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect(10, 4, area), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect(50, 40, area), area);
    }
}
