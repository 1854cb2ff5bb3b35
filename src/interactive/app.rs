//! TUI application state and logic
//!
//! The app owns the letter buffer for the row being typed and forwards only
//! complete rows to the game. Each key event is handled to completion before
//! the next one is read.

use crate::core::{Game, GameConfig, GameError, GameStatus, LetterVerdict, Turn};
use crate::dictionary::Dictionary;
use crate::output::{Outcome, Palette, SessionStats, outcome_message};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub config: GameConfig,
    pub game: Game<'a>,
    pub palette: Palette,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: SessionStats,
    pub input_mode: InputMode,
    pub should_quit: bool,
    key_hints: FxHashMap<char, LetterVerdict>,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if the first game cannot start (empty target pool or
    /// a word length that does not match the dictionary).
    pub fn new(
        dictionary: &'a Dictionary,
        config: GameConfig,
        palette: Palette,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let game = Game::new(dictionary, config, &mut rng)?;

        let mut app = Self {
            dictionary,
            config,
            game,
            palette,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: SessionStats::default(),
            input_mode: InputMode::Guessing,
            should_quit: false,
            key_hints: FxHashMap::default(),
            rng,
        };
        app.add_message(
            &format!(
                "Guess the {}-letter word in {} tries.",
                config.word_length, config.max_rows
            ),
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_game(),
            KeyCode::Esc => self.should_quit = true,
            KeyCode::F(2) => self.toggle_palette(),
            _ => match self.input_mode {
                InputMode::GameOver => match key.code {
                    KeyCode::Char('q' | 'Q') => self.should_quit = true,
                    KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                    // Input is no longer forwarded once the game is over
                    _ => {}
                },
                InputMode::Guessing => match key.code {
                    KeyCode::Char(c) if !ctrl => self.type_letter(c),
                    KeyCode::Backspace | KeyCode::Delete => self.delete_letter(),
                    KeyCode::Enter | KeyCode::Tab => self.submit_row(),
                    _ => {}
                },
            },
        }
    }

    pub fn type_letter(&mut self, c: char) {
        if !c.is_ascii_alphabetic() {
            return;
        }
        if self.input_buffer.len() < self.config.word_length {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn delete_letter(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the typed row if it is complete
    pub fn submit_row(&mut self) {
        if self.input_buffer.len() < self.config.word_length {
            self.add_message("Not enough letters", MessageStyle::Error);
            return;
        }

        match self.game.submit_guess(&self.input_buffer) {
            Ok(turn) => self.apply_turn(&turn),
            Err(GameError::InvalidWord(_)) => {
                self.add_message("Not in word list", MessageStyle::Error);
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    fn apply_turn(&mut self, turn: &Turn) {
        for (letter, &verdict) in self.input_buffer.chars().zip(turn.result.verdicts()) {
            let hint = self.key_hints.entry(letter).or_insert(verdict);
            *hint = (*hint).max(verdict);
        }
        self.input_buffer.clear();

        if let Some(Outcome { title, .. }) = outcome_message(turn.status) {
            self.stats.record(turn.status);
            self.input_mode = InputMode::GameOver;
            let style = if matches!(turn.status, GameStatus::Won { .. }) {
                MessageStyle::Success
            } else {
                MessageStyle::Error
            };
            self.add_message(&title, style);
            self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn new_game(&mut self) {
        match Game::new(self.dictionary, self.config, &mut self.rng) {
            Ok(game) => {
                debug!("starting game {}", self.stats.games_played + 1);
                self.game = game;
                self.input_buffer.clear();
                self.key_hints.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    pub fn toggle_palette(&mut self) {
        self.palette = self.palette.toggled();
        let name = self.palette.name();
        self.add_message(&format!("Palette: {name}"), MessageStyle::Info);
    }

    /// Best verdict seen so far for a keyboard letter
    #[must_use]
    pub fn key_hint(&self, letter: char) -> Option<LetterVerdict> {
        self.key_hints.get(&letter.to_ascii_uppercase()).copied()
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<SessionStats> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<SessionStats> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.stats)
}
