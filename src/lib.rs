//! Wordle Game
//!
//! A single-player Wordle: guess the hidden word, one row at a time, with each
//! letter graded as correct, present or absent.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Game, GameConfig, GameStatus};
//! use wordle_game::dictionary::{Dictionary, Language};
//!
//! let dictionary = Dictionary::for_language(Language::English);
//! let mut game = Game::with_target(&dictionary, GameConfig::default(), "crane").unwrap();
//!
//! let turn = game.submit_guess("train").unwrap();
//! assert_eq!(turn.result.to_string(), "-GG-Y");
//!
//! let turn = game.submit_guess("crane").unwrap();
//! assert_eq!(turn.status, GameStatus::Won { row: 1 });
//! ```

// Core domain types and the game state machine
pub mod core;

// Word lists
pub mod dictionary;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
