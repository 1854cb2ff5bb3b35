//! Core game logic
//!
//! Words, per-letter grading and the game progress state machine. Nothing in
//! here knows about terminals, colors or key presses.

mod error;
mod evaluator;
mod game;
mod word;

pub use error::GameError;
pub use evaluator::{GuessResult, LetterVerdict, evaluate};
pub use game::{Game, GameConfig, GameStatus, Turn};
pub use word::{Word, WordError};
