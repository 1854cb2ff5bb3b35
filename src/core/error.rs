//! Errors raised by the game core

use thiserror::Error;

/// Failures of evaluation, game creation and guess submission
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess and target lengths differ, or the configured word length does
    /// not match the dictionary. Callers validate length first, so this is a
    /// programming error.
    #[error("Expected a {expected}-letter word, got {actual} letters")]
    InvalidLength { expected: usize, actual: usize },

    /// The submitted guess is not in the legal-guess dictionary.
    #[error("'{0}' is not in the word list")]
    InvalidWord(String),

    /// A guess was submitted after the game was won or lost.
    #[error("The game is already over")]
    GameAlreadyOver,

    /// The target pool has no words, so no game can start.
    #[error("The target word pool is empty")]
    EmptyPool,

    /// A game was configured with zero rows.
    #[error("A game needs at least one row")]
    NoRows,
}

impl GameError {
    /// Whether the caller can carry on with the same game after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::EmptyPool | Self::NoRows)
    }
}
