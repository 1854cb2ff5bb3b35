//! End-of-game messages and per-session statistics
//!
//! Statistics live only as long as the process; nothing is saved.

use crate::core::GameStatus;

/// Popup title and body for a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub title: String,
    pub message: &'static str,
}

/// Title and message for a finished game, or `None` while it is in progress
#[must_use]
pub fn outcome_message(status: GameStatus) -> Option<Outcome> {
    match status {
        GameStatus::InProgress { .. } => None,
        GameStatus::Won { row } => {
            let guesses = row + 1;
            let message = match guesses {
                1 => "You are among the elite!\n0.02% of Wordle users get it on their first try.",
                2 => "You are AWESOME!\n5.67% of Wordle users get it on their second guess.",
                3 => "You are really good!\n22.66% of Wordle users get it on their third guess.",
                4 => "You are good!\n33.10% of Wordle users get it on their fourth guess.",
                5 => "You are pretty average!\n23.91% of Wordle users get it on their fifth guess.",
                6 => "You barely squeaked by!\n11.72% of Wordle users get it on their sixth guess.",
                _ => "You got there in the end!",
            };
            let title = if guesses == 1 {
                "You guessed it in 1 try.".to_string()
            } else {
                format!("You guessed it in {guesses} tries.")
            };
            Some(Outcome { title, message })
        }
        GameStatus::Lost => Some(Outcome {
            title: "You didn't guess it".to_string(),
            message: "Good try!\n2.92% of Wordle users don't guess it right.",
        }),
    }
}

/// Results of the games played in this session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: usize,
    pub games_won: usize,
    /// Index `n` counts wins on guess `n + 1`
    pub guess_distribution: Vec<usize>,
}

impl SessionStats {
    /// Count a finished game; in-progress statuses are ignored
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress { .. } => {}
            GameStatus::Won { row } => {
                self.games_played += 1;
                self.games_won += 1;
                if self.guess_distribution.len() <= row {
                    self.guess_distribution.resize(row + 1, 0);
                }
                self.guess_distribution[row] += 1;
            }
            GameStatus::Lost => self.games_played += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games_played == 0 {
            0.0
        } else {
            self.games_won as f64 / self.games_played as f64 * 100.0
        }
    }
}
