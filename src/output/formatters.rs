//! Formatting utilities for terminal output

use super::palette::Palette;
use crate::core::{Game, GameStatus, GuessResult};

/// Format a guess result as an emoji string
#[must_use]
pub fn result_to_emoji(result: &GuessResult, palette: Palette) -> String {
    result
        .verdicts()
        .iter()
        .map(|&verdict| palette.emoji(verdict))
        .collect()
}

/// Spoiler-free summary of a game: a score line then one emoji row per guess
///
/// The score is the winning guess number, or `X` for a loss or an unfinished
/// game.
#[must_use]
pub fn share_text(game: &Game<'_>, palette: Palette) -> String {
    let score = match game.status() {
        GameStatus::Won { row } => (row + 1).to_string(),
        GameStatus::Lost | GameStatus::InProgress { .. } => "X".to_string(),
    };

    let mut text = format!("Wordle {score}/{}", game.max_rows());
    for (_, result) in game.history() {
        text.push('\n');
        text.push_str(&result_to_emoji(result, palette));
    }
    text
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
