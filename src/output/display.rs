//! Colored terminal printing for line mode and the grade command

use super::formatters::{create_progress_bar, share_text};
use super::palette::{Palette, Rgb};
use super::stats::{SessionStats, outcome_message};
use crate::core::{Game, GuessResult, Word};
use colored::{ColoredString, Colorize};
use std::io::{self, Write};

fn tile(letter: char, background: Rgb) -> ColoredString {
    format!(" {} ", letter.to_ascii_uppercase())
        .white()
        .bold()
        .on_truecolor(background.r, background.g, background.b)
}

/// Render a guess as colored letter tiles
#[must_use]
pub fn format_guess_row(word: &Word, result: &GuessResult, palette: Palette) -> String {
    word.text()
        .chars()
        .zip(result.verdicts())
        .map(|(letter, &verdict)| tile(letter, palette.color(verdict)).to_string())
        .collect()
}

/// Print the result of grading one guess
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_grade_result<W: Write>(
    out: &mut W,
    guess: &Word,
    target: &Word,
    result: &GuessResult,
    palette: Palette,
) -> io::Result<()> {
    writeln!(out, "\n{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "Guess {} against {}",
        guess.text().to_uppercase().bright_yellow().bold(),
        target.text().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(out, "{}", "─".repeat(40).cyan())?;
    writeln!(
        out,
        "\n  {}   {result}",
        format_guess_row(guess, result, palette)
    )?;
    if result.is_match() {
        writeln!(out, "\n{}", "✅ Exact match!".green().bold())?;
    }
    Ok(())
}

/// Print the end-of-game popup text, the target and the share grid
///
/// Prints nothing while the game is still in progress.
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_outcome<W: Write>(out: &mut W, game: &Game<'_>, palette: Palette) -> io::Result<()> {
    let Some(outcome) = outcome_message(game.status()) else {
        return Ok(());
    };

    writeln!(out, "\n{}", "═".repeat(50).bright_cyan())?;
    writeln!(out, "  {}", outcome.title.bright_green().bold())?;
    writeln!(out, "{}", "═".repeat(50).bright_cyan())?;
    for line in outcome.message.lines() {
        writeln!(out, "  {}", line.bright_white())?;
    }
    if let Some(target) = game.revealed_target() {
        writeln!(
            out,
            "\n  The word was {}",
            target.text().to_uppercase().bright_yellow().bold()
        )?;
    }
    writeln!(out)?;
    for line in share_text(game, palette).lines() {
        writeln!(out, "  {line}")?;
    }
    writeln!(out)
}

/// Print the session's win count and guess distribution
///
/// # Errors
/// Returns any error from writing to `out`.
pub fn print_session_stats<W: Write>(out: &mut W, stats: &SessionStats) -> io::Result<()> {
    writeln!(out, "\n📈 {}", "Session:".bright_cyan().bold())?;
    writeln!(
        out,
        "   Played: {}   Won: {}   Win rate: {:.0}%",
        stats.games_played,
        stats.games_won,
        stats.win_rate()
    )?;

    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.guess_distribution.iter().enumerate() {
        let bar = create_progress_bar(count as f64, most as f64, 20);
        writeln!(out, "   {}: {} {count}", i + 1, bar.green())?;
    }
    Ok(())
}
