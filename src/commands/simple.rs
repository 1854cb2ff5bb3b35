//! Simple line-mode game
//!
//! Text-based play without the TUI. Each line is either a guess or a
//! `:command`; only full-length guesses reach the game.

use crate::core::{Game, GameConfig, GameError};
use crate::dictionary::Dictionary;
use crate::output::{
    Palette, SessionStats, format_guess_row, print_outcome, print_session_stats,
};
use anyhow::Result;
use colored::Colorize;
use log::debug;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Settings for a line-mode session
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleOptions {
    pub config: GameConfig,
    pub palette: Palette,
}

/// Run line mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading or writing the terminal fails, or if a game
/// cannot be started (for example an empty target pool).
pub fn run_simple<R: Rng + ?Sized>(
    dictionary: &Dictionary,
    options: SimpleOptions,
    rng: &mut R,
) -> Result<SessionStats> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_session(stdin.lock(), stdout.lock(), dictionary, options, rng)
}

enum Command {
    Quit,
    NewGame,
    TogglePalette,
    Help,
    Unknown,
}

fn parse_command(line: &str) -> Option<Command> {
    let name = line.strip_prefix(':')?;
    Some(match name.trim() {
        "q" | "quit" | "exit" => Command::Quit,
        "n" | "new" => Command::NewGame,
        "p" | "palette" => Command::TogglePalette,
        "h" | "help" => Command::Help,
        _ => Command::Unknown,
    })
}

/// Play games reading lines from `input` until quit or end of input
///
/// # Errors
///
/// Returns an error on I/O failure or if a game cannot be started.
pub fn play_session<I: BufRead, O: Write, R: Rng + ?Sized>(
    mut input: I,
    mut out: O,
    dictionary: &Dictionary,
    options: SimpleOptions,
    rng: &mut R,
) -> Result<SessionStats> {
    let config = options.config;
    let mut palette = options.palette;
    let mut stats = SessionStats::default();

    writeln!(out, "\n╔══════════════════════════════════════════╗")?;
    writeln!(out, "║                 W O R D L E              ║")?;
    writeln!(out, "╚══════════════════════════════════════════╝\n")?;
    print_help(&mut out, config)?;

    let mut game = Game::new(dictionary, config, rng)?;

    loop {
        if game.is_terminal() {
            stats.record(game.status());
            print_outcome(&mut out, &game, palette)?;
            match prompt(&mut input, &mut out, "Play again? (yes/no)")? {
                Some(answer) if matches!(answer.to_lowercase().as_str(), "y" | "yes") => {
                    game = Game::new(dictionary, config, rng)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                    continue;
                }
                _ => break,
            }
        }

        let label = format!("Guess {}/{}", game.current_row() + 1, game.max_rows());
        let Some(line) = prompt(&mut input, &mut out, &label)? else {
            break;
        };

        if let Some(command) = parse_command(&line) {
            match command {
                Command::Quit => break,
                Command::NewGame => {
                    game = Game::new(dictionary, config, rng)?;
                    writeln!(out, "\n🔄 New game started!\n")?;
                }
                Command::TogglePalette => {
                    palette = palette.toggled();
                    writeln!(out, "Palette: {}", palette.name())?;
                    redraw(&mut out, &game, palette)?;
                }
                Command::Help => print_help(&mut out, config)?,
                Command::Unknown => writeln!(out, "Unknown command. Type :help")?,
            }
            continue;
        }

        if line.chars().count() != config.word_length {
            writeln!(
                out,
                "{}",
                format!("Word must be exactly {} letters", config.word_length).red()
            )?;
            continue;
        }

        match game.submit_guess(&line) {
            Ok(turn) => {
                if let Some((word, _)) = game.history().last() {
                    writeln!(out, "  {}", format_guess_row(word, &turn.result, palette))?;
                }
            }
            Err(GameError::InvalidWord(word)) => {
                writeln!(out, "{}", format!("Not in word list: {}", word.to_uppercase()).red())?;
            }
            Err(err) => return Err(err.into()),
        }
    }

    if stats.games_played > 0 {
        print_session_stats(&mut out, &stats)?;
    }
    writeln!(out, "\n👋 Thanks for playing!\n")?;
    debug!("line mode finished after {} games", stats.games_played);
    Ok(stats)
}

fn redraw<O: Write>(out: &mut O, game: &Game<'_>, palette: Palette) -> io::Result<()> {
    for (word, result) in game.history() {
        writeln!(out, "  {}", format_guess_row(word, result, palette))?;
    }
    Ok(())
}

fn print_help<O: Write>(out: &mut O, config: GameConfig) -> io::Result<()> {
    writeln!(
        out,
        "Guess the {}-letter word in {} tries.",
        config.word_length, config.max_rows
    )?;
    writeln!(out, "Commands: :new, :palette, :help, :quit\n")
}

/// Read one trimmed line after a prompt, `None` at end of input
fn prompt<I: BufRead, O: Write>(input: &mut I, out: &mut O, label: &str) -> io::Result<Option<String>> {
    write!(out, "{label}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
