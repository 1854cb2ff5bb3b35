//! Wordle - CLI
//!
//! Play Wordle in a terminal grid (default) or in plain line mode, or grade a
//! single guess against a chosen word.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::path::PathBuf;
use wordle_game::{
    commands::{SimpleOptions, grade_words, run_simple},
    core::GameConfig,
    dictionary::{
        DEFAULT_WORD_LENGTH, Dictionary, Language, TargetPool,
        loader::{load_from_file, words_from_slice},
    },
    output::{Palette, print_grade_result, print_session_stats},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Language of the built-in word list: 'en' (default) or 'es'
    #[arg(short, long, global = true, default_value = "en")]
    language: String,

    /// Replace the built-in legal-guess list with a file (one word per line)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Draw target words only from this file (one word per line)
    #[arg(short, long, global = true)]
    targets: Option<PathBuf>,

    /// Number of guesses allowed
    #[arg(short, long, global = true, default_value_t = 6,
          value_parser = clap::value_parser!(u8).range(1..))]
    rows: u8,

    /// Word length (the built-in lists are 5 letters)
    #[arg(long, global = true, default_value_t = DEFAULT_WORD_LENGTH as u8,
          value_parser = clap::value_parser!(u8).range(1..))]
    length: u8,

    /// Palette: 'normal' (default) or 'colorblind'
    #[arg(short, long, global = true, default_value = "normal")]
    palette: String,

    /// Seed for reproducible target selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple line mode (no TUI)
    Simple,

    /// Grade one guess against a target word
    Grade {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },
}

/// Build the dictionary from the language, --wordlist and --targets flags
fn load_dictionary(cli: &Cli) -> Result<Dictionary> {
    let word_length = usize::from(cli.length);

    let legal = match &cli.wordlist {
        Some(path) => load_from_file(path)
            .with_context(|| format!("Failed to read word list {}", path.display()))?,
        None => words_from_slice(Language::from_name(&cli.language).words()),
    };

    let pool = match &cli.targets {
        Some(path) => TargetPool::Curated(
            load_from_file(path)
                .with_context(|| format!("Failed to read target list {}", path.display()))?,
        ),
        None => TargetPool::Full,
    };

    let dictionary = Dictionary::new(legal, word_length, pool);
    if dictionary.is_empty() {
        bail!("No {word_length}-letter words in the word list (try a different --length)");
    }
    Ok(dictionary)
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli)?;
    let config = GameConfig::new(usize::from(cli.rows), usize::from(cli.length));
    let palette = Palette::from_name(&cli.palette);
    debug!(
        "{} legal words, {} targets, palette {}",
        dictionary.len(),
        dictionary.targets().len(),
        palette.name()
    );

    // Default to Play mode if no command given
    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, config, palette, make_rng(cli.seed)),
        Commands::Simple => {
            let options = SimpleOptions { config, palette };
            run_simple(&dictionary, options, &mut make_rng(cli.seed))?;
            Ok(())
        }
        Commands::Grade { guess, target } => {
            run_grade_command(&dictionary, &guess, &target, palette)
        }
    }
}

fn run_play_command(
    dictionary: &Dictionary,
    config: GameConfig,
    palette: Palette,
    rng: StdRng,
) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(dictionary, config, palette, rng)?;
    let stats = run_tui(app)?;
    info!("session over after {} games", stats.games_played);

    if stats.games_played > 0 {
        print_session_stats(&mut io::stdout().lock(), &stats)?;
    }
    Ok(())
}

fn run_grade_command(
    dictionary: &Dictionary,
    guess: &str,
    target: &str,
    palette: Palette,
) -> Result<()> {
    let graded = grade_words(guess, target)?;
    let mut out = io::stdout().lock();
    print_grade_result(&mut out, &graded.guess, &graded.target, &graded.result, palette)?;

    if !dictionary.contains_word(&graded.guess) {
        writeln!(
            out,
            "\n(note: {} is not in the word list)",
            graded.guess.text().to_uppercase()
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordle_game").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn builtin_list_loads_at_default_length() {
        let dictionary = load_dictionary(&cli(&["simple"])).unwrap();
        assert_eq!(dictionary.word_length(), 5);
        assert!(dictionary.contains("crane"));
    }

    #[test]
    fn length_without_matching_words_names_the_length() {
        let err = load_dictionary(&cli(&["--length", "6", "simple"])).unwrap_err();
        assert!(err.to_string().contains("No 6-letter words"));
    }

    #[test]
    fn zero_rows_rejected_by_parser() {
        assert!(Cli::try_parse_from(["wordle_game", "--rows", "0"]).is_err());
    }
}
