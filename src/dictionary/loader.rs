//! Word list loading utilities
//!
//! Reads word lists from files or from the embedded constants.

use crate::core::Word;
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines, `#` comments and malformed entries are skipped. Length is not
/// checked here; `Dictionary` drops words of the wrong length.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::dictionary::loader::load_from_file;
///
/// let words = load_from_file("data/en_words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = parse_lines(&content);
    debug!("loaded {} words from {}", words.len(), path.display());

    Ok(words)
}

fn parse_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

/// Convert an embedded string slice to Words, skipping malformed entries
///
/// # Examples
/// ```
/// use wordle_game::dictionary::loader::words_from_slice;
/// use wordle_game::dictionary::EN_WORDS;
///
/// let words = words_from_slice(EN_WORDS);
/// assert_eq!(words.len(), EN_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
