//! Dictionaries of legal guesses and target words
//!
//! Two flat word lists are embedded at build time (English and Spanish).
//! Custom lists can be loaded from files with [`loader::load_from_file`].

mod embedded;
pub mod loader;

pub use embedded::{EN_WORDS, EN_WORDS_COUNT, ES_WORDS, ES_WORDS_COUNT};

use crate::core::Word;
use log::{debug, warn};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// Word length of the embedded lists
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Language of an embedded word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl Language {
    /// Parse a language name
    ///
    /// Accepts "en"/"english" and "es"/"spanish"/"espanol".
    /// Defaults to English if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "es" | "spanish" | "espanol" => Self::Spanish,
            _ => Self::English,
        }
    }

    #[must_use]
    pub const fn words(self) -> &'static [&'static str] {
        match self {
            Self::English => EN_WORDS,
            Self::Spanish => ES_WORDS,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Español",
        }
    }
}

/// Where target words are drawn from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TargetPool {
    /// Any legal guess can be the target
    #[default]
    Full,
    /// Only these words can be the target
    Curated(Vec<Word>),
}

/// Legal-guess set plus the target pool
///
/// Every word has the same length. Membership checks are case-insensitive
/// and hash-based. Curated targets are always legal guesses too.
#[derive(Debug, Clone)]
pub struct Dictionary {
    word_length: usize,
    legal: FxHashSet<Word>,
    targets: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary, dropping words whose length is not `word_length`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    /// use wordle_game::dictionary::{Dictionary, TargetPool};
    ///
    /// let words = ["crane", "train", "cat"].map(|w| Word::new(w).unwrap());
    /// let dictionary = Dictionary::new(words, 5, TargetPool::Full);
    ///
    /// assert_eq!(dictionary.len(), 2);
    /// assert!(dictionary.contains("TRAIN"));
    /// assert!(!dictionary.contains("cat"));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>, word_length: usize, pool: TargetPool) -> Self {
        let mut legal = FxHashSet::default();
        let mut in_order = Vec::new();
        let mut dropped = 0usize;

        for word in words {
            if word.len() != word_length {
                dropped += 1;
            } else if legal.insert(word.clone()) {
                in_order.push(word);
            }
        }

        let targets = match pool {
            TargetPool::Full => in_order,
            TargetPool::Curated(curated) => {
                let mut seen = FxHashSet::default();
                let mut targets = Vec::with_capacity(curated.len());
                for word in curated {
                    if word.len() != word_length {
                        dropped += 1;
                        continue;
                    }
                    if seen.insert(word.clone()) {
                        legal.insert(word.clone());
                        targets.push(word);
                    }
                }
                targets
            }
        };

        if dropped > 0 {
            warn!("dropped {dropped} words that are not {word_length} letters long");
        }
        debug!(
            "dictionary ready: {} legal guesses, {} targets",
            legal.len(),
            targets.len()
        );

        Self {
            word_length,
            legal,
            targets,
        }
    }

    /// Dictionary over an embedded language list, every word a possible target
    #[must_use]
    pub fn for_language(language: Language) -> Self {
        Self::new(
            loader::words_from_slice(language.words()),
            DEFAULT_WORD_LENGTH,
            TargetPool::Full,
        )
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of legal guesses
    #[must_use]
    pub fn len(&self) -> usize {
        self.legal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.legal.is_empty()
    }

    /// Case-insensitive membership test for raw input
    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        Word::new(text).is_ok_and(|word| self.contains_word(&word))
    }

    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.legal.contains(word)
    }

    #[must_use]
    pub fn targets(&self) -> &[Word] {
        &self.targets
    }

    /// Pick a target uniformly at random, or `None` if the pool is empty
    pub fn choose_target<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Word> {
        self.targets.choose(rng)
    }
}

impl Default for Dictionary {
    fn default() -> Self {
        Self::for_language(Language::default())
    }
}
