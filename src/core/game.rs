//! Game progress state machine
//!
//! A `Game` owns the target word and the current row. Only `submit_guess`
//! mutates it, and it becomes terminal on a full match or when the last row
//! is used without one.

use super::{GameError, GuessResult, Word, evaluate};
use crate::dictionary::{DEFAULT_WORD_LENGTH, Dictionary};
use log::{debug, info};
use rand::Rng;

/// Shape of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub max_rows: usize,
    pub word_length: usize,
}

impl GameConfig {
    pub const DEFAULT_MAX_ROWS: usize = 6;

    #[must_use]
    pub const fn new(max_rows: usize, word_length: usize) -> Self {
        Self {
            max_rows,
            word_length,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ROWS, DEFAULT_WORD_LENGTH)
    }
}

/// Progress of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// `row` is the 0-based row the next guess goes into
    InProgress { row: usize, max_rows: usize },
    /// Won with the guess on `row`
    Won { row: usize },
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::InProgress { .. })
    }
}

/// Outcome of one accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Row the guess was placed on
    pub row: usize,
    pub result: GuessResult,
    /// Status after the guess
    pub status: GameStatus,
}

/// A single game: target, row counter and accepted guesses
#[derive(Debug, Clone)]
pub struct Game<'d> {
    dictionary: &'d Dictionary,
    target: Word,
    max_rows: usize,
    row: usize,
    status: GameStatus,
    history: Vec<(Word, GuessResult)>,
}

impl<'d> Game<'d> {
    /// Start a game with a target drawn uniformly from the dictionary's pool
    ///
    /// # Errors
    /// - `GameError::NoRows` if `config.max_rows` is zero
    /// - `GameError::EmptyPool` if the target pool is empty
    /// - `GameError::InvalidLength` if `config.word_length` differs from the
    ///   dictionary's word length
    ///
    /// # Examples
    /// ```
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    /// use wordle_game::core::{Game, GameConfig, GameStatus};
    /// use wordle_game::dictionary::{Dictionary, Language};
    ///
    /// let dictionary = Dictionary::for_language(Language::English);
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let game = Game::new(&dictionary, GameConfig::default(), &mut rng).unwrap();
    ///
    /// assert_eq!(game.current_row(), 0);
    /// assert_eq!(game.status(), GameStatus::InProgress { row: 0, max_rows: 6 });
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dictionary: &'d Dictionary,
        config: GameConfig,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        check_config(dictionary, config)?;
        let target = dictionary
            .choose_target(rng)
            .ok_or(GameError::EmptyPool)?
            .clone();

        debug!(
            "new game: {} rows, target drawn from {} words",
            config.max_rows,
            dictionary.targets().len()
        );
        Ok(Self::start(dictionary, config, target))
    }

    /// Start a game with a fixed target
    ///
    /// # Errors
    /// - `GameError::NoRows` if `config.max_rows` is zero
    /// - `GameError::InvalidLength` if `config.word_length` differs from the
    ///   dictionary's, or the target is not that long
    /// - `GameError::InvalidWord` if the target is malformed
    pub fn with_target(
        dictionary: &'d Dictionary,
        config: GameConfig,
        target: &str,
    ) -> Result<Self, GameError> {
        check_config(dictionary, config)?;
        let target = Word::new(target).map_err(|_| GameError::InvalidWord(target.to_string()))?;
        if target.len() != config.word_length {
            return Err(GameError::InvalidLength {
                expected: config.word_length,
                actual: target.len(),
            });
        }
        Ok(Self::start(dictionary, config, target))
    }

    fn start(dictionary: &'d Dictionary, config: GameConfig, target: Word) -> Self {
        Self {
            dictionary,
            target,
            max_rows: config.max_rows,
            row: 0,
            status: GameStatus::InProgress {
                row: 0,
                max_rows: config.max_rows,
            },
            history: Vec::with_capacity(config.max_rows),
        }
    }

    /// Submit a guess and advance the game
    ///
    /// Rejected guesses leave the game untouched.
    ///
    /// # Errors
    /// - `GameError::GameAlreadyOver` once the game is won or lost
    /// - `GameError::InvalidWord` if the guess is not a legal dictionary word
    pub fn submit_guess(&mut self, guess: &str) -> Result<Turn, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let word = match Word::new(guess) {
            Ok(word) if self.dictionary.contains_word(&word) => word,
            _ => {
                debug!("rejected guess '{}' on row {}", guess.trim(), self.row);
                return Err(GameError::InvalidWord(guess.trim().to_string()));
            }
        };

        let result = evaluate(&word, &self.target)?;
        let row = self.row;

        self.status = if result.is_match() {
            info!("won on row {row}");
            GameStatus::Won { row }
        } else if row + 1 >= self.max_rows {
            info!("lost after {} guesses", row + 1);
            GameStatus::Lost
        } else {
            self.row = row + 1;
            GameStatus::InProgress {
                row: self.row,
                max_rows: self.max_rows,
            }
        };

        self.history.push((word, result.clone()));

        Ok(Turn {
            row,
            result,
            status: self.status,
        })
    }

    /// Row of the next guess, or of the final guess once the game is over
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    #[must_use]
    pub const fn max_rows(&self) -> usize {
        self.max_rows
    }

    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_rows.saturating_sub(self.history.len())
    }

    /// Accepted guesses and their results, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Word, GuessResult)] {
        &self.history
    }

    /// The target, but only after the game has ended
    #[must_use]
    pub fn revealed_target(&self) -> Option<&Word> {
        self.is_terminal().then_some(&self.target)
    }
}

fn check_config(dictionary: &Dictionary, config: GameConfig) -> Result<(), GameError> {
    if config.max_rows == 0 {
        return Err(GameError::NoRows);
    }
    if config.word_length != dictionary.word_length() {
        return Err(GameError::InvalidLength {
            expected: dictionary.word_length(),
            actual: config.word_length,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterVerdict;
    use crate::dictionary::TargetPool;
    use crate::dictionary::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn dictionary() -> Dictionary {
        Dictionary::new(
            words_from_slice(&["crane", "train", "slate", "speed", "erase", "geese"]),
            5,
            TargetPool::Full,
        )
    }

    fn game(dictionary: &Dictionary, max_rows: usize) -> Game<'_> {
        Game::with_target(dictionary, GameConfig::new(max_rows, 5), "crane").unwrap()
    }

    #[test]
    fn starts_in_progress_on_row_zero() {
        let dictionary = dictionary();
        let game = game(&dictionary, 6);
        assert_eq!(game.status(), GameStatus::InProgress { row: 0, max_rows: 6 });
        assert_eq!(game.current_row(), 0);
        assert_eq!(game.guesses_remaining(), 6);
        assert!(game.revealed_target().is_none());
    }

    #[test]
    fn correct_guess_wins() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 6);

        let turn = game.submit_guess("CRANE").unwrap();

        assert!(turn.result.is_match());
        assert_eq!(turn.row, 0);
        assert_eq!(turn.status, GameStatus::Won { row: 0 });
        assert_eq!(game.revealed_target().map(Word::text), Some("crane"));
    }

    #[test]
    fn win_on_later_row_records_that_row() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 6);
        game.submit_guess("train").unwrap();
        game.submit_guess("slate").unwrap();

        let turn = game.submit_guess("crane").unwrap();
        assert_eq!(turn.status, GameStatus::Won { row: 2 });
        assert_eq!(game.current_row(), 2);
    }

    #[test]
    fn wrong_guess_advances_row() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 6);

        let turn = game.submit_guess("train").unwrap();

        assert_eq!(turn.row, 0);
        assert_eq!(turn.result.to_string(), "-GG-Y");
        assert_eq!(turn.status, GameStatus::InProgress { row: 1, max_rows: 6 });
        assert_eq!(game.current_row(), 1);
        assert_eq!(game.guesses_remaining(), 5);
    }

    #[test]
    fn invalid_word_leaves_row_unchanged() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 6);
        game.submit_guess("train").unwrap();

        for bad in ["zzzzz", "cran", "toolong", "cr4ne", ""] {
            assert!(matches!(
                game.submit_guess(bad),
                Err(GameError::InvalidWord(_))
            ));
        }

        assert_eq!(game.current_row(), 1);
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.status(), GameStatus::InProgress { row: 1, max_rows: 6 });
    }

    #[test]
    fn last_row_miss_loses() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 3);

        assert!(!game.submit_guess("train").unwrap().status.is_terminal());
        assert!(!game.submit_guess("slate").unwrap().status.is_terminal());

        let turn = game.submit_guess("speed").unwrap();
        assert_eq!(turn.row, 2);
        assert_eq!(turn.status, GameStatus::Lost);
        assert_eq!(game.guesses_remaining(), 0);
        assert_eq!(game.revealed_target().map(Word::text), Some("crane"));
    }

    #[test]
    fn last_row_match_still_wins() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 2);
        game.submit_guess("train").unwrap();
        assert_eq!(
            game.submit_guess("crane").unwrap().status,
            GameStatus::Won { row: 1 }
        );
    }

    #[test]
    fn single_row_game_loses_on_first_miss() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 1);
        assert_eq!(game.submit_guess("slate").unwrap().status, GameStatus::Lost);
    }

    #[test]
    fn no_guess_succeeds_after_terminal() {
        let dictionary = dictionary();

        let mut won = game(&dictionary, 6);
        won.submit_guess("crane").unwrap();
        assert_eq!(won.submit_guess("train"), Err(GameError::GameAlreadyOver));
        assert_eq!(won.submit_guess("crane"), Err(GameError::GameAlreadyOver));
        assert_eq!(won.submit_guess("zzzzz"), Err(GameError::GameAlreadyOver));
        assert_eq!(won.history().len(), 1);

        let mut lost = game(&dictionary, 1);
        lost.submit_guess("train").unwrap();
        assert_eq!(lost.submit_guess("crane"), Err(GameError::GameAlreadyOver));
        assert_eq!(lost.status(), GameStatus::Lost);
    }

    #[test]
    fn history_keeps_guesses_in_order() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 6);
        game.submit_guess("slate").unwrap();
        game.submit_guess("Train").unwrap();

        let texts: Vec<&str> = game.history().iter().map(|(w, _)| w.text()).collect();
        assert_eq!(texts, ["slate", "train"]);
        assert_eq!(
            game.history()[1].1.verdicts()[1],
            LetterVerdict::Correct
        );
    }

    #[test]
    fn new_draws_target_from_pool() {
        let dictionary = Dictionary::new(
            words_from_slice(&["crane", "train"]),
            5,
            TargetPool::Curated(words_from_slice(&["slate"])),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = Game::new(&dictionary, GameConfig::default(), &mut rng).unwrap();

        assert_eq!(
            game.submit_guess("slate").unwrap().status,
            GameStatus::Won { row: 0 }
        );
    }

    #[test]
    fn new_fails_on_empty_pool() {
        let dictionary = Dictionary::new(
            words_from_slice(&["crane"]),
            5,
            TargetPool::Curated(Vec::new()),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let err = Game::new(&dictionary, GameConfig::default(), &mut rng).unwrap_err();
        assert_eq!(err, GameError::EmptyPool);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn new_fails_on_length_mismatch() {
        let dictionary = dictionary();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(
            Game::new(&dictionary, GameConfig::new(6, 4), &mut rng).unwrap_err(),
            GameError::InvalidLength {
                expected: 5,
                actual: 4
            }
        );
        assert!(matches!(
            Game::with_target(&dictionary, GameConfig::default(), "cat"),
            Err(GameError::InvalidLength { .. })
        ));
    }

    #[test]
    fn zero_rows_is_rejected() {
        let dictionary = dictionary();
        let config = GameConfig::new(0, 5);
        let mut rng = StdRng::seed_from_u64(3);

        let err = Game::new(&dictionary, config, &mut rng).unwrap_err();
        assert_eq!(err, GameError::NoRows);
        assert!(!err.is_recoverable());
        assert_eq!(
            Game::with_target(&dictionary, config, "crane").unwrap_err(),
            GameError::NoRows
        );
    }

    #[test]
    fn guesses_remaining_reaches_zero_on_loss() {
        let dictionary = dictionary();
        let mut game = game(&dictionary, 1);
        game.submit_guess("slate").unwrap();

        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.guesses_remaining(), 0);
    }
}
