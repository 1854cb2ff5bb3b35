//! One-shot grading of a guess against a chosen target

use crate::core::{GameError, GuessResult, Word, evaluate};

/// Result of grading a single guess
pub struct GradeResult {
    pub guess: Word,
    pub target: Word,
    pub result: GuessResult,
}

/// Grade `guess` against `target` without a dictionary check
///
/// # Errors
///
/// Returns an error if either word is malformed or their lengths differ.
pub fn grade_words(guess: &str, target: &str) -> Result<GradeResult, GameError> {
    let guess = Word::new(guess).map_err(|_| GameError::InvalidWord(guess.to_string()))?;
    let target = Word::new(target).map_err(|_| GameError::InvalidWord(target.to_string()))?;
    let result = evaluate(&guess, &target)?;

    Ok(GradeResult {
        guess,
        target,
        result,
    })
}
