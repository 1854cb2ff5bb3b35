//! Per-letter grading of a guess against the target
//!
//! Grading runs in two passes so repeated letters are never over-counted:
//! 1. Exact position matches are `Correct` and consume their target position
//! 2. Every other guess letter takes the lowest unconsumed target position
//!    holding the same letter (`Present`), or is `Absent` if none is left
//!
//! For any letter, the number of `Correct` + `Present` verdicts never exceeds
//! how often that letter occurs in the target.

use super::{GameError, Word};
use std::fmt;
use std::str::FromStr;

/// Verdict for a single guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterVerdict {
    /// Letter not in the target (or all its occurrences already used)
    Absent,
    /// Letter in the target at another position
    Present,
    /// Letter at the right position
    Correct,
}

impl LetterVerdict {
    /// Single-character code: `G` correct, `Y` present, `-` absent
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    const fn from_code(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Correct),
            'Y' | 'y' | '🟨' => Some(Self::Present),
            '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// The verdicts for one guess, in guess order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GuessResult {
    verdicts: Vec<LetterVerdict>,
}

impl GuessResult {
    #[must_use]
    pub fn verdicts(&self) -> &[LetterVerdict] {
        &self.verdicts
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }

    /// True when every letter is `Correct`
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.verdicts.iter().all(|&v| v == LetterVerdict::Correct)
    }

    #[must_use]
    pub fn count(&self, verdict: LetterVerdict) -> usize {
        self.verdicts.iter().filter(|&&v| v == verdict).count()
    }
}

impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for verdict in &self.verdicts {
            write!(f, "{}", verdict.code())?;
        }
        Ok(())
    }
}

/// Parse a result written as `G`/`Y`/`-` codes (or 🟩🟨⬜)
///
/// ```
/// use wordle_game::core::{GuessResult, LetterVerdict};
///
/// let result: GuessResult = "GY-GY".parse().unwrap();
/// assert_eq!(result.verdicts()[1], LetterVerdict::Present);
/// assert_eq!(result, "🟩🟨⬜🟩🟨".parse().unwrap());
/// ```
impl FromStr for GuessResult {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let verdicts = s
            .chars()
            .map(|ch| LetterVerdict::from_code(ch).ok_or_else(|| format!("Invalid verdict '{ch}'")))
            .collect::<Result<Vec<_>, _>>()?;

        if verdicts.is_empty() {
            return Err("Empty verdict string".to_string());
        }

        Ok(Self { verdicts })
    }
}

/// Grade `guess` against `target`
///
/// # Errors
/// Returns `GameError::InvalidLength` if the two words differ in length.
///
/// # Examples
/// ```
/// use wordle_game::core::{evaluate, Word};
///
/// let guess = Word::new("robot").unwrap();
/// let target = Word::new("floor").unwrap();
/// let result = evaluate(&guess, &target).unwrap();
///
/// // R(present) O(present) B(absent) O(correct) T(absent)
/// assert_eq!(result.to_string(), "YY-G-");
/// ```
pub fn evaluate(guess: &Word, target: &Word) -> Result<GuessResult, GameError> {
    if guess.len() != target.len() {
        return Err(GameError::InvalidLength {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let guess = guess.letters();
    let target = target.letters();
    let mut verdicts = vec![LetterVerdict::Absent; guess.len()];
    let mut consumed = vec![false; target.len()];

    // First pass: exact positions
    for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
        if g == t {
            verdicts[i] = LetterVerdict::Correct;
            consumed[i] = true;
        }
    }

    // Second pass: misplaced letters take the lowest free target occurrence
    for (i, &g) in guess.iter().enumerate() {
        if verdicts[i] == LetterVerdict::Correct {
            continue;
        }
        let free = target
            .iter()
            .zip(consumed.iter())
            .position(|(&t, &used)| t == g && !used);
        if let Some(j) = free {
            consumed[j] = true;
            verdicts[i] = LetterVerdict::Present;
        }
    }

    Ok(GuessResult { verdicts })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grade(guess: &str, target: &str) -> GuessResult {
        evaluate(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    fn matched_count(guess: &str, result: &GuessResult, letter: u8) -> usize {
        guess
            .bytes()
            .zip(result.verdicts())
            .filter(|&(b, &v)| b == letter && v != LetterVerdict::Absent)
            .count()
    }

    #[test]
    fn exact_guess_is_all_correct() {
        for word in ["crane", "slate", "speed", "aaaaa"] {
            let result = grade(word, word);
            assert!(result.is_match());
            assert_eq!(result.count(LetterVerdict::Correct), 5);
        }
    }

    #[test]
    fn disjoint_letters_are_all_absent() {
        let result = grade("abcde", "fghij");
        assert_eq!(result.to_string(), "-----");
        assert!(!result.is_match());
    }

    #[test]
    fn speed_erase_counts_each_e_once() {
        // Target SPEED has two E's; neither ERASE E lines up positionally
        let result = grade("erase", "speed");
        assert_eq!(result.to_string(), "Y--YY");
        assert_eq!(matched_count("erase", &result, b'e'), 2);
    }

    #[test]
    fn duplicate_guess_letter_against_single_target_letter() {
        // Only one E in CRANE: the positional E wins, the other is absent
        let result = grade("geese", "crane");
        assert_eq!(result.to_string(), "----G");
        assert_eq!(matched_count("geese", &result, b'e'), 1);
    }

    #[test]
    fn misplaced_duplicates_consume_one_each() {
        // LLAMA vs HELLO: two L's in the target, both misplaced
        let result = grade("llama", "hello");
        assert_eq!(result.to_string(), "YY---");
    }

    #[test]
    fn correct_letter_is_not_reused_as_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the other target O
        let result = grade("robot", "floor");
        assert_eq!(result.to_string(), "YY-G-");
    }

    #[test]
    fn first_pass_runs_before_present_marking() {
        // The trailing exact E must not be stolen by the earlier misplaced E
        let result = grade("eerie", "crane");
        assert_eq!(result.to_string(), "--Y-G");
    }

    #[test]
    fn train_against_crane() {
        let result = grade("train", "crane");
        assert_eq!(
            result.verdicts(),
            &[
                LetterVerdict::Absent,
                LetterVerdict::Correct,
                LetterVerdict::Correct,
                LetterVerdict::Absent,
                LetterVerdict::Present,
            ]
        );
    }

    #[test]
    fn matched_count_never_exceeds_target_occurrences() {
        let pairs = [
            ("speed", "erase"),
            ("erase", "speed"),
            ("eerie", "geese"),
            ("geese", "eerie"),
            ("aaaaa", "llama"),
            ("mamma", "llama"),
            ("sissy", "kiss"),
        ];
        for (guess, target) in pairs {
            let (g, t) = (Word::new(guess).unwrap(), Word::new(target).unwrap());
            let Ok(result) = evaluate(&g, &t) else {
                continue;
            };
            for letter in b'a'..=b'z' {
                assert!(
                    matched_count(guess, &result, letter) <= t.count_of(letter),
                    "{guess} vs {target}: letter {}",
                    letter as char
                );
            }
        }
    }

    #[test]
    fn mismatched_lengths_are_rejected() {
        let guess = Word::new("cat").unwrap();
        let target = Word::new("crane").unwrap();
        assert_eq!(
            evaluate(&guess, &target),
            Err(GameError::InvalidLength {
                expected: 5,
                actual: 3
            })
        );
    }

    #[test]
    fn other_word_lengths_are_graded() {
        assert_eq!(grade("tab", "bat").to_string(), "YGY");
    }

    #[test]
    fn evaluate_is_deterministic() {
        assert_eq!(grade("stare", "tears"), grade("stare", "tears"));
    }

    #[test]
    fn result_parse_rejects_bad_input() {
        assert!("GYX--".parse::<GuessResult>().is_err());
        assert!("".parse::<GuessResult>().is_err());
    }
}
