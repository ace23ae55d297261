//! Consistency predicates
//!
//! A candidate word is consistent with a recorded guess and its feedback iff
//! pretending the candidate were the answer reproduces that feedback.

use crate::core::{Pattern, PreconditionResult, Word, ensure_len, ensure_parallel};
use crate::feedback::status_unchecked;

/// Whether `word` could be the answer given one guess and its status
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` unless word, guess and status
/// all have the same length.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word};
/// use wordle_inference::inference::is_potential_single;
///
/// let later = Word::new("later").unwrap();
/// let tower = Word::new("tower").unwrap();
/// assert!(is_potential_single(&later, &tower, &Pattern::parse("?NNYY").unwrap()).unwrap());
/// assert!(!is_potential_single(&later, &tower, &Pattern::parse("NNNNN").unwrap()).unwrap());
/// ```
pub fn is_potential_single(
    word: &Word,
    guess: &Word,
    status: &Pattern,
) -> PreconditionResult<bool> {
    ensure_len(word.len(), guess.len())?;
    ensure_len(word.len(), status.len())?;
    Ok(status_unchecked(word, guess) == *status)
}

/// Whether `word` could be the answer given a whole guess history
///
/// # Errors
/// Returns `PreconditionError::HistoryMismatch` if `guesses` and `statuses`
/// differ in length, and `PreconditionError::LengthMismatch` if any guess or
/// status differs in length from `word`.
pub fn is_potential_multiple(
    word: &Word,
    guesses: &[Word],
    statuses: &[Pattern],
) -> PreconditionResult<bool> {
    ensure_history(word.len(), guesses, statuses)?;
    Ok(consistent_with_history(word, guesses, statuses))
}

/// Validate a parallel guess history against a word length
fn ensure_history(
    word_len: usize,
    guesses: &[Word],
    statuses: &[Pattern],
) -> PreconditionResult<()> {
    ensure_parallel(guesses.len(), statuses.len())?;
    for (guess, status) in guesses.iter().zip(statuses) {
        ensure_len(word_len, guess.len())?;
        ensure_len(word_len, status.len())?;
    }
    Ok(())
}

/// History check for inputs already validated by `ensure_history`
pub(crate) fn consistent_with_history(
    word: &Word,
    guesses: &[Word],
    statuses: &[Pattern],
) -> bool {
    guesses
        .iter()
        .zip(statuses)
        .all(|(guess, status)| status_unchecked(word, guess) == *status)
}
