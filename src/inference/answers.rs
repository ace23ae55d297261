//! Answer inference
//!
//! Narrows a dictionary down to the words still consistent with a game.

use super::consistency::consistent_with_history;
use crate::core::{Pattern, PreconditionResult, Word, WordSet, ensure_len, ensure_parallel};
use tracing::debug;

/// Words from `word_set` that are potential answers for the guess history
///
/// The result is in alphabetical order.
///
/// # Errors
/// Fails if the history is not parallel, a guess is not in `word_set`, or a
/// status does not match its guess's length.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word, WordSet};
/// use wordle_inference::inference::find_potential_answers;
///
/// let word_set = WordSet::from_strs(["later", "liter", "tower", "lower", "power", "round", "tiger"]).unwrap();
/// let guesses = ["tower", "lower", "power", "round"].map(|w| Word::new(w).unwrap());
/// let statuses = ["?NNYY", "YNNYY", "NNNYY", "?NNNN"].map(|s| Pattern::parse(s).unwrap());
///
/// let answers = find_potential_answers(&word_set, &guesses, &statuses).unwrap();
/// let texts: Vec<&str> = answers.iter().map(Word::text).collect();
/// assert_eq!(texts, ["later", "liter"]);
/// ```
pub fn find_potential_answers(
    word_set: &WordSet,
    guesses: &[Word],
    statuses: &[Pattern],
) -> PreconditionResult<Vec<Word>> {
    ensure_parallel(guesses.len(), statuses.len())?;
    for (guess, status) in guesses.iter().zip(statuses) {
        word_set.ensure_contains(guess)?;
        ensure_len(guess.len(), status.len())?;
    }

    let mut answers: Vec<Word> = word_set
        .iter()
        .filter(|word| consistent_with_history(word, guesses, statuses))
        .cloned()
        .collect();
    answers.sort_unstable();

    debug!(
        word_set = word_set.len(),
        guesses = guesses.len(),
        potential_answers = answers.len(),
        "narrowed potential answers"
    );

    Ok(answers)
}
