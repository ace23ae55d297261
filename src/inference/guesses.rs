//! Guess inference
//!
//! Works backwards from a known answer and recorded feedback to the guesses
//! that could have produced it. Each round's status depends only on the
//! answer and that round's guess, so rounds are independent and the full set
//! of histories is the product of the per-round candidates.

use crate::core::{Pattern, PreconditionResult, Word, WordSet, ensure_len};
use crate::feedback::status_unchecked;
use crate::product::{cartesian_product, product_size};
use tracing::{debug, trace};

/// Words from `word_set` that, guessed against `answer`, produce `status`
///
/// The result is in alphabetical order.
///
/// # Errors
/// Fails if `answer` is not in `word_set` or `status` differs in length from
/// `answer`.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word, WordSet};
/// use wordle_inference::inference::find_potential_guesses_single;
///
/// let word_set = WordSet::from_strs(["later", "liter", "tower", "lower", "power", "round", "tiger"]).unwrap();
/// let later = Word::new("later").unwrap();
///
/// let guesses = find_potential_guesses_single(&word_set, &later, &Pattern::parse("?NNYY").unwrap()).unwrap();
/// let texts: Vec<&str> = guesses.iter().map(Word::text).collect();
/// assert_eq!(texts, ["tiger", "tower"]);
/// ```
pub fn find_potential_guesses_single(
    word_set: &WordSet,
    answer: &Word,
    status: &Pattern,
) -> PreconditionResult<Vec<Word>> {
    word_set.ensure_contains(answer)?;
    ensure_len(answer.len(), status.len())?;

    Ok(guesses_for_round(word_set, answer, status))
}

/// Every sequence of guesses that produces `statuses` round by round
///
/// The outer list is sorted by first guess, then second guess, and so on.
/// With no rounds the result is one empty sequence; if some round has no
/// candidate the result is empty.
///
/// # Errors
/// Fails if `answer` is not in `word_set` or any status differs in length
/// from `answer`.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word, WordSet};
/// use wordle_inference::inference::find_guesses_multiple;
///
/// let word_set = WordSet::from_strs(["later", "liter", "tower", "lower", "power", "round", "tiger"]).unwrap();
/// let later = Word::new("later").unwrap();
/// let statuses = ["?NNYY", "YNNYY"].map(|s| Pattern::parse(s).unwrap());
///
/// let histories = find_guesses_multiple(&word_set, &later, &statuses).unwrap();
/// let texts: Vec<Vec<&str>> = histories
///     .iter()
///     .map(|history| history.iter().map(Word::text).collect())
///     .collect();
/// assert_eq!(texts, [["tiger", "lower"], ["tower", "lower"]]);
/// ```
pub fn find_guesses_multiple(
    word_set: &WordSet,
    answer: &Word,
    statuses: &[Pattern],
) -> PreconditionResult<Vec<Vec<Word>>> {
    word_set.ensure_contains(answer)?;
    for status in statuses {
        ensure_len(answer.len(), status.len())?;
    }

    let rounds: Vec<Vec<Word>> = statuses
        .iter()
        .map(|status| guesses_for_round(word_set, answer, status))
        .collect();

    debug!(
        answer = answer.text(),
        rounds = rounds.len(),
        histories = product_size(&rounds),
        "enumerating guess histories"
    );

    Ok(cartesian_product(&rounds))
}

fn guesses_for_round(word_set: &WordSet, answer: &Word, status: &Pattern) -> Vec<Word> {
    let mut guesses: Vec<Word> = word_set
        .iter()
        .filter(|guess| status_unchecked(answer, guess) == *status)
        .cloned()
        .collect();
    guesses.sort_unstable();

    trace!(status = %status, candidates = guesses.len(), "round candidates");

    guesses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PreconditionError;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn status(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    fn example_word_set() -> WordSet {
        WordSet::from_strs(["later", "liter", "tower", "lower", "power", "round", "tiger"]).unwrap()
    }

    fn texts(words: &[Word]) -> Vec<&str> {
        words.iter().map(Word::text).collect()
    }

    #[test]
    fn single_round_candidates() {
        let guesses =
            find_potential_guesses_single(&example_word_set(), &word("later"), &status("?NNYY"))
                .unwrap();
        assert_eq!(texts(&guesses), ["tiger", "tower"]);
    }

    #[test]
    fn perfect_status_only_matches_answer() {
        let guesses =
            find_potential_guesses_single(&example_word_set(), &word("later"), &status("YYYYY"))
                .unwrap();
        assert_eq!(texts(&guesses), ["later"]);
    }

    #[test]
    fn single_requires_answer_in_word_set() {
        assert_eq!(
            find_potential_guesses_single(&example_word_set(), &word("crane"), &status("NNNNN")),
            Err(PreconditionError::NotInWordSet("crane".to_string()))
        );
    }

    #[test]
    fn single_requires_status_length() {
        assert!(matches!(
            find_potential_guesses_single(&example_word_set(), &word("later"), &status("NNNN")),
            Err(PreconditionError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn multiple_worked_example() {
        let statuses = [status("?NNYY"), status("YNNYY")];
        let histories =
            find_guesses_multiple(&example_word_set(), &word("later"), &statuses).unwrap();

        let histories: Vec<Vec<&str>> = histories.iter().map(|h| texts(h)).collect();
        assert_eq!(histories, [["tiger", "lower"], ["tower", "lower"]]);
    }

    #[test]
    fn multiple_is_sorted_lexicographically() {
        let statuses = [status("?NNYY"), status("?NNYY"), status("YNNYY")];
        let histories =
            find_guesses_multiple(&example_word_set(), &word("later"), &statuses).unwrap();

        assert_eq!(histories.len(), 4);
        let mut sorted = histories.clone();
        sorted.sort();
        assert_eq!(histories, sorted);
        assert_eq!(texts(&histories[0]), ["tiger", "tiger", "lower"]);
        assert_eq!(texts(&histories[3]), ["tower", "tower", "lower"]);
    }

    #[test]
    fn multiple_no_rounds() {
        let histories = find_guesses_multiple(&example_word_set(), &word("later"), &[]).unwrap();
        assert_eq!(histories, vec![Vec::<Word>::new()]);
    }

    #[test]
    fn multiple_impossible_round_yields_nothing() {
        let statuses = [status("?NNYY"), status("YYYYN")];
        let histories =
            find_guesses_multiple(&example_word_set(), &word("later"), &statuses).unwrap();
        assert!(histories.is_empty());
    }

    #[test]
    fn multiple_checks_every_status() {
        let statuses = [status("?NNYY"), status("YNN")];
        assert!(matches!(
            find_guesses_multiple(&example_word_set(), &word("later"), &statuses),
            Err(PreconditionError::LengthMismatch { .. })
        ));
    }
}
