//! Feedback calculation
//!
//! Computes the status of each guess character with respect to an answer.
//!
//! # Duplicate letters
//! A guess letter that is not an exact match is marked wrong-position when
//! the same letter sits at some other answer position `j` whose slot the guess
//! has not already claimed with an exact match (`guess[j] != answer[j]`).
//! Exact matches elsewhere therefore consume their slot: in `hello`/`keeps`
//! the second `e` is incorrect because the answer's only `e` is already
//! matched at index 1. No further counting is done, so several displaced
//! copies of a letter may all point at the same unclaimed slot
//! (`hello`/`hoops` marks both `o`s wrong-position).

use crate::core::{Pattern, PreconditionError, PreconditionResult, Status, Word, ensure_len};

fn ensure_index(answer: &Word, guess: &Word, i: usize) -> PreconditionResult<()> {
    ensure_len(answer.len(), guess.len())?;
    if i < answer.len() {
        Ok(())
    } else {
        Err(PreconditionError::IndexOutOfRange {
            index: i,
            len: answer.len(),
        })
    }
}

/// Whether `guess[i]` is an exact match
///
/// # Errors
/// Fails if the words differ in length or `i` is out of range.
///
/// # Examples
/// ```
/// use wordle_inference::core::Word;
/// use wordle_inference::feedback::is_correct_char;
///
/// let teaching = Word::new("teaching").unwrap();
/// let reacting = Word::new("reacting").unwrap();
/// assert!(is_correct_char(&teaching, &reacting, 1).unwrap());
/// ```
pub fn is_correct_char(answer: &Word, guess: &Word, i: usize) -> PreconditionResult<bool> {
    ensure_index(answer, guess, i)?;
    Ok(exact_at(answer, guess, i))
}

/// Whether `guess[i]` belongs at another, unclaimed answer position
///
/// # Errors
/// Fails if the words differ in length or `i` is out of range.
pub fn is_wrong_position_char(answer: &Word, guess: &Word, i: usize) -> PreconditionResult<bool> {
    ensure_index(answer, guess, i)?;
    Ok(displaced_at(answer, guess, i))
}

/// Whether `guess[i]` is neither correct nor in the wrong position
///
/// # Errors
/// Fails if the words differ in length or `i` is out of range.
pub fn is_incorrect_char(answer: &Word, guess: &Word, i: usize) -> PreconditionResult<bool> {
    ensure_index(answer, guess, i)?;
    Ok(!exact_at(answer, guess, i) && !displaced_at(answer, guess, i))
}

/// Status of `guess[i]` with respect to `answer`
///
/// # Errors
/// Fails if the words differ in length or `i` is out of range.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Status, Word};
/// use wordle_inference::feedback::compute_char_status;
///
/// let hello = Word::new("hello").unwrap();
/// let keeps = Word::new("keeps").unwrap();
/// assert_eq!(compute_char_status(&hello, &keeps, 1).unwrap(), Status::Correct);
/// assert_eq!(compute_char_status(&hello, &keeps, 2).unwrap(), Status::Incorrect);
/// ```
pub fn compute_char_status(answer: &Word, guess: &Word, i: usize) -> PreconditionResult<Status> {
    ensure_index(answer, guess, i)?;
    Ok(char_status(answer, guess, i))
}

/// Status of every position of `guess` with respect to `answer`
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word};
/// use wordle_inference::feedback::compute_status;
///
/// let teach = Word::new("teach").unwrap();
/// let adieu = Word::new("adieu").unwrap();
/// let status = compute_status(&teach, &adieu).unwrap();
/// assert_eq!(status, Pattern::parse("?NN?N").unwrap());
/// ```
pub fn compute_status(answer: &Word, guess: &Word) -> PreconditionResult<Pattern> {
    ensure_len(answer.len(), guess.len())?;
    Ok(status_unchecked(answer, guess))
}

/// Status of each guess, in order, with respect to `answer`
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` for the first guess whose
/// length differs from the answer's.
pub fn compute_statuses(answer: &Word, guesses: &[Word]) -> PreconditionResult<Vec<Pattern>> {
    guesses
        .iter()
        .map(|guess| compute_status(answer, guess))
        .collect()
}

/// Pattern for two words already known to be the same length
pub(crate) fn status_unchecked(answer: &Word, guess: &Word) -> Pattern {
    (0..answer.len())
        .map(|i| char_status(answer, guess, i))
        .collect()
}

fn char_status(answer: &Word, guess: &Word, i: usize) -> Status {
    if exact_at(answer, guess, i) {
        Status::Correct
    } else if displaced_at(answer, guess, i) {
        Status::WrongPosition
    } else {
        Status::Incorrect
    }
}

#[inline]
fn exact_at(answer: &Word, guess: &Word, i: usize) -> bool {
    guess.char_at(i) == answer.char_at(i)
}

fn displaced_at(answer: &Word, guess: &Word, i: usize) -> bool {
    !exact_at(answer, guess, i)
        && answer
            .positions_of(guess.char_at(i))
            .iter()
            .any(|&j| j != i && !exact_at(answer, guess, j))
}
