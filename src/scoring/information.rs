//! Information scoring
//!
//! A heuristic reward for how much a guess reveals: each correct position
//! scores `correct`, each wrong-position letter scores `wrong_position`.
//! The default weights are 1 and 0.5.

use crate::core::{Pattern, PreconditionError, PreconditionResult, Word, WordSet, ensure_len};
use crate::feedback::status_unchecked;
use crate::inference::find_potential_answers;
use std::collections::BTreeMap;
use tracing::debug;

/// Per-status weights for the information score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Reward for a correct position
    pub correct: f64,
    /// Reward for a letter in the wrong position
    pub wrong_position: f64,
}

impl ScoreWeights {
    /// Create weights
    ///
    /// # Errors
    /// Returns `PreconditionError::InvalidWeights` unless both weights are
    /// finite and non-negative.
    pub fn new(correct: f64, wrong_position: f64) -> PreconditionResult<Self> {
        let weights = Self {
            correct,
            wrong_position,
        };
        weights.validate()?;
        Ok(weights)
    }

    fn validate(self) -> PreconditionResult<()> {
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        if valid(self.correct) && valid(self.wrong_position) {
            Ok(())
        } else {
            Err(PreconditionError::InvalidWeights)
        }
    }

    /// Score a pattern; incorrect positions contribute nothing
    #[must_use]
    pub fn score(&self, pattern: &Pattern) -> f64 {
        self.correct * pattern.count_correct() as f64
            + self.wrong_position * pattern.count_wrong_position() as f64
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            correct: 1.0,
            wrong_position: 0.5,
        }
    }
}

/// Information score of `guess` against `answer` with the default weights
///
/// The score lies in `[0, len]` and reaches `len` only when the guess is the
/// answer.
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_inference::core::Word;
/// use wordle_inference::scoring::information_score;
///
/// let later = Word::new("later").unwrap();
/// let tiger = Word::new("tiger").unwrap();
/// assert_eq!(information_score(&later, &tiger).unwrap(), 2.5);
/// ```
pub fn information_score(answer: &Word, guess: &Word) -> PreconditionResult<f64> {
    information_score_with(&ScoreWeights::default(), answer, guess)
}

/// Information score of `guess` against `answer` with explicit weights
///
/// # Errors
/// Fails on a length mismatch or invalid weights.
pub fn information_score_with(
    weights: &ScoreWeights,
    answer: &Word,
    guess: &Word,
) -> PreconditionResult<f64> {
    weights.validate()?;
    ensure_len(answer.len(), guess.len())?;
    Ok(weights.score(&status_unchecked(answer, guess)))
}

/// Mean information score of `candidate` over a pool of potential answers
///
/// This is the expected score of guessing `candidate` when the true answer is
/// drawn uniformly from `potential_answers`.
///
/// # Errors
/// Returns `PreconditionError::EmptyCandidatePool` for an empty pool and
/// `PreconditionError::LengthMismatch` if any word differs in length from
/// `candidate`.
///
/// # Examples
/// ```
/// use wordle_inference::core::Word;
/// use wordle_inference::scoring::information_score_multiple;
///
/// let pool = ["reach", "tiger", "tower"].map(|w| Word::new(w).unwrap());
/// let tiger = Word::new("tiger").unwrap();
/// assert_eq!(information_score_multiple(&pool, &tiger).unwrap(), 3.0);
/// ```
pub fn information_score_multiple(
    potential_answers: &[Word],
    candidate: &Word,
) -> PreconditionResult<f64> {
    information_score_multiple_with(&ScoreWeights::default(), potential_answers, candidate)
}

/// Mean information score of `candidate` with explicit weights
///
/// # Errors
/// Fails on an empty pool, a length mismatch, or invalid weights.
pub fn information_score_multiple_with(
    weights: &ScoreWeights,
    potential_answers: &[Word],
    candidate: &Word,
) -> PreconditionResult<f64> {
    if potential_answers.is_empty() {
        return Err(PreconditionError::EmptyCandidatePool);
    }

    let total = potential_answers
        .iter()
        .map(|answer| information_score_with(weights, answer, candidate))
        .sum::<PreconditionResult<f64>>()?;

    Ok(total / potential_answers.len() as f64)
}

/// Potential answers for a guess history, each with its mean information score
///
/// Every potential answer is scored against the narrowed pool itself, not the
/// whole word set.
///
/// # Errors
/// Fails on the preconditions of `find_potential_answers`, and with
/// `PreconditionError::NoPotentialAnswers` if nothing is consistent with the
/// history.
///
/// # Examples
/// ```
/// use wordle_inference::core::{Pattern, Word, WordSet};
/// use wordle_inference::scoring::find_answers_and_scores;
///
/// let word_set = WordSet::from_strs(["later", "liter", "tower", "lower", "power", "round", "tiger"]).unwrap();
/// let guesses = ["tower", "lower", "power", "round"].map(|w| Word::new(w).unwrap());
/// let statuses = ["?NNYY", "YNNYY", "NNNYY", "?NNNN"].map(|s| Pattern::parse(s).unwrap());
///
/// let scores = find_answers_and_scores(&word_set, &guesses, &statuses).unwrap();
/// assert_eq!(scores.len(), 2);
/// assert_eq!(scores[&Word::new("later").unwrap()], 4.5);
/// assert_eq!(scores[&Word::new("liter").unwrap()], 4.5);
/// ```
pub fn find_answers_and_scores(
    word_set: &WordSet,
    guesses: &[Word],
    statuses: &[Pattern],
) -> PreconditionResult<BTreeMap<Word, f64>> {
    find_answers_and_scores_with(&ScoreWeights::default(), word_set, guesses, statuses)
}

/// `find_answers_and_scores` with explicit weights
///
/// # Errors
/// As `find_answers_and_scores`, plus invalid weights.
pub fn find_answers_and_scores_with(
    weights: &ScoreWeights,
    word_set: &WordSet,
    guesses: &[Word],
    statuses: &[Pattern],
) -> PreconditionResult<BTreeMap<Word, f64>> {
    weights.validate()?;

    let potential_answers = find_potential_answers(word_set, guesses, statuses)?;
    if potential_answers.is_empty() {
        return Err(PreconditionError::NoPotentialAnswers);
    }

    let scores = potential_answers
        .iter()
        .map(|answer| {
            information_score_multiple_with(weights, &potential_answers, answer)
                .map(|score| (answer.clone(), score))
        })
        .collect::<PreconditionResult<BTreeMap<_, _>>>()?;

    debug!(potential_answers = scores.len(), "scored potential answers");

    Ok(scores)
}
