//! Precondition violations
//!
//! Every public operation validates its inputs before computing anything.
//! A violated precondition is a caller bug, so there is no retry path: the
//! error simply names what was wrong.

use thiserror::Error;

/// A violated precondition of one of the engine's operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreconditionError {
    #[error("Word must not be empty")]
    EmptyWord,

    #[error("Length mismatch: expected {expected}, got {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error("Index {index} out of range for word of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Guess history is not parallel: {guesses} guesses, {statuses} statuses")]
    HistoryMismatch { guesses: usize, statuses: usize },

    #[error("Word set mixes lengths: expected {expected}, got {found}")]
    MixedWordLengths { expected: usize, found: usize },

    #[error("Word '{0}' is not in the word set")]
    NotInWordSet(String),

    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    #[error("Candidate pool must not be empty")]
    EmptyCandidatePool,

    #[error("No potential answer is consistent with the guess history")]
    NoPotentialAnswers,

    #[error("Score weights must be finite and non-negative")]
    InvalidWeights,
}

pub type PreconditionResult<T> = Result<T, PreconditionError>;

/// Require two lengths to agree
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` when `found != expected`.
pub(crate) const fn ensure_len(expected: usize, found: usize) -> PreconditionResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(PreconditionError::LengthMismatch { expected, found })
    }
}

/// Require a guess history to be parallel
///
/// # Errors
/// Returns `PreconditionError::HistoryMismatch` when the slices differ in length.
pub(crate) const fn ensure_parallel(guesses: usize, statuses: usize) -> PreconditionResult<()> {
    if guesses == statuses {
        Ok(())
    } else {
        Err(PreconditionError::HistoryMismatch { guesses, statuses })
    }
}
