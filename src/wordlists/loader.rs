//! Word list loading utilities
//!
//! Reads a dictionary with one word per line. Lines are whitespace-trimmed
//! and blank lines are skipped.

use crate::core::{PreconditionError, Word, WordSet};
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Failure to load a word list
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read word list: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid word list: {0}")]
    Precondition(#[from] PreconditionError),
}

/// Parse a word set from text
///
/// # Errors
///
/// Returns `PreconditionError::MixedWordLengths` if the words do not all have
/// the same length.
///
/// # Examples
/// ```
/// use wordle_inference::wordlists::loader::parse_word_set;
///
/// let set = parse_word_set("later\n  liter \n\ntower\n").unwrap();
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.word_len(), Some(5));
/// ```
pub fn parse_word_set(content: &str) -> Result<WordSet, PreconditionError> {
    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(Word::new)
        .collect::<Result<Vec<_>, _>>()?;

    WordSet::new(words)
}

/// Load a word set from a file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read and
/// `LoadError::Precondition` if its words do not share one length.
///
/// # Examples
/// ```no_run
/// use wordle_inference::wordlists::loader::load_word_set;
///
/// let words = load_word_set("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_word_set<P: AsRef<Path>>(path: P) -> Result<WordSet, LoadError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let words = parse_word_set(&content)?;

    debug!(path = %path.display(), words = words.len(), "loaded word set");

    Ok(words)
}
