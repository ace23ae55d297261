//! Dictionary of valid words
//!
//! All words in a set share one length.

use super::Word;
use super::error::{PreconditionError, PreconditionResult};
use rustc_hash::FxHashSet;

/// A set of words of identical length
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordSet {
    words: FxHashSet<Word>,
    word_len: Option<usize>,
}

impl WordSet {
    /// Build a word set, collapsing duplicates
    ///
    /// # Errors
    /// Returns `PreconditionError::MixedWordLengths` if the words do not all
    /// have the same length.
    ///
    /// # Examples
    /// ```
    /// use wordle_inference::core::{Word, WordSet};
    ///
    /// let set = WordSet::new(["later", "tower", "later"].map(|w| Word::new(w).unwrap())).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert_eq!(set.word_len(), Some(5));
    /// ```
    pub fn new(words: impl IntoIterator<Item = Word>) -> PreconditionResult<Self> {
        let mut set = FxHashSet::default();
        let mut word_len = None;

        for word in words {
            match word_len {
                None => word_len = Some(word.len()),
                Some(expected) if expected != word.len() => {
                    return Err(PreconditionError::MixedWordLengths {
                        expected,
                        found: word.len(),
                    });
                }
                Some(_) => {}
            }
            set.insert(word);
        }

        Ok(Self {
            words: set,
            word_len,
        })
    }

    /// Build a word set from string slices
    ///
    /// # Errors
    /// Returns `PreconditionError::EmptyWord` for an empty entry and
    /// `PreconditionError::MixedWordLengths` for differing lengths.
    pub fn from_strs<'s>(words: impl IntoIterator<Item = &'s str>) -> PreconditionResult<Self> {
        let words = words
            .into_iter()
            .map(Word::new)
            .collect::<PreconditionResult<Vec<_>>>()?;
        Self::new(words)
    }

    /// The shared word length, or `None` for an empty set
    #[inline]
    #[must_use]
    pub const fn word_len(&self) -> Option<usize> {
        self.word_len
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Require `word` to be a member of the set
    ///
    /// # Errors
    /// Returns `PreconditionError::NotInWordSet` if it is not.
    pub fn ensure_contains(&self, word: &Word) -> PreconditionResult<()> {
        if self.contains(word) {
            Ok(())
        } else {
            Err(PreconditionError::NotInWordSet(word.text().to_string()))
        }
    }

    /// Iterate the words in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    /// The words in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<&Word> {
        let mut words: Vec<&Word> = self.words.iter().collect();
        words.sort_unstable();
        words
    }
}

impl<'a> IntoIterator for &'a WordSet {
    type Item = &'a Word;
    type IntoIter = std::collections::hash_set::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
