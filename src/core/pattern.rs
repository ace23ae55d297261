//! Wordle feedback status symbols and patterns
//!
//! A pattern is the per-position feedback for one guess:
//! - `Y` = Correct (letter in the right position)
//! - `?` = Wrong position (letter elsewhere in the answer)
//! - `N` = Incorrect
//!
//! The square emoji forms (🟩 🟨 ⬜) are accepted as well.

use super::error::{PreconditionError, PreconditionResult};
use std::fmt;

/// Feedback for a single position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Status {
    /// Same letter at the same position (green)
    Correct,
    /// Letter present at another, unclaimed position (yellow)
    WrongPosition,
    /// Neither of the above (gray)
    Incorrect,
}

impl Status {
    /// The whole status alphabet
    pub const ALL: [Self; 3] = [Self::Correct, Self::WrongPosition, Self::Incorrect];

    /// Canonical character for this status
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Self::Correct => 'Y',
            Self::WrongPosition => '?',
            Self::Incorrect => 'N',
        }
    }

    /// Parse a status from its canonical character or its emoji square
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'Y' | '🟩' => Some(Self::Correct),
            '?' | '🟨' => Some(Self::WrongPosition),
            'N' | '⬜' | '⬛' => Some(Self::Incorrect),
            _ => None,
        }
    }

    /// Emoji square for this status
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::WrongPosition => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Check that every symbol belongs to the status alphabet
///
/// # Examples
/// ```
/// use wordle_inference::core::is_valid_status;
///
/// assert!(is_valid_status("?NNYY"));
/// assert!(is_valid_status("🟩🟨⬜⬜🟩"));
/// assert!(!is_valid_status("?NXYY"));
/// ```
#[must_use]
pub fn is_valid_status(symbols: &str) -> bool {
    symbols.chars().all(|c| Status::from_char(c).is_some())
}

/// Feedback pattern for a whole guess, one status per position
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern(Vec<Status>);

impl Pattern {
    /// Create a pattern from a status sequence
    #[must_use]
    pub const fn new(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }

    /// The all-correct pattern for words of `len` characters
    #[must_use]
    pub fn perfect(len: usize) -> Self {
        Self(vec![Status::Correct; len])
    }

    /// Parse a pattern such as `"?NNYY"` or `"🟨⬜⬜🟩🟩"`
    ///
    /// # Errors
    /// Returns `PreconditionError::InvalidStatus` if any symbol is outside the
    /// status alphabet.
    ///
    /// # Examples
    /// ```
    /// use wordle_inference::core::{Pattern, Status};
    ///
    /// let p1 = Pattern::parse("?NNYY").unwrap();
    /// let p2 = Pattern::parse("🟨⬜⬜🟩🟩").unwrap();
    /// assert_eq!(p1, p2);
    /// assert_eq!(p1.statuses()[0], Status::WrongPosition);
    /// ```
    pub fn parse(s: &str) -> PreconditionResult<Self> {
        if !is_valid_status(s) {
            return Err(PreconditionError::InvalidStatus(s.to_string()));
        }

        Ok(Self(s.chars().filter_map(Status::from_char).collect()))
    }

    /// The individual statuses
    #[inline]
    #[must_use]
    pub fn statuses(&self) -> &[Status] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.0.iter().all(|&s| s == Status::Correct)
    }

    /// Count the correct (green) positions
    #[must_use]
    pub fn count_correct(&self) -> usize {
        self.count(Status::Correct)
    }

    /// Count the wrong-position (yellow) positions
    #[must_use]
    pub fn count_wrong_position(&self) -> usize {
        self.count(Status::WrongPosition)
    }

    fn count(&self, status: Status) -> usize {
        self.0.iter().filter(|&&s| s == status).count()
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_inference::core::Pattern;
    ///
    /// let p = Pattern::parse("Y?N").unwrap();
    /// assert_eq!(p.to_emoji(), "🟩🟨⬜");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.to_emoji()).collect()
    }
}

impl From<Vec<Status>> for Pattern {
    fn from(statuses: Vec<Status>) -> Self {
        Self(statuses)
    }
}

impl FromIterator<Status> for Pattern {
    fn from_iter<I: IntoIterator<Item = Status>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for status in &self.0 {
            write!(f, "{status}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Pattern {
    type Err = PreconditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
