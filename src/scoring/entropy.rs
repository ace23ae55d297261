//! Shannon entropy of the feedback a guess produces
//!
//! Given a guess and a pool of potential answers, groups the pool by the
//! pattern each answer would show and measures the expected information gain.

use crate::core::{Pattern, PreconditionResult, Word, ensure_len};
use crate::feedback::status_unchecked;
use rustc_hash::FxHashMap;

/// Metrics for evaluating a guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuessMetrics {
    /// Shannon entropy (expected information gain in bits)
    pub entropy: f64,
    /// Expected number of remaining candidates after this guess
    pub expected_remaining: f64,
    /// Maximum partition size (worst-case remaining candidates)
    pub max_partition: usize,
}

/// Calculate Shannon entropy for a guess against candidates
///
/// Returns the expected information gain in bits, 0 for an empty pool.
///
/// # Formula
/// H(X) = -Σ p(x) * log₂(p(x))
///
/// where p(x) is the probability of observing pattern x.
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` if a candidate differs in
/// length from the guess.
///
/// # Examples
/// ```
/// use wordle_inference::core::Word;
/// use wordle_inference::scoring::calculate_entropy;
///
/// let guess = Word::new("later").unwrap();
/// let candidates = ["later", "round"].map(|w| Word::new(w).unwrap());
///
/// let entropy = calculate_entropy(&guess, &candidates).unwrap();
/// assert!((entropy - 1.0).abs() < 1e-9);
/// ```
pub fn calculate_entropy(guess: &Word, candidates: &[Word]) -> PreconditionResult<f64> {
    let pattern_counts = group_by_pattern(guess, candidates)?;
    Ok(shannon_entropy(&pattern_counts))
}

fn group_by_pattern(
    guess: &Word,
    candidates: &[Word],
) -> PreconditionResult<FxHashMap<Pattern, usize>> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        ensure_len(guess.len(), candidate.len())?;
        *counts.entry(status_unchecked(candidate, guess)).or_insert(0) += 1;
    }

    Ok(counts)
}

/// Calculate Shannon entropy from a pattern distribution
///
/// # Properties
/// - Returns 0.0 for a certain outcome or an empty distribution
/// - Always in range [0, log₂(n)] for n patterns
#[must_use]
pub fn shannon_entropy<S>(pattern_counts: &std::collections::HashMap<Pattern, usize, S>) -> f64
where
    S: std::hash::BuildHasher,
{
    let total = pattern_counts.values().sum::<usize>() as f64;

    if total == 0.0 {
        return 0.0;
    }

    pattern_counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum()
}

/// Calculate entropy, expected remaining candidates and max partition size
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` if a candidate differs in
/// length from the guess.
pub fn calculate_metrics(guess: &Word, candidates: &[Word]) -> PreconditionResult<GuessMetrics> {
    let pattern_counts = group_by_pattern(guess, candidates)?;

    if candidates.is_empty() {
        return Ok(GuessMetrics {
            entropy: 0.0,
            expected_remaining: 0.0,
            max_partition: 0,
        });
    }

    let total = candidates.len() as f64;

    let expected_remaining: f64 = pattern_counts
        .values()
        .map(|&count| count as f64 * count as f64 / total)
        .sum();

    let max_partition = pattern_counts.values().copied().max().unwrap_or(0);

    Ok(GuessMetrics {
        entropy: shannon_entropy(&pattern_counts),
        expected_remaining,
        max_partition,
    })
}

/// Select the guess with the highest entropy against `candidates`
///
/// Ties go to the alphabetically first guess. Returns `None` for an empty
/// guess pool.
///
/// # Errors
/// Returns `PreconditionError::LengthMismatch` if any guess and candidate
/// differ in length.
pub fn select_best_guess<'a>(
    guess_pool: &'a [Word],
    candidates: &[Word],
) -> PreconditionResult<Option<(&'a Word, f64)>> {
    let mut best: Option<(&'a Word, f64)> = None;

    for guess in guess_pool {
        let entropy = calculate_entropy(guess, candidates)?;
        let better = match best {
            None => true,
            Some((current, current_entropy)) => match entropy.total_cmp(&current_entropy) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Equal => guess < current,
                std::cmp::Ordering::Less => false,
            },
        };
        if better {
            best = Some((guess, entropy));
        }
    }

    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PreconditionError;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn pattern(text: &str) -> Pattern {
        Pattern::parse(text).unwrap()
    }

    #[test]
    fn shannon_entropy_uniform_distribution() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("NNNNN"), 1);
        counts.insert(pattern("YNNNN"), 1);
        counts.insert(pattern("?NNNN"), 1);
        counts.insert(pattern("YYNNN"), 1);

        assert!((shannon_entropy(&counts) - 2.0).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_certain_outcome() {
        let mut counts = FxHashMap::default();
        counts.insert(pattern("NNNNN"), 10);

        assert!(shannon_entropy(&counts).abs() < 0.001);
    }

    #[test]
    fn shannon_entropy_empty() {
        let counts: FxHashMap<Pattern, usize> = FxHashMap::default();
        assert!(shannon_entropy(&counts).abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_all_same_pattern() {
        let candidates = ["aaaaa", "bbbbb", "ccccc"].map(word);
        let entropy = calculate_entropy(&word("zzzzz"), &candidates).unwrap();
        assert!(entropy.abs() < 0.001);
    }

    #[test]
    fn entropy_perfect_split() {
        let candidates = ["later", "round"].map(word);
        let entropy = calculate_entropy(&word("later"), &candidates).unwrap();
        assert!((entropy - 1.0).abs() < 0.001);
    }

    #[test]
    fn entropy_empty_candidates() {
        assert!(calculate_entropy(&word("later"), &[]).unwrap().abs() < f64::EPSILON);
    }

    #[test]
    fn entropy_length_mismatch() {
        assert!(matches!(
            calculate_entropy(&word("later"), &[word("lat")]),
            Err(PreconditionError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn metrics_partition_sizes() {
        // tower splits later/liter (?NNYY) from lower/power (NYYYY)
        let candidates = ["later", "liter", "lower", "power"].map(word);
        let metrics = calculate_metrics(&word("tower"), &candidates).unwrap();

        assert!((metrics.entropy - 1.0).abs() < 0.001);
        assert_eq!(metrics.max_partition, 2);
        assert!((metrics.expected_remaining - 2.0).abs() < 0.001);
    }

    #[test]
    fn metrics_empty_candidates() {
        let metrics = calculate_metrics(&word("tower"), &[]).unwrap();
        assert_eq!(metrics.max_partition, 0);
        assert!(metrics.entropy.abs() < f64::EPSILON);
    }

    #[test]
    fn selects_highest_entropy() {
        let guesses = ["zzzzz", "tower"].map(word);
        let candidates = ["later", "liter", "lower", "power"].map(word);

        let (best, entropy) = select_best_guess(&guesses, &candidates).unwrap().unwrap();
        assert_eq!(best.text(), "tower");
        assert!(entropy > 0.5);
    }

    #[test]
    fn ties_go_to_alphabetically_first() {
        let guesses = ["bbbbb", "aaaaa"].map(word);
        let candidates = [word("ccccc")];

        let (best, _) = select_best_guess(&guesses, &candidates).unwrap().unwrap();
        assert_eq!(best.text(), "aaaaa");
    }

    #[test]
    fn empty_guess_pool() {
        assert!(select_best_guess(&[], &[word("later")]).unwrap().is_none());
    }
}
