//! N-ary Cartesian product
//!
//! Combines any number of ordered lists into every tuple that takes one
//! element from each list. Output order is lexicographic: the first list
//! varies slowest, the last list fastest.

use itertools::Itertools;

/// Every combination taking one element from each collection, in order
///
/// With no collections the product is a single empty combination. If any
/// collection is empty the product is empty.
///
/// # Examples
/// ```
/// use wordle_inference::product::cartesian_product;
///
/// let result = cartesian_product(&[vec![1, 2, 3], vec![10, 20]]);
/// assert_eq!(
///     result,
///     vec![vec![1, 10], vec![1, 20], vec![2, 10], vec![2, 20], vec![3, 10], vec![3, 20]]
/// );
/// ```
#[must_use]
pub fn cartesian_product<T: Clone>(collections: &[Vec<T>]) -> Vec<Vec<T>> {
    if collections.is_empty() {
        return vec![Vec::new()];
    }

    collections
        .iter()
        .map(|collection| collection.iter().cloned())
        .multi_cartesian_product()
        .collect()
}

/// Number of combinations `cartesian_product` would produce
#[must_use]
pub fn product_size<T>(collections: &[Vec<T>]) -> usize {
    collections
        .iter()
        .map(Vec::len)
        .fold(1, usize::saturating_mul)
}
