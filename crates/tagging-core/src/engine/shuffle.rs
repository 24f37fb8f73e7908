//! Uniform in-place shuffling.

use rand::Rng;

/// Shuffle `items` in place with the Fisher-Yates algorithm.
///
/// Every permutation is equally likely, given a uniform `rng`.
pub fn fisher_yates<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}
