//! Attack order enumeration.
//!
//! Yields every ordering of `n` positions in lexicographic order, starting
//! from the identity. The sequence has `n!` entries; the empty sequence has
//! exactly one ordering.

use std::ops::Range;

use itertools::Itertools;

/// Iterator over all permutations of `0..n`, lexicographic.
pub struct Permutations {
    inner: itertools::Permutations<Range<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Permutations {
            inner: (0..n).permutations(n),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Number of orderings of `n` items, or `None` on overflow.
pub fn permutation_count(n: usize) -> Option<u64> {
    (1..=n as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
}

/// Returns `items` rearranged by `positions`.
pub fn apply_order<T: Clone>(items: &[T], positions: &[usize]) -> Vec<T> {
    positions.iter().map(|&p| items[p].clone()).collect()
}
