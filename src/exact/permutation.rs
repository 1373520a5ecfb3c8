//! Iterative lexicographic permutation generation.
//!
//! # Algorithm
//!
//! Given the current permutation `a`:
//!
//! 1. Find the largest `i` with `a[i] < a[i + 1]`. If none, `a` is the last
//!    permutation.
//! 2. Find the largest `j > i` with `a[i] < a[j]`.
//! 3. Swap `a[i]` and `a[j]`, then reverse `a[i + 1..]`.
//!
//! Each step runs in place in amortized O(1), worst case O(n), with no
//! allocation and no recursion.
//!
//! # Reference
//!
//! Knuth, D.E. (2011). *The Art of Computer Programming*, Vol. 4A,
//! Algorithm 7.2.1.2L.

/// Advances `perm` to the next permutation in lexicographic order.
///
/// Returns `false` (leaving `perm` unchanged) if `perm` is already the last
/// permutation, i.e. sorted in descending order.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::next_permutation;
///
/// let mut p = [0, 1, 2];
/// assert!(next_permutation(&mut p));
/// assert_eq!(p, [0, 2, 1]);
///
/// let mut last = [2, 1, 0];
/// assert!(!next_permutation(&mut last));
/// assert_eq!(last, [2, 1, 0]);
/// ```
pub fn next_permutation<T: Ord>(perm: &mut [T]) -> bool {
    let n = perm.len();
    if n < 2 {
        return false;
    }

    let mut i = n - 1;
    while i > 0 && perm[i - 1] >= perm[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let pivot = i - 1;

    let mut j = n - 1;
    while perm[j] <= perm[pivot] {
        j -= 1;
    }

    perm.swap(pivot, j);
    perm[i..].reverse();
    true
}

/// Walks every permutation of `0..n` in lexicographic order, starting from
/// the identity.
///
/// This is a lending cursor rather than an [`Iterator`]: each call to
/// [`advance`](Self::advance) borrows the internal buffer, so no permutation
/// is ever allocated.
///
/// # Examples
///
/// ```
/// use u_tsp::exact::Permutations;
///
/// let mut perms = Permutations::new(3);
/// let mut count = 0;
/// while let Some(p) = perms.advance() {
///     assert_eq!(p.len(), 3);
///     count += 1;
/// }
/// assert_eq!(count, 6);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl Permutations {
    /// Creates a cursor over the permutations of `0..n`.
    pub fn new(n: usize) -> Self {
        Self {
            current: (0..n).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Returns the next permutation, or `None` once all have been produced.
    ///
    /// For `n = 0` the single (empty) permutation is produced once.
    pub fn advance(&mut self) -> Option<&[usize]> {
        if self.exhausted {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(&self.current);
        }
        if next_permutation(&mut self.current) {
            Some(&self.current)
        } else {
            self.exhausted = true;
            None
        }
    }
}

/// n! as a floating-point number.
///
/// Stays finite up to n = 170, well past anything enumerable.
pub fn factorial(n: usize) -> f64 {
    (2..=n).map(|k| k as f64).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_permutation_sequence() {
        let mut p = [0, 1, 2];
        let mut seen = vec![p.to_vec()];
        while next_permutation(&mut p) {
            seen.push(p.to_vec());
        }
        assert_eq!(
            seen,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn test_next_permutation_trivial() {
        let mut empty: [usize; 0] = [];
        assert!(!next_permutation(&mut empty));
        let mut one = [0];
        assert!(!next_permutation(&mut one));
    }

    #[test]
    fn test_next_permutation_with_duplicates() {
        // Multiset permutations: 3!/2! = 3 distinct orderings
        let mut p = [1, 1, 2];
        let mut count = 1;
        while next_permutation(&mut p) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_permutations_count() {
        for n in 0..=6 {
            let mut perms = Permutations::new(n);
            let mut count = 0u64;
            while perms.advance().is_some() {
                count += 1;
            }
            assert_eq!(count as f64, factorial(n), "n = {n}");
        }
    }

    #[test]
    fn test_permutations_distinct() {
        let mut perms = Permutations::new(4);
        let mut all = std::collections::HashSet::new();
        while let Some(p) = perms.advance() {
            assert!(all.insert(p.to_vec()));
        }
        assert_eq!(all.len(), 24);
    }

    #[test]
    fn test_permutations_stays_exhausted() {
        let mut perms = Permutations::new(2);
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_some());
        assert!(perms.advance().is_none());
        assert!(perms.advance().is_none());
    }

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1.0);
        assert_eq!(factorial(1), 1.0);
        assert_eq!(factorial(5), 120.0);
        assert_eq!(factorial(10), 3_628_800.0);
        assert!(factorial(170).is_finite());
    }
}
