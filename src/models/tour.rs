//! Tour type.

use serde::{Deserialize, Serialize};

/// A closed visiting order over nodes `0..n`.
///
/// The last node connects back to the first. Every index in `[0, n)` appears
/// exactly once; constructors enforce this.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.nodes(), &[2, 0, 1]);
///
/// assert!(Tour::new(vec![0, 0, 1]).is_none());
/// assert!(Tour::new(vec![0, 3]).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Creates a tour from a visiting order.
    ///
    /// Returns `None` unless `nodes` is a permutation of `0..nodes.len()`.
    pub fn new(nodes: Vec<usize>) -> Option<Self> {
        if !is_permutation(&nodes) {
            return None;
        }
        Some(Self { nodes })
    }

    /// Wraps an order already known to be a permutation.
    pub(crate) fn from_permutation(nodes: Vec<usize>) -> Self {
        debug_assert!(is_permutation(&nodes));
        Self { nodes }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self {
            nodes: (0..n).collect(),
        }
    }

    /// Node indices in visiting order.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Number of nodes in the tour.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tour visits no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Swaps the nodes at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.nodes.swap(i, j);
    }

    /// Returns the same cycle starting at position `k` (modulo length).
    pub fn rotated(&self, k: usize) -> Self {
        let mut nodes = self.nodes.clone();
        if !nodes.is_empty() {
            let k = k % nodes.len();
            nodes.rotate_left(k);
        }
        Self { nodes }
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_nodes(self) -> Vec<usize> {
        self.nodes
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = String;

    fn try_from(nodes: Vec<usize>) -> Result<Self, Self::Error> {
        Tour::new(nodes).ok_or_else(|| "tour must be a permutation of 0..n".to_string())
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.nodes
    }
}

/// Returns `true` if `nodes` contains every index in `[0, len)` exactly once.
fn is_permutation(nodes: &[usize]) -> bool {
    let n = nodes.len();
    let mut seen = vec![false; n];
    for &node in nodes {
        if node >= n || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_valid() {
        let t = Tour::new(vec![1, 2, 0]).expect("valid");
        assert_eq!(t.len(), 3);
        assert!(!t.is_empty());
        assert_eq!(t.clone().into_nodes(), vec![1, 2, 0]);
    }

    #[test]
    fn test_tour_invalid() {
        assert!(Tour::new(vec![1, 1]).is_none());
        assert!(Tour::new(vec![0, 2]).is_none());
        assert!(Tour::new(vec![5]).is_none());
    }

    #[test]
    fn test_tour_empty() {
        let t = Tour::new(vec![]).expect("empty is a permutation of nothing");
        assert!(t.is_empty());
        assert_eq!(t, Tour::identity(0));
    }

    #[test]
    fn test_tour_identity() {
        assert_eq!(Tour::identity(4).nodes(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_tour_swap() {
        let mut t = Tour::identity(4);
        t.swap(0, 3);
        assert_eq!(t.nodes(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_tour_rotated() {
        let t = Tour::new(vec![3, 1, 0, 2]).expect("valid");
        assert_eq!(t.rotated(1).nodes(), &[1, 0, 2, 3]);
        assert_eq!(t.rotated(4), t);
        assert_eq!(t.rotated(6).nodes(), &[0, 2, 3, 1]);
        assert!(Tour::identity(0).rotated(3).is_empty());
    }

    #[test]
    fn test_tour_try_from() {
        assert!(Tour::try_from(vec![0, 1]).is_ok());
        assert!(Tour::try_from(vec![1, 1]).is_err());
    }
}
