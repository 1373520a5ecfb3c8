//! Random pairwise-swap improvement step.
//!
//! # Algorithm
//!
//! Draw a position `i` uniformly, redraw `j` until `j != i`, exchange the
//! nodes at those positions, and re-evaluate the full closed-tour cost. The
//! candidate replaces the current tour only if its cost is strictly lower.
//!
//! # Complexity
//!
//! O(n) per step (full re-evaluation of the tour).

use rand::Rng;

use crate::distance::CostOracle;
use crate::models::Tour;

/// Performs one random swap proposal and keeps it only if it improves.
///
/// `cost` is the caller's current cost for `tour`; the candidate is accepted
/// when its freshly computed cost is strictly less than `cost`. Otherwise
/// `(cost, tour)` is returned unchanged. Tours with fewer than two nodes have
/// no swap to propose and are returned as is.
///
/// # Panics
///
/// Panics if `tour` does not cover exactly the oracle's nodes.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::models::{Point, Tour};
/// use u_tsp::distance::{tour_cost, EuclideanOracle};
/// use u_tsp::local_search::swap_step;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let oracle = EuclideanOracle::new(&points);
/// let tour = Tour::identity(4);
/// let cost = tour_cost(tour.nodes(), &points);
///
/// let (new_cost, new_tour) = swap_step(cost, tour, &oracle, &mut StdRng::seed_from_u64(1));
/// assert!(new_cost <= cost);
/// assert_eq!(new_tour.len(), 4);
/// ```
pub fn swap_step<O, R>(cost: f64, mut tour: Tour, oracle: &O, rng: &mut R) -> (f64, Tour)
where
    O: CostOracle + ?Sized,
    R: Rng,
{
    debug_assert_eq!(tour.len(), oracle.size(), "tour length must match node count");
    let n = tour.len();
    if n < 2 {
        return (cost, tour);
    }

    let (i, j) = distinct_positions(n, rng);
    tour.swap(i, j);
    let candidate = oracle.tour_cost(tour.nodes());

    if candidate < cost {
        (candidate, tour)
    } else {
        tour.swap(i, j);
        (cost, tour)
    }
}

/// Draws two distinct positions in `0..n`. Requires `n >= 2`.
fn distinct_positions<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    (i, j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{tour_cost, EuclideanOracle};
    use crate::models::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn crossed_square() -> (Vec<Point>, Tour) {
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        // Identity order crosses both diagonals
        (pts, Tour::identity(4))
    }

    #[test]
    #[should_panic]
    fn test_tour_longer_than_instance() {
        let (pts, _) = crossed_square();
        let oracle = EuclideanOracle::new(&pts);
        let tour = Tour::identity(6);
        swap_step(100.0, tour, &oracle, &mut StdRng::seed_from_u64(1));
    }

    #[test]
    fn test_distinct_positions() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let (i, j) = distinct_positions(3, &mut rng);
            assert_ne!(i, j);
            assert!(i < 3 && j < 3);
        }
        // Two positions can only be {0, 1}
        let (i, j) = distinct_positions(2, &mut rng);
        assert_eq!(i + j, 1);
    }

    #[test]
    fn test_swap_never_worsens() {
        let (pts, mut tour) = crossed_square();
        let oracle = EuclideanOracle::new(&pts);
        let mut cost = tour_cost(tour.nodes(), &pts);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let before = cost;
            (cost, tour) = swap_step(cost, tour, &oracle, &mut rng);
            assert!(cost <= before);
            assert!((cost - tour_cost(tour.nodes(), &pts)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_swap_reaches_optimum_on_square() {
        let (pts, mut tour) = crossed_square();
        let oracle = EuclideanOracle::new(&pts);
        let mut cost = tour_cost(tour.nodes(), &pts);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..500 {
            (cost, tour) = swap_step(cost, tour, &oracle, &mut rng);
        }
        // Every 4-node tour is one swap away from an uncrossed one
        assert!((cost - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_rejected_swap_returns_original() {
        // Unit square in optimal order: no swap can improve it
        let pts = vec![
            Point::new(0.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(1.0, 1.0),
            Point::new(1.0, 0.0),
        ];
        let oracle = EuclideanOracle::new(&pts);
        let tour = Tour::identity(4);
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..50 {
            let (cost, out) = swap_step(4.0, tour.clone(), &oracle, &mut rng);
            assert_eq!(cost, 4.0);
            assert_eq!(out, tour);
        }
    }

    #[test]
    fn test_swap_trivial_tours() {
        let pts = vec![Point::new(0.0, 0.0)];
        let oracle = EuclideanOracle::new(&pts);
        let mut rng = StdRng::seed_from_u64(0);
        let (cost, tour) = swap_step(0.0, Tour::identity(1), &oracle, &mut rng);
        assert_eq!(cost, 0.0);
        assert_eq!(tour.nodes(), &[0]);

        let empty = EuclideanOracle::new(&[]);
        let (cost, tour) = swap_step(0.0, Tour::identity(0), &empty, &mut rng);
        assert_eq!(cost, 0.0);
        assert!(tour.is_empty());
    }
}
