//! Random-start nearest-neighbor walk.
//!
//! Picks a uniformly random start node with the caller's generator and walks
//! greedily to the nearest unvisited node until every node is covered. Used
//! to seed hill climbing with a reasonably short tour instead of a uniformly
//! random permutation.

use rand::Rng;

use super::nearest_neighbor::nearest_neighbor_tour;
use crate::distance::CostOracle;
use crate::error::{Result, TspError};
use crate::models::Tour;

/// Builds one greedy tour from a random start node.
///
/// The generator is the only source of randomness; a seeded generator makes
/// the result reproducible.
///
/// # Errors
///
/// Returns [`TspError::InvalidInput`] if the oracle has no nodes.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use u_tsp::models::Point;
/// use u_tsp::distance::{tour_cost, EuclideanOracle};
/// use u_tsp::constructive::random_walk;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let oracle = EuclideanOracle::new(&points);
///
/// let (cost, tour) = random_walk(&oracle, &mut StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(tour.len(), 4);
/// assert!((cost - tour_cost(tour.nodes(), &points)).abs() < 1e-10);
///
/// let again = random_walk(&oracle, &mut StdRng::seed_from_u64(42)).unwrap();
/// assert_eq!(again.1, tour);
/// ```
pub fn random_walk<O, R>(oracle: &O, rng: &mut R) -> Result<(f64, Tour)>
where
    O: CostOracle + ?Sized,
    R: Rng,
{
    let n = oracle.size();
    if n == 0 {
        return Err(TspError::InvalidInput(
            "random walk requires at least one point".to_string(),
        ));
    }
    let start = rng.random_range(0..n);
    nearest_neighbor_tour(oracle, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{tour_cost, DistanceMatrix, EuclideanOracle};
    use crate::models::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scattered() -> Vec<Point> {
        vec![
            Point::new(0.0, 0.0),
            Point::new(4.0, 1.0),
            Point::new(2.0, 5.0),
            Point::new(-1.0, 3.0),
            Point::new(3.0, -2.0),
            Point::new(6.0, 4.0),
            Point::new(-2.0, -1.0),
        ]
    }

    #[test]
    fn test_walk_visits_every_node_once() {
        let pts = scattered();
        let oracle = EuclideanOracle::new(&pts);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let (_, tour) = random_walk(&oracle, &mut rng).expect("non-empty");
            let mut nodes = tour.nodes().to_vec();
            nodes.sort_unstable();
            assert_eq!(nodes, (0..pts.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_walk_cost_consistent() {
        let pts = scattered();
        let oracle = EuclideanOracle::new(&pts);
        let mut rng = StdRng::seed_from_u64(123);
        for _ in 0..10 {
            let (cost, tour) = random_walk(&oracle, &mut rng).expect("non-empty");
            assert!((cost - tour_cost(tour.nodes(), &pts)).abs() < 1e-10);
        }
    }

    #[test]
    fn test_walk_seeded_determinism() {
        let pts = scattered();
        let oracle = EuclideanOracle::new(&pts);
        let a = random_walk(&oracle, &mut StdRng::seed_from_u64(99)).expect("non-empty");
        let b = random_walk(&oracle, &mut StdRng::seed_from_u64(99)).expect("non-empty");
        assert_eq!(a.1, b.1);
        assert_eq!(a.0, b.0);
    }

    #[test]
    fn test_walk_single_node() {
        let pts = vec![Point::new(1.0, 2.0)];
        let oracle = EuclideanOracle::new(&pts);
        let (cost, tour) =
            random_walk(&oracle, &mut StdRng::seed_from_u64(0)).expect("non-empty");
        assert_eq!(cost, 0.0);
        assert_eq!(tour.nodes(), &[0]);
    }

    #[test]
    fn test_walk_empty_is_invalid() {
        let oracle = DistanceMatrix::from_points(&[]);
        let err = random_walk(&oracle, &mut StdRng::seed_from_u64(0))
            .expect_err("empty point set");
        assert!(matches!(err, TspError::InvalidInput(_)));
    }
}
