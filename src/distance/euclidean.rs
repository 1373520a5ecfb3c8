//! Euclidean distance and closed-tour cost.

use crate::models::Point;

/// Supplies the travel cost between any two of `size()` nodes.
///
/// Both search strategies evaluate tours through this trait, so they share
/// identical cost semantics whether costs are computed on demand
/// ([`EuclideanOracle`]) or precomputed ([`DistanceMatrix`](super::DistanceMatrix)).
pub trait CostOracle {
    /// Number of nodes.
    fn size(&self) -> usize;

    /// Cost of travelling from node `from` to node `to`.
    fn cost(&self, from: usize, to: usize) -> f64;

    /// Length of the closed cycle `tour[0] → … → tour[n-1] → tour[0]`.
    ///
    /// Zero for tours of length 0 or 1.
    fn tour_cost(&self, tour: &[usize]) -> f64 {
        if tour.len() <= 1 {
            return 0.0;
        }
        let open: f64 = tour.windows(2).map(|w| self.cost(w[0], w[1])).sum();
        open + self.cost(tour[tour.len() - 1], tour[0])
    }
}

/// Euclidean distance between two points.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::distance;
///
/// let d = distance(&Point::new(1.0, 1.0), &Point::new(4.0, 5.0));
/// assert!((d - 5.0).abs() < 1e-10);
/// ```
pub fn distance(a: &Point, b: &Point) -> f64 {
    a.distance_to(b)
}

/// Total length of a closed tour over `points`, including the edge from the
/// last node back to the first.
///
/// # Panics
///
/// Panics if the tour references an index outside `points`.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::tour_cost;
///
/// let square = [
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// assert!((tour_cost(&[0, 1, 2, 3], &square) - 4.0).abs() < 1e-10);
/// assert_eq!(tour_cost(&[2], &square), 0.0);
/// ```
pub fn tour_cost(tour: &[usize], points: &[Point]) -> f64 {
    EuclideanOracle::new(points).tour_cost(tour)
}

/// Computes Euclidean costs on demand from borrowed coordinates.
///
/// Nothing is precomputed, so memory stays O(1) regardless of how few pairs
/// a search ends up evaluating.
#[derive(Debug, Clone, Copy)]
pub struct EuclideanOracle<'a> {
    points: &'a [Point],
}

impl<'a> EuclideanOracle<'a> {
    /// Wraps a point set.
    pub fn new(points: &'a [Point]) -> Self {
        Self { points }
    }

    /// The underlying points.
    pub fn points(&self) -> &'a [Point] {
        self.points
    }
}

impl CostOracle for EuclideanOracle<'_> {
    fn size(&self) -> usize {
        self.points.len()
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        distance(&self.points[from], &self.points[to])
    }
}
