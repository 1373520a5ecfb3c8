//! Dense distance matrix.

use super::euclidean::CostOracle;
use crate::models::Point;

/// A dense n×n distance matrix stored in row-major order.
///
/// Supports both Euclidean distance computation from point coordinates
/// and explicit (possibly asymmetric) distance specification.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::{CostOracle, DistanceMatrix};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 4.0),
///     Point::new(6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// assert!((dm.tour_cost(&[0, 1, 2]) - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes a Euclidean distance matrix from point coordinates.
    pub fn from_points(points: &[Point]) -> Self {
        let size = points.len();
        let data = points
            .iter()
            .flat_map(|a| points.iter().map(move |b| a.distance_to(b)))
            .collect();
        Self { data, size }
    }

    /// Creates a distance matrix from an explicit n×n grid in row-major
    /// order. Entries may be asymmetric.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from node `from` to node `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of nodes in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

impl CostOracle for DistanceMatrix {
    fn size(&self) -> usize {
        self.size
    }

    fn cost(&self, from: usize, to: usize) -> f64 {
        self.get(from, to)
    }
}
