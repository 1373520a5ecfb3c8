//! Distance model shared by every search strategy.
//!
//! - [`distance`] / [`tour_cost`] — Euclidean edge length and closed-tour length
//! - [`CostOracle`] — node-to-node cost lookup used by the solvers
//! - [`EuclideanOracle`] — on-demand costs from coordinates
//! - [`DistanceMatrix`] — dense precomputed costs

mod euclidean;
mod matrix;

pub use euclidean::{distance, tour_cost, CostOracle, EuclideanOracle};
pub use matrix::DistanceMatrix;
