//! Domain model types for the traveling salesman problem.
//!
//! Provides the core abstractions: points in the plane, tours as validated
//! permutations of node indices, and the result pairing a tour with its cost.

mod point;
mod solution;
mod tour;

pub use point::Point;
pub use solution::SearchResult;
pub use tour::Tour;
