//! Constructive heuristics for building initial tours.
//!
//! - [`nearest_neighbor_tour`] — Greedy nearest-neighbor from a fixed start, O(n²)
//! - [`random_walk`] — Nearest-neighbor from a uniformly random start, O(n²)

mod nearest_neighbor;
mod random_walk;

pub use nearest_neighbor::nearest_neighbor_tour;
pub use random_walk::random_walk;
