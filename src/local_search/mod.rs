//! Local search for improving TSP tours.
//!
//! - [`swap_step`] — One random pairwise swap, accepted only if strictly improving
//! - [`HillClimber`] — Repeated swap steps with an iteration cap and stagnation limit

mod hill_climbing;
mod swap;

pub use hill_climbing::{HillClimber, HillClimbingConfig, RefineOutcome};
pub use swap::swap_step;
