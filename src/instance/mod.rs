//! Instance loading.
//!
//! Turns benchmark files into the point sets the solvers consume.

mod tsplib;

pub use tsplib::{load_points, parse_points};
