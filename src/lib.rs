//! # u-tsp
//!
//! Euclidean traveling salesman search comparing an exact, time-bounded
//! brute force against a randomized construction + local search pipeline.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour, SearchResult)
//! - [`distance`] — Euclidean distance, tour cost, and cost oracles
//! - [`exact`] — Deadline-bounded exhaustive permutation search
//! - [`constructive`] — Nearest-neighbor and random walk tour construction
//! - [`local_search`] — Random swap step and hill climbing
//! - [`instance`] — TSPLIB coordinate loading
//! - [`config`] — Solver configuration (TOML)
//! - [`solver`] — Point-set entry points and strategy comparison

pub mod config;
pub mod constructive;
pub mod distance;
mod error;
pub mod exact;
pub mod instance;
pub mod local_search;
pub mod models;
pub mod solver;

pub use error::{Result, TspError};
