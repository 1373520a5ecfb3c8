//! Exact search by exhaustive permutation enumeration.
//!
//! - [`exhaustive_search`] — Deadline-bounded brute force over all n! tours
//! - [`Permutations`] / [`next_permutation`] — Iterative lexicographic generator

mod exhaustive;
mod permutation;

pub use exhaustive::{exhaustive_search, ExhaustiveResult, SearchBudget};
pub use permutation::{factorial, next_permutation, Permutations};
