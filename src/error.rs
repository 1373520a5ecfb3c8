//! Error types for TSP search and instance loading.

use std::time::Duration;

use thiserror::Error;

/// Errors produced by the solvers, the instance loader, and configuration.
#[derive(Debug, Error)]
pub enum TspError {
    /// The input cannot be searched (e.g. an empty point set where at least
    /// one node is required, or a negative time budget).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The exhaustive search deadline passed before a single tour was
    /// evaluated, so there is no result to report.
    #[error("Time budget of {budget:?} exhausted before any tour was evaluated")]
    BudgetExhausted {
        /// The budget that was exhausted.
        budget: Duration,
    },

    /// Malformed instance data.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// Reading an instance or configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration document could not be deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type alias for TSP operations.
pub type Result<T> = std::result::Result<T, TspError>;
