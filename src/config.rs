//! Solver configuration.
//!
//! Every section is optional; missing keys fall back to defaults, so an
//! empty document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use std::time::Duration;
//! use u_tsp::config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     [exhaustive]
//!     time_limit_secs = 5.0
//!
//!     [random_walk]
//!     seed = 42
//!
//!     [hill_climbing]
//!     max_iterations = 2000
//!     max_no_improve = 300
//! "#).unwrap();
//!
//! assert_eq!(config.exhaustive.budget().unwrap().duration(), Duration::from_secs(5));
//! assert_eq!(config.random_walk.seed, Some(42));
//! assert_eq!(config.hill_climbing.max_no_improve, Some(300));
//! assert_eq!(config.hill_climbing.seed, None);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::exact::SearchBudget;
use crate::local_search::HillClimbingConfig;

/// Top-level configuration for [`compare`](crate::solver::compare).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Exhaustive search settings.
    pub exhaustive: ExhaustiveConfig,
    /// Random walk construction settings.
    pub random_walk: RandomWalkConfig,
    /// Hill climbing settings.
    pub hill_climbing: HillClimbingConfig,
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file can't be read or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Sets the exhaustive search time limit in seconds.
    pub fn with_time_limit_secs(mut self, secs: f64) -> Self {
        self.exhaustive.time_limit_secs = secs;
        self
    }

    /// Seeds both the random walk and hill climbing.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_walk.seed = Some(seed);
        self.hill_climbing.seed = Some(seed);
        self
    }
}

/// Exhaustive search settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExhaustiveConfig {
    /// Wall-clock budget in seconds.
    pub time_limit_secs: f64,
}

impl ExhaustiveConfig {
    /// Converts the configured limit into a [`SearchBudget`].
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`](crate::TspError::InvalidInput) for
    /// a negative or non-finite limit.
    pub fn budget(&self) -> Result<SearchBudget> {
        SearchBudget::from_secs_f64(self.time_limit_secs)
    }
}

impl Default for ExhaustiveConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: SearchBudget::DEFAULT_SECS as f64,
        }
    }
}

/// Random walk settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomWalkConfig {
    /// Random seed (None for an OS-seeded generator).
    pub seed: Option<u64>,
}
