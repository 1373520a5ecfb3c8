//! Hill climbing driver over the random swap neighborhood.
//!
//! [`HillClimber`] owns its random generator and repeats [`swap_step`] until
//! an iteration cap or a stagnation limit is reached, so callers get a whole
//! hill-climbing run from one call.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::swap::swap_step;
use crate::distance::CostOracle;
use crate::models::Tour;

/// Configuration parameters for hill climbing.
///
/// # Examples
///
/// ```
/// use u_tsp::local_search::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_max_iterations(2000)
///     .with_max_no_improve(300)
///     .with_seed(42);
/// assert_eq!(config.max_iterations, 2000);
/// assert_eq!(config.max_no_improve, Some(300));
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillClimbingConfig {
    /// Maximum number of swap proposals.
    pub max_iterations: usize,
    /// Stop after this many consecutive rejected proposals (None = never).
    pub max_no_improve: Option<usize>,
    /// Random seed (None for an OS-seeded generator).
    pub seed: Option<u64>,
}

impl HillClimbingConfig {
    /// Default number of swap proposals per run.
    pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

    /// Sets the maximum number of swap proposals.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the stagnation limit.
    pub fn with_max_no_improve(mut self, n: usize) -> Self {
        self.max_no_improve = Some(n);
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            max_iterations: Self::DEFAULT_MAX_ITERATIONS,
            max_no_improve: None,
            seed: None,
        }
    }
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefineOutcome {
    /// Final tour cost.
    pub cost: f64,
    /// Final tour.
    pub tour: Tour,
    /// Swap proposals evaluated.
    pub iterations: usize,
    /// Proposals accepted.
    pub improvements: usize,
}

/// Repeated swap-based hill climbing with a persistent generator.
///
/// Consecutive calls continue the same random stream, so a climber built
/// from a seeded config produces a reproducible trajectory.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::distance::EuclideanOracle;
/// use u_tsp::constructive::nearest_neighbor_tour;
/// use u_tsp::local_search::{HillClimber, HillClimbingConfig};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(2.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(1.0, 3.0),
/// ];
/// let oracle = EuclideanOracle::new(&points);
/// let (cost, tour) = nearest_neighbor_tour(&oracle, 0).unwrap();
///
/// let mut climber = HillClimber::new(HillClimbingConfig::default().with_seed(7));
/// let outcome = climber.refine(cost, tour, &oracle);
/// assert!(outcome.cost <= cost);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimber {
    config: HillClimbingConfig,
    rng: StdRng,
}

impl HillClimber {
    /// Creates a climber, seeding its generator from the config or the OS.
    pub fn new(config: HillClimbingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { config, rng }
    }

    /// The configuration this climber runs with.
    pub fn config(&self) -> &HillClimbingConfig {
        &self.config
    }

    /// Performs a single swap proposal.
    pub fn step<O>(&mut self, cost: f64, tour: Tour, oracle: &O) -> (f64, Tour)
    where
        O: CostOracle + ?Sized,
    {
        swap_step(cost, tour, oracle, &mut self.rng)
    }

    /// Runs hill climbing from `(cost, tour)` until the iteration cap or the
    /// stagnation limit is hit.
    pub fn refine<O>(&mut self, cost: f64, tour: Tour, oracle: &O) -> RefineOutcome
    where
        O: CostOracle + ?Sized,
    {
        let initial = cost;
        let mut cost = cost;
        let mut tour = tour;
        let mut iterations = 0;
        let mut improvements = 0;
        let mut no_improve = 0;

        if tour.len() >= 2 {
            while iterations < self.config.max_iterations {
                if self.config.max_no_improve.is_some_and(|limit| no_improve >= limit) {
                    break;
                }
                iterations += 1;

                let before = cost;
                (cost, tour) = self.step(cost, tour, oracle);
                if cost < before {
                    improvements += 1;
                    no_improve = 0;
                    trace!(iteration = iterations, cost, "swap accepted");
                } else {
                    no_improve += 1;
                }
            }
        }

        debug!(initial, cost, iterations, improvements, "hill climbing finished");

        RefineOutcome {
            cost,
            tour,
            iterations,
            improvements,
        }
    }
}
