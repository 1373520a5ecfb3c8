//! Entry points over a point set.
//!
//! These wrap the strategy modules for callers that hold plain coordinates:
//! each builds an [`EuclideanOracle`] over the points and forwards to
//! [`exact`](crate::exact), [`constructive`](crate::constructive) or
//! [`local_search`](crate::local_search).

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use tracing::info;

use crate::config::SolverConfig;
use crate::constructive::random_walk;
use crate::distance::EuclideanOracle;
use crate::error::{Result, TspError};
use crate::exact::{exhaustive_search, ExhaustiveResult, SearchBudget};
use crate::local_search::{swap_step, HillClimber, HillClimbingConfig, RefineOutcome};
use crate::models::{Point, SearchResult, Tour};

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Exhaustive search over `points` bounded by `budget_secs` of wall-clock time.
///
/// # Errors
///
/// [`TspError::InvalidInput`] for a negative or non-finite budget and
/// [`TspError::BudgetExhausted`] if no tour was evaluated in time.
///
/// # Examples
///
/// ```
/// use u_tsp::models::Point;
/// use u_tsp::solver::run_exhaustive;
///
/// let square = vec![
///     Point::new(0.0, 0.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let result = run_exhaustive(&square, 5.0).unwrap();
/// assert!((result.cost() - 4.0).abs() < 1e-10);
/// assert!((result.explored_fraction() - 1.0).abs() < 1e-12);
/// ```
pub fn run_exhaustive(points: &[Point], budget_secs: f64) -> Result<ExhaustiveResult> {
    let budget = SearchBudget::from_secs_f64(budget_secs)?;
    exhaustive_search(&EuclideanOracle::new(points), budget)
}

/// Nearest-neighbor walk from a random start, returning `(cost, tour)`.
///
/// # Errors
///
/// [`TspError::InvalidInput`] if `points` is empty.
pub fn run_random_walk(points: &[Point], seed: Option<u64>) -> Result<(f64, Tour)> {
    random_walk(&EuclideanOracle::new(points), &mut rng_from(seed))
}

/// A single swap proposal on `tour`, kept only if it lowers `cost`.
///
/// A fresh generator is created for every call, so repeating a call with the
/// same seed repeats the same proposal. Use [`refine`] or a [`HillClimber`]
/// for a trajectory.
///
/// # Panics
///
/// Panics if `tour` is not a permutation of the indices of `points`.
pub fn refine_once(cost: f64, tour: Tour, points: &[Point], seed: Option<u64>) -> (f64, Tour) {
    swap_step(cost, tour, &EuclideanOracle::new(points), &mut rng_from(seed))
}

/// Hill climbing from `(cost, tour)` under `config`.
pub fn refine(
    cost: f64,
    tour: Tour,
    points: &[Point],
    config: &HillClimbingConfig,
) -> RefineOutcome {
    HillClimber::new(config.clone()).refine(cost, tour, &EuclideanOracle::new(points))
}

/// Results of running both strategies on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct Comparison {
    /// Number of points in the instance.
    pub nodes: usize,
    /// Exhaustive search result; `None` if the budget ran out before any tour
    /// was evaluated.
    pub exhaustive: Option<ExhaustiveResult>,
    /// The random walk tour that seeded hill climbing.
    pub initial: SearchResult,
    /// The hill-climbing result.
    pub local_search: RefineOutcome,
}

impl Comparison {
    /// Relative gap of the local search cost over the exhaustive cost.
    ///
    /// `None` when there is no exhaustive result or its cost is zero.
    pub fn gap(&self) -> Option<f64> {
        let exact = self.exhaustive.as_ref()?.cost();
        if exact == 0.0 {
            return None;
        }
        Some((self.local_search.cost - exact) / exact)
    }
}

/// Runs the exhaustive search and the random walk + hill climbing pipeline
/// on the same points.
///
/// # Errors
///
/// [`TspError::InvalidInput`] if `points` is empty or the configured time
/// limit is invalid. An exhausted budget is reported as
/// `exhaustive: None`, not as an error.
///
/// # Examples
///
/// ```
/// use u_tsp::config::SolverConfig;
/// use u_tsp::models::Point;
/// use u_tsp::solver::compare;
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(3.0, 0.0),
///     Point::new(3.0, 2.0),
///     Point::new(0.0, 2.0),
///     Point::new(1.5, 3.0),
/// ];
/// let config = SolverConfig::new().with_time_limit_secs(5.0).with_seed(42);
/// let report = compare(&points, &config).unwrap();
///
/// let exact = report.exhaustive.as_ref().unwrap();
/// assert!(exact.completed);
/// assert!(exact.cost() <= report.local_search.cost + 1e-10);
/// assert!(report.local_search.cost <= report.initial.cost());
/// ```
pub fn compare(points: &[Point], config: &SolverConfig) -> Result<Comparison> {
    let budget = config.exhaustive.budget()?;
    let oracle = EuclideanOracle::new(points);

    let exhaustive = match exhaustive_search(&oracle, budget) {
        Ok(result) => Some(result),
        Err(TspError::BudgetExhausted { .. }) => None,
        Err(e) => return Err(e),
    };

    let (cost, tour) = random_walk(&oracle, &mut rng_from(config.random_walk.seed))?;
    let initial = SearchResult::new(tour.clone(), cost);
    let local_search = HillClimber::new(config.hill_climbing.clone()).refine(cost, tour, &oracle);

    let comparison = Comparison {
        nodes: points.len(),
        exhaustive,
        initial,
        local_search,
    };

    info!(
        nodes = comparison.nodes,
        exact = comparison.exhaustive.as_ref().map(ExhaustiveResult::cost),
        initial = comparison.initial.cost(),
        refined = comparison.local_search.cost,
        "comparison finished"
    );

    Ok(comparison)
}
