//! Deadline-bounded exhaustive search.
//!
//! # Algorithm
//!
//! Enumerates every permutation of the node indices in lexicographic order
//! (see [`Permutations`]) and keeps the cheapest closed tour. The wall clock
//! is checked before each evaluation; once the budget is spent the search
//! stops and reports the best tour seen so far.
//!
//! # Complexity
//!
//! O(n · n!) time, O(n) memory. In practice the deadline, not the instance,
//! bounds the runtime beyond n ≈ 11. A result is provably optimal only when
//! [`ExhaustiveResult::completed`] is `true`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use super::permutation::{factorial, Permutations};
use crate::distance::CostOracle;
use crate::error::{Result, TspError};
use crate::models::{SearchResult, Tour};

/// Wall-clock budget for [`exhaustive_search`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::exact::SearchBudget;
///
/// let budget = SearchBudget::from_secs_f64(1.5).unwrap();
/// assert_eq!(budget.duration(), Duration::from_millis(1500));
/// assert!(SearchBudget::from_secs_f64(-1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchBudget {
    duration: Duration,
}

impl SearchBudget {
    /// Default budget in seconds.
    pub const DEFAULT_SECS: u64 = 60;

    /// Creates a budget from a duration.
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// Creates a budget from (fractional) seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TspError::InvalidInput`] if `secs` is negative, not finite,
    /// or too large to represent as a [`Duration`].
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        if !secs.is_finite() || secs < 0.0 {
            return Err(TspError::InvalidInput(format!(
                "time budget must be a finite, non-negative number of seconds, got {secs}"
            )));
        }
        Duration::try_from_secs_f64(secs)
            .map(Self::new)
            .map_err(|e| TspError::InvalidInput(format!("time budget of {secs} s: {e}")))
    }

    /// The budget as a duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for SearchBudget {
    fn default() -> Self {
        Self::new(Duration::from_secs(Self::DEFAULT_SECS))
    }
}

impl From<Duration> for SearchBudget {
    fn from(duration: Duration) -> Self {
        Self::new(duration)
    }
}

/// Outcome of an exhaustive search that evaluated at least one tour.
#[derive(Debug, Clone, Serialize)]
pub struct ExhaustiveResult {
    /// Best tour and cost found.
    pub best: SearchResult,
    /// Number of permutations evaluated.
    pub explored: u64,
    /// n! for the instance size.
    pub total: f64,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// `true` if every permutation was evaluated (the result is optimal).
    pub completed: bool,
}

impl ExhaustiveResult {
    /// Fraction of the permutation space evaluated, `explored / n!`.
    pub fn explored_fraction(&self) -> f64 {
        self.explored as f64 / self.total
    }

    /// Best tour found.
    pub fn tour(&self) -> &Tour {
        self.best.tour()
    }

    /// Cost of the best tour found.
    pub fn cost(&self) -> f64 {
        self.best.cost()
    }
}

/// Searches all tours over the oracle's nodes until done or out of time.
///
/// A permutation replaces the incumbent only if strictly cheaper, so among
/// equally short tours the first in lexicographic order is returned.
///
/// Instances with zero or one node are answered immediately without
/// consulting the clock.
///
/// # Errors
///
/// Returns [`TspError::BudgetExhausted`] if the budget ran out before a
/// single permutation was evaluated (always the case for a zero budget on
/// two or more nodes).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tsp::models::Point;
/// use u_tsp::distance::EuclideanOracle;
/// use u_tsp::exact::{exhaustive_search, SearchBudget};
///
/// let points = vec![
///     Point::new(0.0, 0.0),
///     Point::new(1.0, 1.0),
///     Point::new(0.0, 1.0),
///     Point::new(1.0, 0.0),
/// ];
/// let oracle = EuclideanOracle::new(&points);
/// let result = exhaustive_search(&oracle, SearchBudget::new(Duration::from_secs(5))).unwrap();
/// assert!(result.completed);
/// assert!((result.cost() - 4.0).abs() < 1e-10);
/// assert_eq!(result.explored, 24);
/// ```
pub fn exhaustive_search<O>(oracle: &O, budget: SearchBudget) -> Result<ExhaustiveResult>
where
    O: CostOracle + ?Sized,
{
    let n = oracle.size();
    let start = Instant::now();

    if n <= 1 {
        return Ok(ExhaustiveResult {
            best: SearchResult::new(Tour::identity(n), 0.0),
            explored: 1,
            total: 1.0,
            elapsed: start.elapsed(),
            completed: true,
        });
    }

    debug!(nodes = n, budget = ?budget.duration(), "starting exhaustive search");

    let limit = budget.duration();
    let mut perms = Permutations::new(n);
    let mut best: Option<(Vec<usize>, f64)> = None;
    let mut explored: u64 = 0;
    let mut completed = false;

    loop {
        if start.elapsed() >= limit {
            break;
        }
        let Some(perm) = perms.advance() else {
            completed = true;
            break;
        };

        let cost = oracle.tour_cost(perm);
        explored += 1;

        if best.as_ref().is_none_or(|(_, b)| cost < *b) {
            trace!(explored, cost, "new incumbent");
            best = Some((perm.to_vec(), cost));
        }
    }

    let elapsed = start.elapsed();
    let total = factorial(n);

    let Some((nodes, cost)) = best else {
        info!(budget = ?limit, "time budget exhausted before any tour was evaluated");
        return Err(TspError::BudgetExhausted { budget: limit });
    };

    let result = ExhaustiveResult {
        best: SearchResult::new(Tour::from_permutation(nodes), cost),
        explored,
        total,
        elapsed,
        completed,
    };

    if completed {
        info!(explored, cost, elapsed = ?elapsed, "exhaustive search complete");
    } else {
        info!(
            explored,
            fraction = result.explored_fraction(),
            cost,
            elapsed = ?elapsed,
            "time limit reached, returning best tour found"
        );
    }

    Ok(result)
}
