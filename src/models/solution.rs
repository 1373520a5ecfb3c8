//! Search result type.

use serde::{Deserialize, Serialize};

use super::Tour;

/// The best tour a search produced, with its closed-cycle length.
///
/// # Examples
///
/// ```
/// use u_tsp::models::{SearchResult, Tour};
///
/// let result = SearchResult::new(Tour::identity(3), 12.0);
/// assert_eq!(result.tour().len(), 3);
/// assert_eq!(result.cost(), 12.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    tour: Tour,
    cost: f64,
}

impl SearchResult {
    /// Creates a result from a tour and its cost.
    pub fn new(tour: Tour, cost: f64) -> Self {
        Self { tour, cost }
    }

    /// The best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Total length of the tour, including the closing edge.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Splits the result into `(cost, tour)`.
    pub fn into_parts(self) -> (f64, Tour) {
        (self.cost, self.tour)
    }
}

impl From<(f64, Tour)> for SearchResult {
    fn from((cost, tour): (f64, Tour)) -> Self {
        Self::new(tour, cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_accessors() {
        let r = SearchResult::new(Tour::identity(2), 3.5);
        assert_eq!(r.tour().nodes(), &[0, 1]);
        assert_eq!(r.cost(), 3.5);
    }

    #[test]
    fn test_result_parts() {
        let r: SearchResult = (7.0, Tour::identity(1)).into();
        let (cost, tour) = r.into_parts();
        assert_eq!(cost, 7.0);
        assert_eq!(tour.nodes(), &[0]);
    }
}
