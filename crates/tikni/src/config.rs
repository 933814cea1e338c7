//! Per-run search configuration.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// The direction preference of the indexed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Heuristic {
    /// Take the side with the smaller anchor gap first and verify backward
    /// before forward.
    #[default]
    Backward,
    /// Take the side with the larger anchor gap first and verify forward
    /// before backward.
    Forward,
}

/// What a run does when a single query fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ErrorPolicy {
    /// Stop the run and return the error.
    #[default]
    Abort,
    /// Log the error, record the query as skipped and continue.
    Skip,
}

/// Configuration of a neighbor-search run.
///
/// The builder keeps its own copy, so the configuration cannot change while a
/// run is in progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// The number of neighbors per query.
    pub k: usize,
    /// The order of the Minkowski distance.
    pub order: i32,
    /// Keep every record tied with the k-th neighbor.
    pub tie_inclusive: bool,
    /// Direction preference of the indexed search.
    pub heuristic: Heuristic,
    /// Compare each query against every record instead of using the index.
    pub brute_force: bool,
    /// Behavior when a query fails.
    pub on_error: ErrorPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k: 3,
            order: 2,
            tie_inclusive: false,
            heuristic: Heuristic::default(),
            brute_force: false,
            on_error: ErrorPolicy::default(),
        }
    }
}

impl SearchConfig {
    /// Sets the number of neighbors.
    #[must_use]
    pub const fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the Minkowski order.
    #[must_use]
    pub const fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }

    /// Sets whether ties with the k-th neighbor are kept.
    #[must_use]
    pub const fn with_tie_inclusive(mut self, tie_inclusive: bool) -> Self {
        self.tie_inclusive = tie_inclusive;
        self
    }

    /// Sets the direction preference.
    #[must_use]
    pub const fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets whether to use brute force.
    #[must_use]
    pub const fn with_brute_force(mut self, brute_force: bool) -> Self {
        self.brute_force = brute_force;
        self
    }

    /// Sets the error policy.
    #[must_use]
    pub const fn with_on_error(mut self, on_error: ErrorPolicy) -> Self {
        self.on_error = on_error;
        self
    }

    /// Checks that the values are in range.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `k` is zero or `order` is less than one.
    pub fn validate(&self) -> Result<()> {
        if self.k == 0 {
            return Err(Error::InvalidParameter("k must be at least 1".to_string()));
        }
        if self.order < 1 {
            return Err(Error::InvalidParameter(format!(
                "Minkowski order must be at least 1, got {}",
                self.order
            )));
        }
        Ok(())
    }
}
