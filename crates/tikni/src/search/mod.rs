//! k-NN search algorithms over a `RankedIndex`.

use distances::number::Float;
use serde::{Deserialize, Serialize};

use crate::{Metric, RankedIndex, Result};

mod brute_force;
mod candidates;
mod ti_knn;

pub use brute_force::BruteForce;
pub use ti_knn::TiKnn;

/// Common trait for k-NN search algorithms.
///
/// The query must already be in the index. The search never mutates the
/// index.
#[allow(clippy::module_name_repetitions)]
pub trait KnnSearch<I, T: Float, M: Metric<I, T>> {
    /// The name of the search algorithm.
    fn name(&self) -> &str;

    /// The number of neighbors to find.
    fn k(&self) -> usize;

    /// Finds the neighborhood of the record with id `query_id`.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `k` is zero.
    /// * `RecordNotFound` if the query is not in the index.
    /// * Any error from the metric.
    fn search(&self, index: &RankedIndex<I, T>, metric: &M, query_id: i64) -> Result<Neighborhood<T>>;
}

/// A neighbor of a query and its true distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Neighbor<T> {
    /// The id of the neighboring record.
    pub id: i64,
    /// The distance to the query.
    pub distance: T,
}

/// The neighbors of one query, in ascending order of distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighborhood<T> {
    /// The id of the query record.
    pub query_id: i64,
    /// The neighbors.
    pub neighbors: Vec<Neighbor<T>>,
    /// The largest distance among the neighbors.
    pub eps: T,
    /// Distance evaluations made while verifying candidates.
    pub comparisons: usize,
    /// All distance evaluations made by the search.
    pub distance_calls: usize,
}

impl<T: Float> Neighborhood<T> {
    /// The number of neighbors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether there are no neighbors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// The ids of the neighbors, nearest first.
    pub fn ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.neighbors.iter().map(|n| n.id)
    }

    /// The distances of the neighbors, nearest first.
    pub fn distances(&self) -> impl Iterator<Item = T> + '_ {
        self.neighbors.iter().map(|n| n.distance)
    }
}
