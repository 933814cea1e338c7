//! k-NN search using a linear scan of the index.

use distances::number::Float;

use crate::{Error, Metric, RankedIndex, Result};

use super::{KnnSearch, Neighbor, Neighborhood};

/// k-NN search by computing the distance from the query to every other
/// record.
///
/// Neighbors at equal distances keep their rank order in the index.
#[derive(Debug, Clone, Copy)]
pub struct BruteForce {
    /// The number of neighbors.
    k: usize,
    /// Whether to keep every record tied with the k-th neighbor.
    tie_inclusive: bool,
}

impl BruteForce {
    /// Creates the search.
    #[must_use]
    pub const fn new(k: usize, tie_inclusive: bool) -> Self {
        Self { k, tie_inclusive }
    }
}

impl<I, T: Float, M: Metric<I, T>> KnnSearch<I, T, M> for BruteForce {
    fn name(&self) -> &str {
        "BruteForce"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn search(&self, index: &RankedIndex<I, T>, metric: &M, query_id: i64) -> Result<Neighborhood<T>> {
        if self.k == 0 {
            return Err(Error::InvalidParameter("k must be at least 1".to_string()));
        }
        let position = index.position_of(query_id)?;
        let query = index.get(position).ok_or(Error::RecordNotFound(query_id))?;

        let mut hits = index
            .records()
            .iter()
            .filter(|r| r.id() != query_id)
            .map(|r| {
                metric
                    .distance(query.features(), r.features())
                    .map(|distance| Neighbor { id: r.id(), distance })
            })
            .collect::<Result<Vec<_>>>()?;
        let comparisons = hits.len();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));

        let mut len = self.k.min(hits.len());
        if self.tie_inclusive && len > 0 {
            let kth = hits[len - 1].distance;
            len += hits[len..].iter().take_while(|n| n.distance == kth).count();
        }
        hits.truncate(len);

        let eps = hits.last().map_or(T::ZERO, |n| n.distance);
        Ok(Neighborhood {
            query_id,
            neighbors: hits,
            eps,
            comparisons,
            distance_calls: comparisons,
        })
    }
}
