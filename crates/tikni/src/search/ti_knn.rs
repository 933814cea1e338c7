//! k-NN search with the TI-k-Neighborhood-Index.
//!
//! Records are ranked by their distance to a fixed anchor. By the triangle
//! inequality, `|d(anchor, x) - d(anchor, q)|` is a lower bound on `d(x, q)`,
//! so walking outward from the query's rank can stop in each direction as
//! soon as that gap exceeds the current k-th neighbor distance.

use distances::number::Float;

use crate::{Error, Heuristic, Metric, RankedIndex, Record, Result};

use super::{candidates::Candidates, KnnSearch, Neighborhood};

/// A walking direction through the ranked index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    /// Towards smaller anchor distances.
    Backward,
    /// Towards larger anchor distances.
    Forward,
}

impl Heuristic {
    /// Picks the side to take the next candidate from when both sides are
    /// available.
    ///
    /// `Backward` takes the smaller gap, preferring forward on ties.
    /// `Forward` takes the larger gap, preferring backward on ties.
    fn choose<T: Float>(self, back_gap: T, fwd_gap: T) -> Direction {
        match (self, back_gap < fwd_gap) {
            (Self::Backward, true) | (Self::Forward, false) => Direction::Backward,
            (Self::Backward, false) | (Self::Forward, true) => Direction::Forward,
        }
    }

    /// The order in which the two directions are verified.
    const fn order(self) -> [Direction; 2] {
        match self {
            Self::Backward => [Direction::Backward, Direction::Forward],
            Self::Forward => [Direction::Forward, Direction::Backward],
        }
    }
}

/// k-NN search with triangle-inequality pruning over a `RankedIndex`.
#[derive(Debug, Clone, Copy)]
pub struct TiKnn {
    /// The number of neighbors.
    k: usize,
    /// Whether to keep every record tied with the k-th neighbor.
    tie_inclusive: bool,
    /// The order of directions during discovery and verification.
    heuristic: Heuristic,
}

impl TiKnn {
    /// Creates the search.
    #[must_use]
    pub const fn new(k: usize, tie_inclusive: bool, heuristic: Heuristic) -> Self {
        Self {
            k,
            tie_inclusive,
            heuristic,
        }
    }

    /// Folds one verified candidate at distance `d` into the neighborhood.
    ///
    /// Returns the new epsilon bound.
    fn verify<T: Float>(&self, hood: &mut Candidates<T>, eps: T, id: i64, d: T) -> T {
        if d < eps {
            let boundary = hood.count_at(eps);
            if hood.len() - boundary >= self.k - 1 {
                hood.evict_at(eps);
                hood.insert(id, d);
                return hood.max();
            }
            hood.insert(id, d);
            if !self.tie_inclusive && hood.len() > self.k {
                hood.pop();
            }
        } else if d == eps && (self.tie_inclusive || hood.len() < self.k) {
            hood.insert(id, d);
        }
        eps
    }
}

/// Gap in anchor distance between the query and a candidate on the given
/// side.
fn gap<I, T: Float>(direction: Direction, query: &Record<I, T>, candidate: &Record<I, T>) -> T {
    match direction {
        Direction::Backward => query.distance() - candidate.distance(),
        Direction::Forward => candidate.distance() - query.distance(),
    }
}

/// The next record on the given side of `record`.
fn step<'a, I, T: Float>(
    index: &'a RankedIndex<I, T>,
    direction: Direction,
    record: &Record<I, T>,
) -> Option<&'a Record<I, T>> {
    match direction {
        Direction::Backward => index.predecessor(record),
        Direction::Forward => index.successor(record),
    }
}

impl<I: Clone, T: Float, M: Metric<I, T>> KnnSearch<I, T, M> for TiKnn {
    fn name(&self) -> &str {
        "TiKnn"
    }

    fn k(&self) -> usize {
        self.k
    }

    fn search(&self, index: &RankedIndex<I, T>, metric: &M, query_id: i64) -> Result<Neighborhood<T>> {
        if self.k == 0 {
            return Err(Error::InvalidParameter("k must be at least 1".to_string()));
        }
        let position = index.position_of(query_id)?;
        let mut query = index
            .get(position)
            .cloned()
            .ok_or(Error::RecordNotFound(query_id))?;

        let mut hood = Candidates::with_capacity(self.k + 1);
        let mut distance_calls = 0;
        let mut back = index.predecessor(&query);
        let mut fwd = index.successor(&query);

        // Discovery: take the first k candidates around the query.
        let mut discovered = 0;
        while discovered < self.k {
            let direction = match (back, fwd) {
                (None, None) => break,
                (Some(_), None) => Direction::Backward,
                (None, Some(_)) => Direction::Forward,
                (Some(b), Some(f)) => self
                    .heuristic
                    .choose(gap(Direction::Backward, &query, b), gap(Direction::Forward, &query, f)),
            };
            let cursor = match direction {
                Direction::Backward => &mut back,
                Direction::Forward => &mut fwd,
            };
            if let Some(c) = *cursor {
                let d = metric.distance(query.features(), c.features())?;
                distance_calls += 1;
                hood.insert(c.id(), d);
                *cursor = step(index, direction, c);
                discovered += 1;
            }
        }
        query.set_eps(hood.max());

        // Verification: nothing whose anchor gap exceeds eps can be closer.
        let mut comparisons = 0;
        for direction in self.heuristic.order() {
            let cursor = match direction {
                Direction::Backward => &mut back,
                Direction::Forward => &mut fwd,
            };
            while let Some(c) = *cursor {
                if gap(direction, &query, c) > query.eps() {
                    break;
                }
                comparisons += 1;
                let d = metric.distance(query.features(), c.features())?;
                distance_calls += 1;
                let eps = self.verify(&mut hood, query.eps(), c.id(), d);
                query.set_eps(eps);
                *cursor = step(index, direction, c);
            }
        }

        ftlog::trace!(
            "Query {query_id}: {} neighbors within {} after {comparisons} comparisons.",
            hood.len(),
            query.eps()
        );

        Ok(Neighborhood {
            query_id,
            neighbors: hood.into_vec(),
            eps: query.eps(),
            comparisons,
            distance_calls,
        })
    }
}
