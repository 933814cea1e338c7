//! Runs queries against a dataset through the ranked index.

use distances::number::Float;

use crate::{
    record::{dataset_id, query_id},
    search::{BruteForce, KnnSearch, Neighborhood, TiKnn},
    Error, ErrorPolicy, Features, Metric, Minkowski, RankedIndex, Record, Result, SearchConfig,
};

/// The outcome of a run over a set of queries.
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport<T> {
    /// Query row and its neighborhood, in query order.
    pub results: Vec<(usize, Neighborhood<T>)>,
    /// Query rows that failed under `ErrorPolicy::Skip`, with their errors.
    pub skipped: Vec<(usize, Error)>,
}

impl<T> Default for RunReport<T> {
    fn default() -> Self {
        Self {
            results: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

impl<T: Float> RunReport<T> {
    /// Verification comparisons summed over all queries.
    #[must_use]
    pub fn total_comparisons(&self) -> usize {
        self.results.iter().map(|(_, h)| h.comparisons).sum()
    }

    /// Distance evaluations summed over all queries.
    #[must_use]
    pub fn total_distance_calls(&self) -> usize {
        self.results.iter().map(|(_, h)| h.distance_calls).sum()
    }
}

/// A dataset ranked by distance to the zero anchor, ready to answer k-NN
/// queries.
///
/// Each query is inserted into the index, searched and removed again before
/// the next one starts, so no query ever sees another.
#[derive(Debug, Clone)]
pub struct NeighborhoodIndex<I, T, M> {
    /// The dataset records.
    index: RankedIndex<I, T>,
    /// The distance function.
    metric: M,
    /// The configuration of every search.
    config: SearchConfig,
    /// The zero vector of the dataset's representation.
    anchor: I,
}

impl<I: Features, T: Float> NeighborhoodIndex<I, T, Minkowski>
where
    Minkowski: Metric<I, T>,
{
    /// Builds the index with the Minkowski distance of the configured order.
    ///
    /// # Errors
    ///
    /// See [`NeighborhoodIndex::new`].
    pub fn with_minkowski(dataset: Vec<I>, config: SearchConfig) -> Result<Self> {
        let metric = Minkowski::new(config.order)?;
        Self::new(dataset, metric, config)
    }
}

impl<I: Features, T: Float, M: Metric<I, T>> NeighborhoodIndex<I, T, M> {
    /// Builds the index.
    ///
    /// Dataset records get ids `1..=n` in input order. Unless the
    /// configuration asks for brute force, each record's distance to the
    /// anchor is computed and the records are ranked by it.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if the configuration is out of range, or if the
    ///   indexed search is asked for with a metric that is not symmetric or
    ///   does not obey the triangle inequality.
    /// * `EmptyDataset` if there are no records.
    /// * Any error from validating a record or from the metric.
    pub fn new(dataset: Vec<I>, metric: M, config: SearchConfig) -> Result<Self> {
        config.validate()?;
        if !config.brute_force && !(metric.has_symmetry() && metric.obeys_triangle_inequality()) {
            return Err(Error::InvalidParameter(format!(
                "{} cannot prune by the triangle inequality; use brute force",
                metric.name()
            )));
        }
        let anchor = dataset.first().ok_or(Error::EmptyDataset)?.origin();

        let records = dataset
            .into_iter()
            .enumerate()
            .map(|(row, features)| {
                features.validate()?;
                let distance = if config.brute_force {
                    T::ZERO
                } else {
                    metric.distance(&features, &anchor)?
                };
                Ok(Record::new(dataset_id(row), features).with_distance(distance))
            })
            .collect::<Result<Vec<_>>>()?;

        ftlog::info!(
            "Indexed {} records with {} (k = {}, brute force = {}).",
            records.len(),
            metric.name(),
            config.k,
            config.brute_force
        );

        Ok(Self {
            index: RankedIndex::new(records),
            metric,
            config,
            anchor,
        })
    }

    /// Finds the neighborhood of one query.
    ///
    /// The query gets the id `-1 - query_number`. The index is left as it was
    /// before the call, whether or not the search succeeds.
    ///
    /// # Errors
    ///
    /// * Any error from validating the query, from the metric or from the
    ///   search.
    pub fn search_one(&mut self, query_number: usize, query: &I) -> Result<Neighborhood<T>> {
        query.validate()?;
        let id = query_id(query_number);
        let distance = if self.config.brute_force {
            T::ZERO
        } else {
            self.metric.distance(query, &self.anchor)?
        };
        self.index
            .insert_and_reindex(Record::new(id, query.clone()).with_distance(distance));

        let hood = if self.config.brute_force {
            BruteForce::new(self.config.k, self.config.tie_inclusive).search(&self.index, &self.metric, id)
        } else {
            TiKnn::new(self.config.k, self.config.tie_inclusive, self.config.heuristic).search(
                &self.index,
                &self.metric,
                id,
            )
        };

        self.index.remove(id)?;
        hood
    }

    /// Finds the neighborhoods of all queries, in order.
    ///
    /// # Errors
    ///
    /// * Under `ErrorPolicy::Abort`, the first error of any query.
    pub fn run(&mut self, queries: &[I]) -> Result<RunReport<T>> {
        ftlog::info!(
            "Searching {} queries among {} records.",
            queries.len(),
            self.index.len()
        );

        let mut report = RunReport::default();
        for (i, query) in queries.iter().enumerate() {
            match self.search_one(i, query) {
                Ok(hood) => {
                    ftlog::debug!(
                        "Query {i}: {} neighbors, {} comparisons, {} distance calls.",
                        hood.len(),
                        hood.comparisons,
                        hood.distance_calls
                    );
                    report.results.push((i, hood));
                }
                Err(e) => match self.config.on_error {
                    ErrorPolicy::Abort => {
                        ftlog::error!("Query {i} failed: {e}");
                        return Err(e);
                    }
                    ErrorPolicy::Skip => {
                        ftlog::warn!("Skipping query {i}: {e}");
                        report.skipped.push((i, e));
                    }
                },
            }
        }

        ftlog::info!(
            "Finished {} queries with {} comparisons; {} skipped.",
            report.results.len(),
            report.total_comparisons(),
            report.skipped.len()
        );
        Ok(report)
    }

    /// The ranked dataset records.
    pub const fn index(&self) -> &RankedIndex<I, T> {
        &self.index
    }

    /// The distance function.
    pub const fn metric(&self) -> &M {
        &self.metric
    }

    /// The configuration.
    pub const fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The anchor every record is ranked against.
    pub const fn anchor(&self) -> &I {
        &self.anchor
    }
}
