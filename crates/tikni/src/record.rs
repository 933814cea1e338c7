//! A feature vector together with its working state in the index.

use distances::number::Float;

/// A record in the ranked index.
///
/// The id and features are fixed at construction. The anchor distance, the
/// epsilon bound and the rank position are working state owned by the index
/// and the search.
#[derive(Debug, Clone, PartialEq)]
pub struct Record<I, T> {
    /// Positive for dataset records, negative for queries.
    id: i64,
    /// The feature vector.
    features: I,
    /// Distance to the current context point.
    distance: T,
    /// Worst distance in the active neighborhood of this record.
    eps: T,
    /// Rank in the index at the last reindex.
    position: usize,
}

impl<I, T: Float> Record<I, T> {
    /// Creates a record with zeroed working state.
    pub fn new(id: i64, features: I) -> Self {
        Self {
            id,
            features,
            distance: T::ZERO,
            eps: T::ZERO,
            position: 0,
        }
    }

    /// Sets the distance to the context point.
    #[must_use]
    pub fn with_distance(mut self, distance: T) -> Self {
        self.distance = distance;
        self
    }

    /// The id of the record.
    pub const fn id(&self) -> i64 {
        self.id
    }

    /// The feature vector of the record.
    pub const fn features(&self) -> &I {
        &self.features
    }

    /// Distance to the current context point.
    pub const fn distance(&self) -> T {
        self.distance
    }

    /// The epsilon bound.
    pub const fn eps(&self) -> T {
        self.eps
    }

    /// Rank in the index.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Sets the distance to the context point.
    pub fn set_distance(&mut self, distance: T) {
        self.distance = distance;
    }

    /// Sets the epsilon bound.
    pub fn set_eps(&mut self, eps: T) {
        self.eps = eps;
    }

    /// Sets the rank in the index.
    pub(crate) fn set_position(&mut self, position: usize) {
        self.position = position;
    }

    /// Consumes the record and returns its features.
    pub fn into_features(self) -> I {
        self.features
    }
}

/// The id of the dataset record loaded from row `row` (0-based).
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn dataset_id(row: usize) -> i64 {
    row as i64 + 1
}

/// The row of the dataset record with the given id, if it is one.
#[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
#[must_use]
pub const fn dataset_row(id: i64) -> Option<usize> {
    if id > 0 {
        Some((id - 1) as usize)
    } else {
        None
    }
}

/// The id of the query loaded from row `row` (0-based).
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub const fn query_id(row: usize) -> i64 {
    -1 - row as i64
}

#[cfg(test)]
mod tests {
    use super::{dataset_id, dataset_row, query_id, Record};

    #[test]
    fn ids() {
        assert_eq!(dataset_id(0), 1);
        assert_eq!(dataset_row(dataset_id(41)), Some(41));
        assert_eq!(query_id(0), -1);
        assert_eq!(query_id(2), -3);
        assert_eq!(dataset_row(query_id(2)), None);
    }

    #[test]
    fn working_state() {
        let mut r = Record::new(5, vec![1.0_f32]).with_distance(2.0);
        assert_eq!(r.distance(), 2.0);
        r.set_eps(0.5);
        r.set_distance(3.0);
        assert_eq!((r.eps(), r.distance(), r.position()), (0.5, 3.0, 0));
        assert_eq!(r.into_features(), vec![1.0]);
    }
}
