//! Records kept in ascending order of their distance to the anchor.

use distances::number::Float;

use crate::{Error, Record, Result};

/// A sequence of records sorted by anchor distance, with rank-based
/// adjacency.
///
/// After every `reindex` the position of each record equals its index in the
/// sequence. Records with equal anchor distances keep their relative order
/// from before the sort.
#[derive(Debug, Clone)]
pub struct RankedIndex<I, T> {
    /// The records, sorted after every reindex.
    records: Vec<Record<I, T>>,
}

impl<I, T: Float> RankedIndex<I, T> {
    /// Builds the index from records whose anchor distances are already set.
    pub fn new(records: Vec<Record<I, T>>) -> Self {
        let mut index = Self { records };
        index.reindex();
        index
    }

    /// Sorts the records by anchor distance and renumbers their positions.
    pub fn reindex(&mut self) {
        self.records.sort_by(|a, b| a.distance().total_cmp(&b.distance()));
        self.renumber(0);
    }

    /// Adds a record and reindexes.
    pub fn insert_and_reindex(&mut self, record: Record<I, T>) {
        self.records.push(record);
        self.reindex();
    }

    /// Removes the record with the given id and returns it.
    ///
    /// The records after it move up one rank, so the index stays consistent
    /// without another sort.
    ///
    /// # Errors
    ///
    /// * `RecordNotFound` if no record has this id.
    pub fn remove(&mut self, id: i64) -> Result<Record<I, T>> {
        let i = self.position_of(id)?;
        let record = self.records.remove(i);
        self.renumber(i);
        Ok(record)
    }

    /// The record ranked immediately before `record`, if any.
    pub fn predecessor(&self, record: &Record<I, T>) -> Option<&Record<I, T>> {
        record.position().checked_sub(1).and_then(|i| self.records.get(i))
    }

    /// The record ranked immediately after `record`, if any.
    pub fn successor(&self, record: &Record<I, T>) -> Option<&Record<I, T>> {
        self.records.get(record.position() + 1)
    }

    /// The record at the given rank.
    pub fn get(&self, position: usize) -> Option<&Record<I, T>> {
        self.records.get(position)
    }

    /// The rank of the record with the given id.
    ///
    /// # Errors
    ///
    /// * `RecordNotFound` if no record has this id.
    pub fn position_of(&self, id: i64) -> Result<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or(Error::RecordNotFound(id))
    }

    /// The number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the index holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records in rank order.
    pub fn records(&self) -> &[Record<I, T>] {
        &self.records
    }

    /// Assigns `position = i` to every record from rank `start` onwards.
    fn renumber(&mut self, start: usize) {
        self.records
            .iter_mut()
            .enumerate()
            .skip(start)
            .for_each(|(i, r)| r.set_position(i));
    }
}

#[cfg(test)]
mod tests {
    use super::RankedIndex;
    use crate::{Error, Record};

    fn index() -> RankedIndex<(), f32> {
        let records = [(1, 3.0), (2, 1.0), (3, 2.0), (4, 1.0)]
            .into_iter()
            .map(|(id, d)| Record::new(id, ()).with_distance(d))
            .collect();
        RankedIndex::new(records)
    }

    fn ids(index: &RankedIndex<(), f32>) -> Vec<i64> {
        index.records().iter().map(Record::id).collect()
    }

    #[test]
    fn sorted_and_numbered() {
        let index = index();
        assert_eq!(ids(&index), vec![2, 4, 3, 1]);
        for (i, r) in index.records().iter().enumerate() {
            assert_eq!(r.position(), i);
        }
    }

    #[test]
    fn adjacency() {
        let index = index();
        let first = index.get(0).unwrap();
        let last = index.get(3).unwrap();
        assert!(index.predecessor(first).is_none());
        assert!(index.successor(last).is_none());
        assert_eq!(index.successor(first).map(Record::id), Some(4));
        assert_eq!(index.predecessor(last).map(Record::id), Some(3));
    }

    #[test]
    fn insert_then_remove() {
        let mut index = index();
        index.insert_and_reindex(Record::new(-1, ()).with_distance(1.5));
        assert_eq!(ids(&index), vec![2, 4, -1, 3, 1]);
        assert_eq!(index.position_of(-1), Ok(2));

        let removed = index.remove(-1).unwrap();
        assert_eq!(removed.id(), -1);
        assert_eq!(ids(&index), vec![2, 4, 3, 1]);
        for (i, r) in index.records().iter().enumerate() {
            assert_eq!(r.position(), i);
        }

        assert_eq!(index.remove(-1).map(|r| r.id()), Err(Error::RecordNotFound(-1)));
    }
}
