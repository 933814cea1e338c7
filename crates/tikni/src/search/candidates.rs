//! The sorted list of candidate neighbors built up during a search.

use distances::number::Float;

use super::Neighbor;

/// Candidates in ascending order of distance.
///
/// A new candidate goes before the first entry that is strictly further away,
/// so it lands after any entries at the same distance.
#[derive(Debug)]
pub struct Candidates<T> {
    /// The candidates, nearest first.
    items: Vec<Neighbor<T>>,
}

impl<T: Float> Candidates<T> {
    /// An empty list with room for `capacity` candidates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Inserts a candidate, keeping the list sorted.
    pub fn insert(&mut self, id: i64, distance: T) {
        let at = self
            .items
            .iter()
            .position(|n| distance < n.distance)
            .unwrap_or(self.items.len());
        self.items.insert(at, Neighbor { id, distance });
    }

    /// The number of candidates.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The largest distance, or zero when empty.
    pub fn max(&self) -> T {
        self.items.last().map_or(T::ZERO, |n| n.distance)
    }

    /// The number of candidates at exactly `eps`.
    pub fn count_at(&self, eps: T) -> usize {
        self.items.iter().filter(|n| n.distance == eps).count()
    }

    /// Removes every candidate at exactly `eps`.
    pub fn evict_at(&mut self, eps: T) {
        self.items.retain(|n| n.distance != eps);
    }

    /// Removes the furthest candidate.
    pub fn pop(&mut self) {
        self.items.pop();
    }

    /// Returns the candidates, nearest first.
    pub fn into_vec(self) -> Vec<Neighbor<T>> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::Candidates;

    #[test]
    fn insertion_order() {
        let mut c = Candidates::with_capacity(4);
        c.insert(1, 2.0_f32);
        c.insert(2, 1.0);
        c.insert(3, 2.0);
        c.insert(4, 0.5);

        let ids = c.into_vec().into_iter().map(|n| n.id).collect::<Vec<_>>();
        assert_eq!(ids, vec![4, 2, 1, 3]);
    }

    #[test]
    fn boundary() {
        let mut c = Candidates::with_capacity(4);
        assert_eq!(c.max(), 0.0);
        for (id, d) in [(1, 1.0_f64), (2, 3.0), (3, 3.0)] {
            c.insert(id, d);
        }
        assert_eq!(c.max(), 3.0);
        assert_eq!(c.count_at(3.0), 2);

        c.evict_at(3.0);
        assert_eq!(c.len(), 1);
        assert_eq!(c.max(), 1.0);

        c.pop();
        assert_eq!(c.len(), 0);
    }
}
