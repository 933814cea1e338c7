//! Dense and sparse feature vectors.

use core::fmt;

use distances::number::Float;

use crate::{Error, Result};

/// The capabilities the index needs from a feature representation.
pub trait Features: Clone + fmt::Debug {
    /// The zero vector of the same representation, used as the anchor.
    #[must_use]
    fn origin(&self) -> Self;

    /// The number of dimensions spanned by the vector.
    fn dimensionality(&self) -> usize;

    /// Checks the structural invariants of the representation.
    ///
    /// # Errors
    ///
    /// * If the vector is malformed for its representation.
    fn validate(&self) -> Result<()>;
}

/// A dense vector of fixed dimensionality.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dense<T>(Vec<T>);

impl<T: Float> Dense<T> {
    /// Wraps the given values.
    #[must_use]
    pub const fn new(values: Vec<T>) -> Self {
        Self(values)
    }

    /// The values of the vector.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// The number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the vector has no values.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the wrapped values.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Float> From<Vec<T>> for Dense<T> {
    fn from(values: Vec<T>) -> Self {
        Self(values)
    }
}

impl<T: Float> AsRef<[T]> for Dense<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Float> Features for Dense<T> {
    fn origin(&self) -> Self {
        Self(vec![T::ZERO; self.0.len()])
    }

    fn dimensionality(&self) -> usize {
        self.0.len()
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl<T: Float> fmt::Display for Dense<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.0.iter().map(ToString::to_string).collect::<Vec<_>>();
        write!(f, "[{}]", values.join(","))
    }
}

/// A sparse vector of `(index, value)` pairs with strictly ascending indices.
///
/// Absent indices hold zero. The ordering is checked on construction and the
/// pairs cannot be modified afterwards, so the merge-based distance never sees
/// an unsorted vector.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Sparse<T> {
    /// The stored entries.
    pairs: Vec<(usize, T)>,
}

impl<T: Float> Sparse<T> {
    /// Creates a sparse vector from pairs that are already sorted by index.
    ///
    /// # Errors
    ///
    /// * `UnsortedSparseVector` if the indices are not strictly ascending.
    pub fn new(pairs: Vec<(usize, T)>) -> Result<Self> {
        match distances::sparse::first_unsorted(&pairs) {
            Some(position) => Err(Error::UnsortedSparseVector { position }),
            None => Ok(Self { pairs }),
        }
    }

    /// Creates a sparse vector from pairs in any order, sorting them by index.
    ///
    /// # Errors
    ///
    /// * `UnsortedSparseVector` if an index occurs more than once. The
    ///   position refers to the sorted pairs.
    pub fn from_unsorted(mut pairs: Vec<(usize, T)>) -> Result<Self> {
        pairs.sort_by_key(|&(i, _)| i);
        Self::new(pairs)
    }

    /// The stored `(index, value)` pairs.
    #[must_use]
    pub fn as_slice(&self) -> &[(usize, T)] {
        &self.pairs
    }

    /// The number of stored pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// The largest stored index, if any.
    #[must_use]
    pub fn max_index(&self) -> Option<usize> {
        self.pairs.last().map(|&(i, _)| i)
    }
}

impl<T: Float> Features for Sparse<T> {
    fn origin(&self) -> Self {
        Self { pairs: Vec::new() }
    }

    fn dimensionality(&self) -> usize {
        self.max_index().map_or(0, |i| i + 1)
    }

    fn validate(&self) -> Result<()> {
        match distances::sparse::first_unsorted(&self.pairs) {
            Some(position) => Err(Error::UnsortedSparseVector { position }),
            None => Ok(()),
        }
    }
}

impl<T: Float> fmt::Display for Sparse<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(i, v)| format!("({i}: {v})"))
            .collect::<Vec<_>>();
        write!(f, "[{}]", pairs.concat())
    }
}

#[cfg(test)]
mod tests {
    use super::{Dense, Features, Sparse};
    use crate::Error;

    #[test]
    fn dense_origin() {
        let x = Dense::new(vec![1.0_f32, -2.0, 3.5]);
        assert_eq!(x.origin(), Dense::new(vec![0.0; 3]));
        assert_eq!(x.dimensionality(), 3);
        assert_eq!(x.to_string(), "[1,-2,3.5]");
    }

    #[test]
    fn sparse_ordering() {
        assert!(Sparse::new(vec![(1, 2.0_f32), (4, 1.0)]).is_ok());
        assert_eq!(
            Sparse::new(vec![(4, 2.0_f32), (1, 1.0)]),
            Err(Error::UnsortedSparseVector { position: 1 })
        );

        let sorted = Sparse::from_unsorted(vec![(4, 2.0_f32), (1, 1.0)]).unwrap();
        assert_eq!(sorted.as_slice(), &[(1, 1.0), (4, 2.0)]);
        assert_eq!(sorted.dimensionality(), 5);
        assert!(sorted.origin().is_empty());
        assert_eq!(sorted.to_string(), "[(1: 1)(4: 2)]");

        assert_eq!(
            Sparse::from_unsorted(vec![(3, 2.0_f32), (1, 1.0), (3, 5.0)]),
            Err(Error::UnsortedSparseVector { position: 2 })
        );
    }
}
