//! The `Metric` trait and the Minkowski distances over both representations.

use distances::number::Float;

use crate::{Dense, Error, Result, Sparse};

/// A distance function between two items of type `I`, producing values of
/// type `T`.
///
/// The indexed search skips candidates using `|d(anchor, x) - d(anchor, q)|`
/// as a lower bound on `d(q, x)`, which holds only for symmetric metrics that
/// obey the triangle inequality. Other metrics can only be used with brute
/// force.
pub trait Metric<I, T: Float> {
    /// Computes the distance between `a` and `b`.
    ///
    /// # Errors
    ///
    /// * If `a` and `b` cannot be compared, e.g. dense vectors of different
    ///   lengths.
    fn distance(&self, a: &I, b: &I) -> Result<T>;

    /// The name of the metric.
    fn name(&self) -> String;

    /// Whether `d(a, b) = d(b, a)`.
    fn has_symmetry(&self) -> bool;

    /// Whether `d(a, c) <= d(a, b) + d(b, c)`.
    fn obeys_triangle_inequality(&self) -> bool;
}

/// The Minkowski (Lp-norm) distance of integer order `p >= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minkowski {
    /// The order of the norm.
    order: i32,
}

impl Minkowski {
    /// Creates the metric of the given order.
    ///
    /// # Errors
    ///
    /// * `InvalidParameter` if `order < 1`.
    pub fn new(order: i32) -> Result<Self> {
        if order < 1 {
            Err(Error::InvalidParameter(format!(
                "Minkowski order must be at least 1, got {order}"
            )))
        } else {
            Ok(Self { order })
        }
    }

    /// The order of the norm.
    #[must_use]
    pub const fn order(&self) -> i32 {
        self.order
    }
}

impl<T: Float> Metric<Dense<T>, T> for Minkowski {
    fn distance(&self, a: &Dense<T>, b: &Dense<T>) -> Result<T> {
        if a.len() == b.len() {
            Ok(distances::vectors::minkowski(self.order)(a.as_slice(), b.as_slice()))
        } else {
            Err(Error::DimensionMismatch {
                expected: a.len(),
                found: b.len(),
            })
        }
    }

    fn name(&self) -> String {
        format!("minkowski-{}", self.order)
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn obeys_triangle_inequality(&self) -> bool {
        true
    }
}

impl<T: Float> Metric<Sparse<T>, T> for Minkowski {
    fn distance(&self, a: &Sparse<T>, b: &Sparse<T>) -> Result<T> {
        Ok(distances::sparse::minkowski(self.order)(a.as_slice(), b.as_slice()))
    }

    fn name(&self) -> String {
        format!("minkowski-{}", self.order)
    }

    fn has_symmetry(&self) -> bool {
        true
    }

    fn obeys_triangle_inequality(&self) -> bool {
        true
    }
}
