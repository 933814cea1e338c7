//! Distance functions for sparse vectors.
//!
//! A sparse vector is a slice of `(index, value)` pairs in strictly ascending
//! order of index. Any index that is absent has the value zero. The functions
//! here walk both slices in a single merge pass, so each call is linear in the
//! total number of stored entries.
//!
//! None of the functions check the ordering of their inputs. Use
//! [`is_strictly_ascending`] when the input has not already been validated.

use crate::number::Float;

/// Returns whether the indices of a sparse vector are strictly ascending.
///
/// # Examples
///
/// ```
/// use distances::sparse::is_strictly_ascending;
///
/// assert!(is_strictly_ascending(&[(0, 1.0_f32), (4, 2.0)]));
/// assert!(!is_strictly_ascending(&[(4, 1.0_f32), (4, 2.0)]));
/// assert!(is_strictly_ascending::<f32>(&[]));
/// ```
pub fn is_strictly_ascending<T>(x: &[(usize, T)]) -> bool {
    x.windows(2).all(|w| w[0].0 < w[1].0)
}

/// Returns the position of the first entry that breaks strict ascending order,
/// if there is one.
pub fn first_unsorted<T>(x: &[(usize, T)]) -> Option<usize> {
    x.windows(2).position(|w| w[0].0 >= w[1].0).map(|i| i + 1)
}

/// The sum of the pth powers of the absolute differences between two sparse
/// vectors.
///
/// An index present in only one vector contributes `|v|^p`. An index present in
/// both contributes `|a - b|^p`. Terms are added in order of increasing index.
///
/// # Examples
///
/// ```
/// use distances::sparse::minkowski_p;
///
/// let x = [(0, 1.0_f64), (2, 3.0)];
/// let y = [(1, 2.0_f64), (2, 1.0)];
///
/// let distance: f64 = minkowski_p(2)(&x, &y);
/// assert!((distance - 9.0).abs() <= 1e-12);
/// ```
pub fn minkowski_p<T: Float>(p: i32) -> impl Fn(&[(usize, T)], &[(usize, T)]) -> T {
    move |x: &[(usize, T)], y: &[(usize, T)]| {
        let mut sum = T::ZERO;
        let (mut i, mut j) = (0, 0);

        while i < x.len() && j < y.len() {
            let (xi, xv) = x[i];
            let (yj, yv) = y[j];
            let term = match xi.cmp(&yj) {
                core::cmp::Ordering::Less => {
                    i += 1;
                    xv.abs()
                }
                core::cmp::Ordering::Greater => {
                    j += 1;
                    yv.abs()
                }
                core::cmp::Ordering::Equal => {
                    i += 1;
                    j += 1;
                    xv.abs_diff(yv)
                }
            };
            sum += term.powi(p);
        }

        x[i..]
            .iter()
            .chain(y[j..].iter())
            .fold(sum, |acc, &(_, v)| acc + v.abs().powi(p))
    }
}

/// General Lp-norm between two sparse vectors.
///
/// # Examples
///
/// ```
/// use distances::sparse::minkowski;
///
/// let x = [(1, 2.0_f32)];
/// let y = [(1, 2.0_f32), (2, 3.0)];
///
/// let distance: f32 = minkowski(1)(&x, &y);
/// assert_eq!(distance, 3.0);
///
/// let empty: [(usize, f32); 0] = [];
/// assert_eq!(minkowski(2)(&empty, &empty), 0.0);
/// ```
pub fn minkowski<T: Float>(p: i32) -> impl Fn(&[(usize, T)], &[(usize, T)]) -> T {
    move |x: &[(usize, T)], y: &[(usize, T)]| minkowski_p::<T>(p)(x, y).root(p)
}
