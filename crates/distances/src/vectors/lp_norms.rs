//! Provides functions for calculating Lp-norms between two dense vectors.

use crate::number::Float;

use super::utils::abs_diff_iter;

/// Euclidean distance between two vectors.
///
/// Also known as the L2-norm. This is `minkowski(2)` and is provided for
/// convenience.
///
/// # Examples
///
/// ```
/// use distances::vectors::euclidean;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = euclidean(&x, &y);
///
/// assert!((distance - (27.0_f64).sqrt()).abs() <= 1e-12);
/// ```
pub fn euclidean<T: Float>(x: &[T], y: &[T]) -> T {
    minkowski(2)(x, y)
}

/// Manhattan distance between two vectors.
///
/// Also known as the L1-norm or the taxicab distance, the Manhattan distance is
/// defined as the sum of the absolute differences between the corresponding
/// elements of the two vectors.
///
/// # Examples
///
/// ```
/// use distances::vectors::manhattan;
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = manhattan(&x, &y);
///
/// assert!((distance - 9.0).abs() <= f64::EPSILON);
/// ```
pub fn manhattan<T: Float>(x: &[T], y: &[T]) -> T {
    minkowski(1)(x, y)
}

/// General (Lp-norm)^p between two vectors.
///
/// This is defined as the sum of the pth powers of the absolute differences
/// between the corresponding elements of the two slices. The terms are added
/// in order of increasing position.
///
/// # Examples
///
/// ```
/// use distances::vectors::minkowski_p;
///
/// let metric = minkowski_p(3);
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = metric(&x, &y);
/// assert!((distance - 81.0).abs() <= 1e-12);
/// ```
pub fn minkowski_p<T: Float>(p: i32) -> impl Fn(&[T], &[T]) -> T {
    move |x: &[T], y: &[T]| abs_diff_iter(x, y).fold(T::ZERO, |acc, v| acc + v.powi(p))
}

/// General Lp-norm between two vectors.
///
/// The Lp-norm is defined as the pth root of the sum of the pth powers of
/// the absolute differences between the corresponding elements of the two
/// vectors.
///
/// # Examples
///
/// ```
/// use distances::vectors::minkowski;
///
/// let metric = minkowski(3);
///
/// let x: Vec<f64> = vec![1.0, 2.0, 3.0];
/// let y: Vec<f64> = vec![4.0, 5.0, 6.0];
///
/// let distance: f64 = metric(&x, &y);
/// assert!((distance - (81.0_f64).cbrt()).abs() <= 1e-12);
/// ```
pub fn minkowski<T: Float>(p: i32) -> impl Fn(&[T], &[T]) -> T {
    move |x: &[T], y: &[T]| minkowski_p::<T>(p)(x, y).root(p)
}

#[cfg(test)]
mod tests {
    use super::{euclidean, manhattan, minkowski};

    #[test]
    fn identical_vectors() {
        let x = vec![1.5_f32, -2.0, 7.25];
        assert_eq!(minkowski(1)(&x, &x), 0.0);
        assert_eq!(minkowski(2)(&x, &x), 0.0);
        assert_eq!(minkowski(5)(&x, &x), 0.0);
    }

    #[test]
    fn named_norms() {
        let x = vec![0.0_f64, 0.0];
        let y = vec![3.0_f64, 4.0];
        assert_eq!(euclidean(&x, &y), 5.0);
        assert_eq!(manhattan(&x, &y), 7.0);
    }
}
