//! A `Number` is a general numeric type.
//!
//! We calculate distances over collections of `Number`s.
//! Distance values are also represented as `Number`s.

use core::{
    fmt::{Debug, Display},
    iter::Sum,
    ops::{Add, AddAssign, Div, Mul, Sub, SubAssign},
    str::FromStr,
};

/// Collections of `Number`s can be used to calculate distances.
pub trait Number:
    Copy
    + PartialOrd
    + Add<Output = Self>
    + AddAssign<Self>
    + Sub<Output = Self>
    + SubAssign<Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Sum<Self>
    + Send
    + Sync
    + Debug
    + Display
    + Default
    + FromStr
{
    /// The additive identity.
    const ZERO: Self;

    /// The multiplicative identity.
    const ONE: Self;

    /// Casts a number to `Self`. This may be a lossy conversion.
    fn from<T: Number>(n: T) -> Self;

    /// Returns the number as a `f64`. This may be a lossy conversion.
    fn as_f64(self) -> f64;

    /// Returns a random `Number`.
    ///
    /// Floats are drawn from `[0, 1)` and integers from their full range.
    fn next_random<R: rand::Rng>(rng: &mut R) -> Self;

    /// Returns a total ordering of the number.
    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering;

    /// Returns the absolute difference between `self` and `other`.
    #[must_use]
    fn abs_diff(self, other: Self) -> Self {
        if self < other {
            other - self
        } else {
            self - other
        }
    }
}

/// Macro to implement `Number` for the floating point types.
macro_rules! impl_number_float {
    ($($ty:ty),*) => {
        $(
            #[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
            impl Number for $ty {
                const ZERO: Self = 0.0;
                const ONE: Self = 1.0;

                fn from<T: Number>(n: T) -> Self {
                    n.as_f64() as $ty
                }

                fn as_f64(self) -> f64 {
                    self as f64
                }

                fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
                    rng.gen()
                }

                fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
                    <$ty>::total_cmp(self, other)
                }
            }
        )*
    }
}

impl_number_float!(f32, f64);

/// `i32` is the type of the Minkowski order, which `Float::root` casts into
/// the float type.
#[allow(clippy::cast_possible_truncation)]
impl Number for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;

    fn from<T: Number>(n: T) -> Self {
        n.as_f64() as Self
    }

    fn as_f64(self) -> f64 {
        <f64 as From<i32>>::from(self)
    }

    fn next_random<R: rand::Rng>(rng: &mut R) -> Self {
        rng.gen()
    }

    fn total_cmp(&self, other: &Self) -> core::cmp::Ordering {
        Ord::cmp(self, other)
    }
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;

    use super::Number;

    #[test]
    fn casts() {
        assert_eq!(<f32 as Number>::from(3_i32), 3.0);
        assert_eq!(<f64 as Number>::from(2.5_f32), 2.5);
        assert_eq!(<i32 as Number>::from(7.9_f64), 7);
    }

    #[test]
    fn ordering() {
        assert_eq!(Number::abs_diff(2.0_f64, 5.0), 3.0);
        assert_eq!(Number::abs_diff(5_i32, 2), 3);
        assert!(Number::total_cmp(&-0.0_f32, &0.0).is_lt());
    }

    #[test]
    fn random_floats_are_unit() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let x = f32::next_random(&mut rng);
            assert!((0.0..1.0).contains(&x));
        }
    }
}
