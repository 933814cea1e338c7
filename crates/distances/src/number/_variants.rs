//! Number variants for floats.

use crate::Number;

/// Sub-trait of `Number` for all floating point types.
pub trait Float: Number + core::ops::Neg<Output = Self> {
    /// Returns the absolute value of a `Float`.
    #[must_use]
    fn abs(self) -> Self;

    /// Returns `self` raised to the integer power `n`.
    #[must_use]
    fn powi(self, n: i32) -> Self;

    /// Returns `self` raised to the power of `exp`.
    #[must_use]
    fn powf(self, exp: Self) -> Self;

    /// Returns the square root of a `Float`.
    #[must_use]
    fn sqrt(self) -> Self;

    /// Returns the `p`-th root of `self`, i.e. `self^(1/p)`.
    ///
    /// Order 1 returns `self` unchanged and order 2 uses `sqrt`.
    #[must_use]
    fn root(self, p: i32) -> Self {
        match p {
            1 => self,
            2 => self.sqrt(),
            _ => self.powf(Self::ONE / <Self as Number>::from(p)),
        }
    }
}

/// Macro to implement `Float` for the floating point types.
macro_rules! impl_float {
    ($($ty:ty),*) => {
        $(
            impl Float for $ty {
                fn abs(self) -> Self {
                    <$ty>::abs(self)
                }

                fn powi(self, n: i32) -> Self {
                    <$ty>::powi(self, n)
                }

                fn powf(self, exp: Self) -> Self {
                    <$ty>::powf(self, exp)
                }

                fn sqrt(self) -> Self {
                    <$ty>::sqrt(self)
                }
            }
        )*
    }
}

impl_float!(f32, f64);
