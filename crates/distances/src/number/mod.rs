//! The `Number` trait is used to represent numbers of different types.
//!
//! We provide implementations for the following types:
//!
//! * The floating point numbers `f32` and `f64`.
//! * `i32`, the type of the Minkowski order.
//!
//! Only the floating point numbers implement [`Float`], which is what the
//! Minkowski distances are computed in.

mod _number;
mod _variants;

pub use _number::Number;
pub use _variants::Float;
