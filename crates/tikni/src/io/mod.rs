//! Loading datasets, queries and labels from files, and converting between
//! the dense and sparse representations.
//!
//! These functions report failures as `String`s, since they only ever end up
//! in front of a user.

pub mod convert;
mod dense;
mod labels;
mod sparse;

pub use dense::{read_dense, read_dense_from};
pub use labels::Labels;
pub use sparse::{read_sparse, read_sparse_from, SparseRows};
