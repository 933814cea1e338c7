//! Distance functions for dense vectors.
//!
//! # Potentially unexpected behaviors
//! Computing these distances with vectors of differing or zero
//! dimensionality may give unexpected results. Specifically, when one vector is
//! shorter than the other, elements in the longer vector past the end of the
//! shorter vector will be ignored. Callers that need a hard failure must compare
//! the lengths first.

mod lp_norms;
pub(crate) mod utils;

pub use lp_norms::{euclidean, manhattan, minkowski, minkowski_p};
