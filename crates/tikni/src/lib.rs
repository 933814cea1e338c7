#![deny(clippy::correctness)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::cast_lossless
)]
#![doc = include_str!("../README.md")]

mod builder;
mod config;
mod error;
mod features;
mod metric;
mod ranked_index;
mod record;

pub mod classify;
pub mod io;
pub mod search;

pub use builder::{NeighborhoodIndex, RunReport};
pub use config::{ErrorPolicy, Heuristic, SearchConfig};
pub use error::{Error, Result};
pub use features::{Dense, Features, Sparse};
pub use metric::{Metric, Minkowski};
pub use ranked_index::RankedIndex;
pub use record::{dataset_id, dataset_row, query_id, Record};
pub use search::{Neighbor, Neighborhood};

/// The current version of the crate.
pub const VERSION: &str = "0.1.0";
