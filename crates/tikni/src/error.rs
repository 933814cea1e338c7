//! Errors raised by the neighbor-search core.

use std::fmt;

/// Errors that can occur while building the index or searching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Two dense vectors of different lengths were compared.
    DimensionMismatch {
        /// The length of the first vector.
        expected: usize,
        /// The length of the second vector.
        found: usize,
    },
    /// A sparse vector whose indices are not strictly ascending.
    UnsortedSparseVector {
        /// The first entry that breaks the order.
        position: usize,
    },
    /// No record with this id is in the index.
    RecordNotFound(i64),
    /// A configuration value is out of range.
    InvalidParameter(String),
    /// There are no dataset records to index.
    EmptyDataset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected} features, found {found}")
            }
            Self::UnsortedSparseVector { position } => {
                write!(f, "Sparse vector indices are not strictly ascending at entry {position}")
            }
            Self::RecordNotFound(id) => write!(f, "Record {id} is not in the index"),
            Self::InvalidParameter(msg) => write!(f, "Invalid parameter: {msg}"),
            Self::EmptyDataset => write!(f, "Dataset is empty"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type of the neighbor-search core.
pub type Result<T> = std::result::Result<T, Error>;
