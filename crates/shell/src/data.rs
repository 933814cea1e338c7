//! Input files supported in the CLI.

use std::path::{Path, PathBuf};

use tikni::{
    io::{self, convert, Labels},
    Dense, Sparse,
};

/// The dataset and the queries in the representation the search runs on.
#[derive(Debug, Clone, PartialEq)]
pub enum ShellData {
    /// Dense vectors.
    Dense {
        dataset: Vec<Dense<f32>>,
        queries: Vec<Dense<f32>>,
    },
    /// Sparse vectors.
    Sparse {
        dataset: Vec<Sparse<f32>>,
        queries: Vec<Sparse<f32>>,
    },
}

impl ShellData {
    /// The number of dataset records and the number of queries.
    pub fn sizes(&self) -> (usize, usize) {
        match self {
            Self::Dense { dataset, queries } => (dataset.len(), queries.len()),
            Self::Sparse { dataset, queries } => (dataset.len(), queries.len()),
        }
    }
}

/// Locations of the input files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub dataset: PathBuf,
    pub sample: PathBuf,
    pub decision: PathBuf,
}

impl Paths {
    /// Fills in the default file names of the chosen input format.
    pub fn resolve(dataset: Option<PathBuf>, sample: Option<PathBuf>, decision: Option<PathBuf>, sparse: bool) -> Self {
        let (d, s, c) = if sparse {
            ("cranmed.mat", "cranmedSamples.csv", "cranmed.mat.rclass")
        } else {
            ("dense.csv", "sample.csv", "classes.csv")
        };
        Self {
            dataset: dataset.unwrap_or_else(|| PathBuf::from(d)),
            sample: sample.unwrap_or_else(|| PathBuf::from(s)),
            decision: decision.unwrap_or_else(|| PathBuf::from(c)),
        }
    }
}

/// Reads the dataset, the queries and the labels.
///
/// With a `label_column`, labels come from that column of the dataset file
/// and the column is left out of the features of both files. Otherwise they
/// come from the decision file. With `convert`, the vectors are switched to
/// the other representation after loading.
pub fn load(
    paths: &Paths,
    label_column: Option<usize>,
    sparse: bool,
    convert: bool,
) -> Result<(ShellData, Labels), String> {
    if sparse {
        load_sparse(paths, label_column, convert)
    } else {
        load_dense(paths, label_column, convert)
    }
}

fn load_dense(paths: &Paths, label_column: Option<usize>, convert: bool) -> Result<(ShellData, Labels), String> {
    let dataset = io::read_dense::<f32, _>(&paths.dataset, label_column)?;
    let queries = io::read_dense::<f32, _>(&paths.sample, label_column)?;
    let labels = match label_column {
        Some(_) => Labels::read(&paths.dataset, label_column)?,
        None => read_labels(&paths.decision)?,
    };
    ftlog::info!(
        "Read {} dense records and {} queries from {:?} and {:?}.",
        dataset.len(),
        queries.len(),
        paths.dataset,
        paths.sample
    );

    let data = if convert {
        ShellData::Sparse {
            dataset: convert::sparse_features(convert::to_sparse(&dataset)).map_err(|e| e.to_string())?,
            queries: convert::sparse_features(convert::to_sparse(&queries)).map_err(|e| e.to_string())?,
        }
    } else {
        ShellData::Dense {
            dataset: convert::dense_features(dataset),
            queries: convert::dense_features(queries),
        }
    };
    Ok((data, labels))
}

fn load_sparse(paths: &Paths, label_column: Option<usize>, convert: bool) -> Result<(ShellData, Labels), String> {
    let dataset = io::read_sparse::<f32, _>(&paths.dataset, label_column)?;
    let queries = io::read_sparse::<f32, _>(&paths.sample, label_column)?;
    let labels = match label_column {
        Some(_) => Labels::new(
            dataset
                .labels
                .iter()
                .map(|label| label.clone().unwrap_or_default())
                .collect(),
        ),
        None => read_labels(&paths.decision)?,
    };
    ftlog::info!(
        "Read {} sparse records and {} queries from {:?} and {:?}.",
        dataset.rows.len(),
        queries.rows.len(),
        paths.dataset,
        paths.sample
    );

    let data = if convert {
        let dimension = dataset.max_index.max(queries.max_index) + 1;
        ShellData::Dense {
            dataset: convert::dense_features(convert::to_dense(&dataset.rows, dimension)?),
            queries: convert::dense_features(convert::to_dense(&queries.rows, dimension)?),
        }
    } else {
        ShellData::Sparse {
            dataset: convert::sparse_features(dataset.rows).map_err(|e| e.to_string())?,
            queries: convert::sparse_features(queries.rows).map_err(|e| e.to_string())?,
        }
    };
    Ok((data, labels))
}

/// Reads the decision file, or returns no labels if it does not exist.
fn read_labels(path: &Path) -> Result<Labels, String> {
    if path.exists() {
        Labels::read(path, None)
    } else {
        ftlog::warn!("No labels at {path:?}; neighbors will be reported without classes.");
        Ok(Labels::default())
    }
}
