//! Sparse text input.

use std::{
    io::{BufRead, BufReader, Read},
    path::Path,
};

use distances::number::Float;

/// Rows of `(index, value)` pairs read from a sparse file.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseRows<T> {
    /// The pairs of each row, sorted by index.
    pub rows: Vec<Vec<(usize, T)>>,
    /// The largest index seen in the file, including the label column.
    pub max_index: usize,
    /// The raw value at the label column of each row, if a label column was
    /// given and the row has it.
    pub labels: Vec<Option<String>>,
}

/// Reads sparse rows from a file.
///
/// The first line is a header and is skipped. Every other non-blank line is a
/// whitespace-separated list of `index value` pairs. A pair whose index equals
/// `label_column` is taken as the row's label instead of a feature.
///
/// # Errors
///
/// * If the file cannot be opened or read.
/// * If a line has an odd number of tokens.
/// * If an index or value is not a number.
pub fn read_sparse<T: Float, P: AsRef<Path>>(path: P, label_column: Option<usize>) -> Result<SparseRows<T>, String> {
    let file = std::fs::File::open(&path).map_err(|e| format!("{:?}: {e}", path.as_ref()))?;
    read_sparse_from(file, label_column)
}

/// Reads sparse rows in the format of [`read_sparse`] from any reader.
///
/// # Errors
///
/// See [`read_sparse`].
pub fn read_sparse_from<T: Float, R: Read>(reader: R, label_column: Option<usize>) -> Result<SparseRows<T>, String> {
    let mut data = SparseRows {
        rows: Vec::new(),
        max_index: 0,
        labels: Vec::new(),
    };

    for (n, line) in BufReader::new(reader).lines().enumerate().skip(1) {
        let line = line.map_err(|e| e.to_string())?;
        let tokens = line.split_whitespace().collect::<Vec<_>>();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() % 2 != 0 {
            return Err(format!("Line {} has an unpaired index or value", n + 1));
        }

        let mut row = Vec::with_capacity(tokens.len() / 2);
        let mut label = None;
        for pair in tokens.chunks_exact(2) {
            let index = pair[0]
                .parse::<usize>()
                .map_err(|_| format!("Could not parse index {:?} on line {}", pair[0], n + 1))?;
            data.max_index = data.max_index.max(index);

            if label_column == Some(index) {
                label = Some(pair[1].to_string());
                continue;
            }
            let value = pair[1]
                .parse::<T>()
                .map_err(|_| format!("Could not parse value {:?} on line {}", pair[1], n + 1))?;
            row.push((index, value));
        }
        row.sort_by_key(|&(i, _)| i);

        data.rows.push(row);
        data.labels.push(label);
    }

    Ok(data)
}
