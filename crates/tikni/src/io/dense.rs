//! Dense CSV input.

use std::{io::Read, path::Path};

use distances::number::Float;

/// Reads dense rows from a `.csv` file.
///
/// The first line is a header and is skipped. `label_column` is the 1-based
/// column holding the class label, which is left out of the features.
///
/// # Errors
///
/// * If the file cannot be opened or read.
/// * If a feature field is not a number.
pub fn read_dense<T: Float, P: AsRef<Path>>(path: P, label_column: Option<usize>) -> Result<Vec<Vec<T>>, String> {
    let file = std::fs::File::open(&path).map_err(|e| format!("{:?}: {e}", path.as_ref()))?;
    read_dense_from(file, label_column)
}

/// Reads dense rows in the format of [`read_dense`] from any reader.
///
/// # Errors
///
/// See [`read_dense`].
pub fn read_dense_from<T: Float, R: Read>(reader: R, label_column: Option<usize>) -> Result<Vec<Vec<T>>, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    reader
        .records()
        .enumerate()
        .map(|(row, record)| {
            let record = record.map_err(|e| e.to_string())?;
            record
                .iter()
                .enumerate()
                .filter(|&(i, _)| label_column != Some(i + 1))
                .map(|(i, field)| {
                    field.parse::<T>().map_err(|_| {
                        format!("Could not parse {field:?} at row {}, column {}", row + 1, i + 1)
                    })
                })
                .collect()
        })
        .collect()
}
