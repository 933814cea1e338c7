//! Class labels of the dataset records.

use std::{io::Read, path::Path};

use crate::record::dataset_row;

/// Class labels, one per dataset record in load order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels {
    /// The label of each dataset row.
    labels: Vec<String>,
}

impl Labels {
    /// Wraps labels given in dataset row order.
    #[must_use]
    pub const fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    /// Reads labels from a `.csv` file with a header line.
    ///
    /// Without a column, the first field of each row is the label. Otherwise
    /// `column` is the 1-based column holding it, which lets the labels be
    /// read from the dataset file itself.
    ///
    /// # Errors
    ///
    /// * If the file cannot be opened or read.
    /// * If a row has no field at the label column.
    pub fn read<P: AsRef<Path>>(path: P, column: Option<usize>) -> Result<Self, String> {
        let file = std::fs::File::open(&path).map_err(|e| format!("{:?}: {e}", path.as_ref()))?;
        Self::read_from(file, column)
    }

    /// Reads labels in the format of [`Labels::read`] from any reader.
    ///
    /// # Errors
    ///
    /// See [`Labels::read`].
    pub fn read_from<R: Read>(reader: R, column: Option<usize>) -> Result<Self, String> {
        let index = column.map_or(0, |c| c.saturating_sub(1));
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let labels = reader
            .records()
            .enumerate()
            .map(|(row, record)| {
                let record = record.map_err(|e| e.to_string())?;
                record
                    .get(index)
                    .map(ToString::to_string)
                    .ok_or_else(|| format!("Row {} has no label in column {}", row + 1, index + 1))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { labels })
    }

    /// The label of the dataset record with the given id.
    #[must_use]
    pub fn get(&self, id: i64) -> Option<&str> {
        dataset_row(id)
            .and_then(|row| self.labels.get(row))
            .map(String::as_str)
    }

    /// The number of labels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether there are no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
