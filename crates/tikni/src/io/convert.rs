//! Conversion between dense and sparse rows, and wrapping rows as features.

use distances::number::Float;

use crate::{Dense, Result, Sparse};

/// Converts dense rows to sparse rows.
///
/// The value at position `i` gets index `i + 1`. Zeros are left out.
#[must_use]
pub fn to_sparse<T: Float>(rows: &[Vec<T>]) -> Vec<Vec<(usize, T)>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != T::ZERO)
                .map(|(i, &v)| (i + 1, v))
                .collect()
        })
        .collect()
}

/// Converts sparse rows to dense rows of length `dimension`.
///
/// The value at index `j` goes to position `j`, so `dimension` must be larger
/// than every index, e.g. `max_index + 1`.
///
/// # Errors
///
/// * If an index is not less than `dimension`.
pub fn to_dense<T: Float>(rows: &[Vec<(usize, T)>], dimension: usize) -> std::result::Result<Vec<Vec<T>>, String> {
    rows.iter()
        .enumerate()
        .map(|(r, row)| {
            let mut dense = vec![T::ZERO; dimension];
            for &(j, v) in row {
                let slot = dense
                    .get_mut(j)
                    .ok_or_else(|| format!("Index {j} in row {} does not fit in {dimension} dimensions", r + 1))?;
                *slot = v;
            }
            Ok(dense)
        })
        .collect()
}

/// Wraps dense rows as features.
#[must_use]
pub fn dense_features<T: Float>(rows: Vec<Vec<T>>) -> Vec<Dense<T>> {
    rows.into_iter().map(Dense::new).collect()
}

/// Wraps sparse rows as features, sorting each by index.
///
/// # Errors
///
/// * `UnsortedSparseVector` if a row repeats an index.
pub fn sparse_features<T: Float>(rows: Vec<Vec<(usize, T)>>) -> Result<Vec<Sparse<T>>> {
    rows.into_iter().map(Sparse::from_unsorted).collect()
}

#[cfg(test)]
mod tests {
    use super::{sparse_features, to_dense, to_sparse};

    #[test]
    fn there_and_back() -> Result<(), String> {
        let dense = vec![vec![0.0_f32, 2.0, 0.0, 3.0], vec![0.0; 4]];
        let sparse = to_sparse(&dense);
        assert_eq!(sparse, vec![vec![(2, 2.0), (4, 3.0)], vec![]]);

        let back = to_dense(&sparse, 5)?;
        assert_eq!(back, vec![vec![0.0, 0.0, 2.0, 0.0, 3.0], vec![0.0; 5]]);

        assert!(to_dense(&sparse, 4).is_err());
        Ok(())
    }

    #[test]
    fn duplicate_indices() {
        assert!(sparse_features(vec![vec![(3, 1.0_f32), (1, 2.0)]]).is_ok());
        assert!(sparse_features(vec![vec![(3, 1.0_f32), (3, 2.0)]]).is_err());
    }
}
