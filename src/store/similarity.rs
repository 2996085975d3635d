use std::path::Path;

use crate::error::{AppError, AppResult};

/// Precomputed pairwise similarity matrix, read-only after load
///
/// Entry (i, j) is the similarity between catalog rows i and j. The matrix is
/// produced by an offline pipeline; symmetry is expected of that pipeline but
/// not re-checked here. Stored flat, row-major.
#[derive(Debug)]
pub struct SimilarityMatrix {
    scores: Vec<f64>,
    dim: usize,
}

impl SimilarityMatrix {
    /// Load the similarity artifact (JSON array of N rows of N scores)
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| AppError::Load(format!("similarity {}: {}", path.display(), e)))?;

        let rows: Vec<Vec<f64>> = serde_json::from_slice(&bytes)
            .map_err(|e| AppError::Load(format!("similarity {}: {}", path.display(), e)))?;

        let matrix = Self::from_rows(rows)?;

        tracing::info!(
            path = %path.display(),
            dim = matrix.dim,
            "Loaded similarity matrix"
        );

        Ok(matrix)
    }

    /// Build a matrix from rows, rejecting non-square input
    pub fn from_rows(rows: Vec<Vec<f64>>) -> AppResult<Self> {
        let dim = rows.len();
        let mut scores = Vec::with_capacity(dim * dim);

        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != dim {
                return Err(AppError::Load(format!(
                    "similarity matrix is not square: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    dim
                )));
            }
            scores.extend(row);
        }

        Ok(Self { scores, dim })
    }

    /// Full similarity vector for one row, self-similarity included
    pub fn row(&self, index: usize) -> AppResult<&[f64]> {
        if index >= self.dim {
            return Err(AppError::IndexOutOfBounds {
                index,
                len: self.dim,
            });
        }

        let start = index * self.dim;
        Ok(&self.scores[start..start + self.dim])
    }

    /// Number of rows (== columns)
    pub fn dim(&self) -> usize {
        self.dim
    }
}
