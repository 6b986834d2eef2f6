//! The item×item similarity matrix.

use crate::error::{Result, SimilarityError};
use data_loader::MovieId;
use std::collections::HashMap;

/// Square similarity matrix labelled by the sorted item-id list.
///
/// Values are stored row-major; row `i` and column `i` both belong to
/// `labels[i]`. The matrix is immutable once built: the engine that
/// produced it hands out shared references only.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    labels: Vec<MovieId>,
    positions: HashMap<MovieId, usize>,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Assemble a matrix from labels and `labels.len()²` row-major values.
    ///
    /// Callers in this crate guarantee the length.
    pub(crate) fn from_parts(labels: Vec<MovieId>, values: Vec<f64>) -> Self {
        debug_assert_eq!(values.len(), labels.len() * labels.len());
        let positions = labels
            .iter()
            .enumerate()
            .map(|(i, &id)| (id, i))
            .collect();
        Self {
            labels,
            positions,
            values,
        }
    }

    /// Assemble a matrix from one row per label.
    ///
    /// Fails if the row or column counts differ from `labels.len()`.
    pub fn from_rows(labels: Vec<MovieId>, rows: Vec<Vec<f64>>) -> Result<Self> {
        let expected = labels.len();
        if rows.len() != expected {
            return Err(SimilarityError::RowCountMismatch {
                expected,
                found: rows.len(),
            });
        }
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(SimilarityError::ColumnCountMismatch {
                expected,
                found: cells.len(),
                row,
            });
        }

        Ok(Self::from_parts(labels, rows.into_iter().flatten().collect()))
    }

    /// Number of items (rows == columns)
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Row/column labels, in sorted id order
    pub fn labels(&self) -> &[MovieId] {
        &self.labels
    }

    pub fn contains(&self, id: MovieId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Similarity of two items; `None` if either is not in the matrix
    pub fn get(&self, a: MovieId, b: MovieId) -> Option<f64> {
        let i = *self.positions.get(&a)?;
        let j = *self.positions.get(&b)?;
        Some(self.values[i * self.len() + j])
    }

    /// Raw values of the row at position `i`
    pub fn row_values(&self, i: usize) -> &[f64] {
        let n = self.len();
        &self.values[i * n..(i + 1) * n]
    }

    /// `(item, similarity)` pairs of an item's row, in label order
    pub fn row(&self, id: MovieId) -> Option<impl Iterator<Item = (MovieId, f64)> + '_> {
        let i = *self.positions.get(&id)?;
        Some(
            self.labels
                .iter()
                .copied()
                .zip(self.row_values(i).iter().copied()),
        )
    }

    /// An item's neighbours sorted by descending similarity.
    ///
    /// The item itself is excluded. Equal similarities keep label order.
    pub fn neighbours(&self, id: MovieId) -> Vec<(MovieId, f64)> {
        let Some(row) = self.row(id) else {
            return Vec::new();
        };
        let mut neighbours: Vec<(MovieId, f64)> =
            row.filter(|&(other, _)| other != id).collect();
        neighbours.sort_by(|a, b| b.1.total_cmp(&a.1));
        neighbours
    }
}
