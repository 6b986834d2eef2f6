//! Error types for the similarity crate.

use thiserror::Error;

/// Errors raised while persisting or reloading a similarity matrix.
///
/// Every corruption variant names the number of item ids the matrix was
/// expected to cover; a persisted matrix is never truncated or padded.
#[derive(Error, Debug)]
pub enum SimilarityError {
    /// I/O error on the matrix file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file has a different number of rows than the catalog has items
    #[error("Similarity matrix has {found} rows, expected {expected} (one per item id)")]
    RowCountMismatch { expected: usize, found: usize },

    /// A row has a different number of cells than the catalog has items
    #[error("Similarity matrix row {row} has {found} cells, expected {expected} (one per item id)")]
    ColumnCountMismatch {
        expected: usize,
        found: usize,
        row: usize,
    },

    /// A cell isn't a number
    #[error("Similarity matrix cell ({row}, {column}) is not numeric: {value:?} (expected {expected}x{expected} matrix)")]
    InvalidCell {
        expected: usize,
        row: usize,
        column: usize,
        value: String,
    },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, SimilarityError>;
