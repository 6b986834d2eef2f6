//! Cosine similarity over interaction columns.
//!
//! A column holds `1` for every user who interacted with the item. Unknown
//! cells are filled with `0` rather than excluded, so the vectors span all
//! users.

use crate::traits::SimilarityMeasure;
use data_loader::{DataIndex, MovieId, UserId};
use std::collections::BTreeSet;

/// `1 - cosine_distance` of two zero-filled binary columns.
///
/// For binary vectors the dot product is the number of shared users and each
/// norm is the square root of the column's user count. A zero column has an
/// undefined cosine; it scores 0.
pub fn binary_cosine(a: &BTreeSet<UserId>, b: &BTreeSet<UserId>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let dot = a.intersection(b).count() as f64;
    dot / ((a.len() as f64).sqrt() * (b.len() as f64).sqrt())
}

/// Cosine measure reading columns from the User-Item Matrix
pub struct CosineMeasure<'a> {
    index: &'a DataIndex,
}

impl<'a> CosineMeasure<'a> {
    pub fn new(index: &'a DataIndex) -> Self {
        Self { index }
    }
}

impl SimilarityMeasure for CosineMeasure<'_> {
    fn name(&self) -> &str {
        "cosine"
    }

    fn similarity(&self, a: MovieId, b: MovieId) -> f64 {
        match (self.index.users_of(a), self.index.users_of(b)) {
            (Some(col_a), Some(col_b)) => binary_cosine(col_a, col_b),
            _ => 0.0,
        }
    }
}
