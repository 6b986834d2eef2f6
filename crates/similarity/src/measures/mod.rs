//! Similarity measure implementations.

pub mod cosine;
pub mod jaccard;

// Re-export for convenience
pub use cosine::{CosineMeasure, binary_cosine};
pub use jaccard::{JaccardMeasure, jaccard};
