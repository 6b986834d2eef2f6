//! Core trait for item-item similarity measures.

use data_loader::MovieId;

/// A symmetric similarity between two catalog items.
///
/// ## Design Note
/// - `Send + Sync` so the all-pairs build can evaluate rows on the rayon pool
/// - measures borrow their input (property store or interaction table) and
///   never mutate it
pub trait SimilarityMeasure: Send + Sync {
    /// Returns the name of this measure (for logging)
    fn name(&self) -> &str;

    /// Similarity of `a` and `b`; must equal `similarity(b, a)`
    fn similarity(&self, a: MovieId, b: MovieId) -> f64;
}
