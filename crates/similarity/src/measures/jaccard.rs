//! Jaccard similarity over knowledge-graph property sets.

use crate::traits::SimilarityMeasure;
use data_loader::MovieId;
use properties::{PropertySet, PropertyStore};

/// |A ∩ B| / |A ∪ B| of two property sets.
///
/// Two empty sets have an empty union; their similarity is 0.
pub fn jaccard(a: &PropertySet, b: &PropertySet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        0.0
    } else {
        intersection as f64 / union as f64
    }
}

/// Jaccard measure reading property sets from a store.
///
/// An item compared with itself is 1 by definition, even when it has no
/// properties. Movies missing from the store compare as empty sets.
pub struct JaccardMeasure<'a> {
    store: &'a dyn PropertyStore,
}

impl<'a> JaccardMeasure<'a> {
    pub fn new(store: &'a dyn PropertyStore) -> Self {
        Self { store }
    }
}

impl SimilarityMeasure for JaccardMeasure<'_> {
    fn name(&self) -> &str {
        "jaccard"
    }

    fn similarity(&self, a: MovieId, b: MovieId) -> f64 {
        if a == b {
            return 1.0;
        }
        jaccard(self.store.get_properties(a), self.store.get_properties(b))
    }
}
