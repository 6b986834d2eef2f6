//! Object frequencies over the whole property corpus.
//!
//! Feeds the IDF term of explanation scoring: rare objects carry more
//! information than ones shared by half the catalog.

use crate::types::PropertySet;
use std::collections::HashMap;

/// How often each object occurs across all movies, under any property.
#[derive(Debug, Clone, Default)]
pub struct ObjectCorpus {
    counts: HashMap<String, usize>,
}

impl ObjectCorpus {
    /// Count objects over a collection of property sets
    pub fn from_sets<'a>(sets: impl IntoIterator<Item = &'a PropertySet>) -> Self {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for set in sets {
            for property in set {
                *counts.entry(property.object.clone()).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// Occurrences of `object`; zero when it never appears
    pub fn count(&self, object: &str) -> usize {
        self.counts.get(object).copied().unwrap_or(0)
    }

    /// Number of distinct objects
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
