//! The Property Store capability.
//!
//! The similarity and explanation engines depend only on this trait, never on
//! how the properties were obtained (cached table or live knowledge graph).

use crate::types::{PropertyLookup, PropertySet};
use data_loader::MovieId;

/// Read access to Item Property Sets.
///
/// ## Design Note
/// - `Send + Sync` so the all-pairs similarity build can read it from
///   worker threads
/// - lookups borrow from the store; no property set is cloned
pub trait PropertyStore: Send + Sync {
    /// Look up a movie's properties, distinguishing unknown movies
    fn lookup(&self, movie_id: MovieId) -> PropertyLookup<'_>;

    /// Display name of a movie
    fn get_name(&self, movie_id: MovieId) -> String;

    /// Number of times `object` appears across all movies and properties
    fn object_count(&self, object: &str) -> usize;

    /// A movie's properties; unknown movies have the empty set
    fn get_properties(&self, movie_id: MovieId) -> &PropertySet {
        self.lookup(movie_id).into_set()
    }

    /// Properties of every listed movie, aligned with `movie_ids`
    fn get_all_properties(&self, movie_ids: &[MovieId]) -> Vec<&PropertySet> {
        movie_ids
            .iter()
            .map(|&movie_id| self.get_properties(movie_id))
            .collect()
    }
}
