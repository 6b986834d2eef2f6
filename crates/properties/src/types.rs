//! Item Property Sets and lookup results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// `foaf:name`, the predicate carrying a movie's display name
pub const NAME_PREDICATE: &str = "http://xmlns.com/foaf/0.1/name";

/// One `(property, object)` pair describing a movie in the knowledge graph.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Property {
    /// Predicate URI, e.g. `http://dbpedia.org/ontology/director`
    pub predicate: String,
    /// Object URI or literal, e.g. `http://dbpedia.org/resource/Michael_Mann`
    pub object: String,
}

impl Property {
    pub fn new(predicate: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// Local name of the predicate (`director`, `subject`, `musicComposer`, ...)
    pub fn local_name(&self) -> &str {
        local_name(&self.predicate)
    }
}

/// Final segment of a URI after the last `/` or `#`
pub fn local_name(uri: &str) -> &str {
    uri.rsplit(['/', '#']).next().unwrap_or(uri)
}

/// Deduplicated, ordered property pairs of one movie.
///
/// A pair appearing twice for the same movie is stored once, so set
/// operations over it count each pair a single time.
pub type PropertySet = BTreeSet<Property>;

/// Shared empty set handed out for movies the store doesn't know.
pub static EMPTY_PROPERTIES: PropertySet = BTreeSet::new();

/// Result of asking the store for a movie's properties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyLookup<'a> {
    Found(&'a PropertySet),
    NotFound,
}

impl<'a> PropertyLookup<'a> {
    /// Degrade `NotFound` to the empty set
    pub fn into_set(self) -> &'a PropertySet {
        match self {
            PropertyLookup::Found(set) => set,
            PropertyLookup::NotFound => &EMPTY_PROPERTIES,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, PropertyLookup::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name() {
        assert_eq!(local_name("http://dbpedia.org/ontology/director"), "director");
        assert_eq!(local_name("http://purl.org/dc/terms/subject"), "subject");
        assert_eq!(local_name("http://www.w3.org/2000/01/rdf-schema#label"), "label");
        assert_eq!(local_name("plain"), "plain");
    }

    #[test]
    fn test_duplicates_collapse() {
        let mut set = PropertySet::new();
        set.insert(Property::new("http://dbpedia.org/ontology/director", "D"));
        set.insert(Property::new("http://dbpedia.org/ontology/director", "D"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_lookup_degrades_to_empty() {
        assert!(PropertyLookup::NotFound.into_set().is_empty());
        assert!(!PropertyLookup::NotFound.is_found());
    }
}
