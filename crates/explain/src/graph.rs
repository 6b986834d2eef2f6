//! The Explanation Graph of one recommended movie.

use data_loader::MovieId;
use properties::PropertyStore;
use std::collections::BTreeMap;

/// A profile movie connected to the recommendation through one property
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub profile_movie: MovieId,
    pub predicate: String,
}

/// Shared objects -> the profile movies (and properties) that share them.
///
/// Built fresh per explanation. Objects are kept in sorted order so that
/// everything downstream is deterministic.
#[derive(Debug, Clone, Default)]
pub struct ExplanationGraph {
    edges: BTreeMap<String, Vec<Edge>>,
}

impl ExplanationGraph {
    /// Intersect the Item Property Set of `recommended` with that of every
    /// profile movie. A profile movie missing from the store contributes
    /// nothing.
    pub fn build(store: &dyn PropertyStore, profile: &[MovieId], recommended: MovieId) -> Self {
        let target = store.get_properties(recommended);
        let mut edges: BTreeMap<String, Vec<Edge>> = BTreeMap::new();

        if !target.is_empty() {
            for &profile_movie in profile {
                for shared in store.get_properties(profile_movie).intersection(target) {
                    edges.entry(shared.object.clone()).or_default().push(Edge {
                        profile_movie,
                        predicate: shared.predicate.clone(),
                    });
                }
            }
        }

        Self { edges }
    }

    /// Number of distinct shared objects
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Edges under `object`, in profile order
    pub fn edges(&self, object: &str) -> &[Edge] {
        self.edges.get(object).map(Vec::as_slice).unwrap_or(&[])
    }

    /// `(object, edges)` in ascending object order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Edge])> {
        self.edges.iter().map(|(obj, edges)| (obj.as_str(), edges.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use properties::{Property, PropertyTable};

    const DIRECTOR: &str = "http://dbpedia.org/ontology/director";
    const PRODUCER: &str = "http://dbpedia.org/ontology/producer";
    const STARRING: &str = "http://dbpedia.org/ontology/starring";

    fn table() -> PropertyTable {
        PropertyTable::from_rows(
            &[],
            vec![
                (1, Property::new(DIRECTOR, "res:Nolan")),
                (1, Property::new(STARRING, "res:Caine")),
                (2, Property::new(DIRECTOR, "res:Nolan")),
                (2, Property::new(PRODUCER, "res:Nolan")),
                (3, Property::new(STARRING, "res:Pacino")),
                (5, Property::new(DIRECTOR, "res:Nolan")),
                (5, Property::new(PRODUCER, "res:Nolan")),
                (5, Property::new(STARRING, "res:Caine")),
            ],
        )
    }

    #[test]
    fn test_shared_objects() {
        let table = table();
        let graph = ExplanationGraph::build(&table, &[1, 2, 3], 5);

        assert_eq!(graph.len(), 2);
        let nolan = graph.edges("res:Nolan");
        // Movie 2 shares Nolan twice, once per property
        assert_eq!(nolan.len(), 3);
        assert_eq!(nolan[0].profile_movie, 1);
        assert_eq!(nolan[1].predicate, DIRECTOR);
        assert_eq!(nolan[2].predicate, PRODUCER);
        assert_eq!(graph.edges("res:Caine").len(), 1);
        assert!(graph.edges("res:Pacino").is_empty());
    }

    #[test]
    fn test_missing_movies_yield_empty_graph() {
        let table = table();
        assert!(ExplanationGraph::build(&table, &[1, 2], 42).is_empty());
        assert!(ExplanationGraph::build(&table, &[42], 5).is_empty());
        assert!(ExplanationGraph::build(&table, &[], 5).is_empty());
    }
}
