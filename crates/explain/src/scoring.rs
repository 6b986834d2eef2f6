//! IDF-weighted scoring of shared objects.
//!
//! `score = (ncip / profile_size) * ln(total_movies / global_count)` where
//! `ncip` is the number of edges under the object in the Explanation Graph
//! and `global_count` its number of occurrences in the whole corpus.

use crate::graph::ExplanationGraph;
use data_loader::MovieId;
use properties::PropertyStore;

/// One row of the Property Score Table
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredObject {
    pub object: String,
    /// Property of the object's first edge
    pub predicate: String,
    /// Number of edges under the object
    pub ncip: usize,
    pub score: f64,
    /// Distinct connected profile movies, in profile order
    pub movies: Vec<MovieId>,
}

/// `ln(total_movies / global_count)`; 0 when either count is 0
pub fn idf(total_movies: usize, global_count: usize) -> f64 {
    if total_movies == 0 || global_count == 0 {
        return 0.0;
    }
    (total_movies as f64 / global_count as f64).ln()
}

/// Score of one shared object; 0 for an empty profile
pub fn property_score(
    ncip: usize,
    profile_size: usize,
    global_count: usize,
    total_movies: usize,
) -> f64 {
    if profile_size == 0 {
        return 0.0;
    }
    (ncip as f64 / profile_size as f64) * idf(total_movies, global_count)
}

/// Score every object of `graph`, best first (ties by object)
pub fn score_objects(
    graph: &ExplanationGraph,
    store: &dyn PropertyStore,
    profile_size: usize,
    total_movies: usize,
) -> Vec<ScoredObject> {
    let mut scored: Vec<ScoredObject> = graph
        .iter()
        .filter_map(|(object, edges)| {
            let first = edges.first()?;
            let mut movies: Vec<MovieId> = Vec::with_capacity(edges.len());
            for edge in edges {
                if !movies.contains(&edge.profile_movie) {
                    movies.push(edge.profile_movie);
                }
            }

            let ncip = edges.len();
            let global_count = store.object_count(object);
            Some(ScoredObject {
                object: object.to_string(),
                predicate: first.predicate.clone(),
                ncip,
                score: property_score(ncip, profile_size, global_count, total_movies),
                movies,
            })
        })
        .collect();

    // Objects arrive sorted, the stable sort keeps that order within a score
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored
}

/// Keep every object reaching the maximum score
pub fn select_max(scored: Vec<ScoredObject>) -> Vec<ScoredObject> {
    let Some(max) = scored.iter().map(|s| s.score).max_by(f64::total_cmp) else {
        return Vec::new();
    };
    scored.into_iter().filter(|s| s.score == max).collect()
}
