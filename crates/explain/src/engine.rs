//! Explanation Engine: graph -> scores -> sentence, per recommended movie.

use crate::graph::ExplanationGraph;
use crate::render::{clause, sentence};
use crate::scoring::{ScoredObject, score_objects, select_max};
use data_loader::MovieId;
use properties::PropertyStore;
use tracing::{debug, info, instrument};

/// Explanation of one recommended movie
#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub movie_id: MovieId,
    /// `None` when the movie shares nothing with the profile
    pub sentence: Option<String>,
    /// Objects reaching the maximum score, in rendering order
    pub selected: Vec<ScoredObject>,
}

pub struct ExplanationEngine<'a> {
    store: &'a dyn PropertyStore,
    total_movies: usize,
}

impl<'a> ExplanationEngine<'a> {
    /// `total_movies` is the catalog size used as IDF numerator
    pub fn new(store: &'a dyn PropertyStore, total_movies: usize) -> Self {
        Self {
            store,
            total_movies,
        }
    }

    /// Explain why `recommended` suits a user with the given profile
    pub fn explain(&self, profile: &[MovieId], recommended: MovieId) -> Explanation {
        let graph = ExplanationGraph::build(self.store, profile, recommended);
        let scored = score_objects(&graph, self.store, profile.len(), self.total_movies);
        let selected = select_max(scored);

        if selected.is_empty() {
            debug!("Movie {} shares no property with the profile", recommended);
            return Explanation {
                movie_id: recommended,
                sentence: None,
                selected,
            };
        }

        let clauses: Vec<String> = selected
            .iter()
            .map(|object| {
                let titles: Vec<String> = object
                    .movies
                    .iter()
                    .map(|&movie| self.store.get_name(movie))
                    .collect();
                clause(&object.predicate, &object.object, &titles)
            })
            .collect();

        let text = sentence(&clauses, &self.store.get_name(recommended));
        debug!(
            "Movie {}: {} shared objects, {} selected",
            recommended,
            graph.len(),
            selected.len()
        );

        Explanation {
            movie_id: recommended,
            sentence: Some(text),
            selected,
        }
    }

    /// One explanation per recommended movie, in recommendation order
    #[instrument(skip_all, fields(profile = profile.len(), recommended = recommended.len()))]
    pub fn explain_all(&self, profile: &[MovieId], recommended: &[MovieId]) -> Vec<Explanation> {
        let explanations: Vec<Explanation> = recommended
            .iter()
            .map(|&movie| self.explain(profile, movie))
            .collect();

        let explained = explanations.iter().filter(|e| e.sentence.is_some()).count();
        info!(
            "Explained {}/{} recommendations",
            explained,
            explanations.len()
        );
        explanations
    }
}
