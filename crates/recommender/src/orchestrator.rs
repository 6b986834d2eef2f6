//! # Recommendation Orchestrator
//!
//! Coordinates one recommendation run:
//! 1. Load (or fetch) the Item Property Sets; runs that don't need them
//!    still read the cache for titles
//! 2. Build or reload the similarity matrix of the configured mode
//! 3. Per request: derive the profile, predict every unknown item
//! 4. Select the top N
//! 5. Optionally explain each recommendation
//!
//! Steps 1 and 2 happen once in the constructor; the engine is then
//! read-only and can serve any number of users.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use data_loader::{DataIndex, MovieId, MovieLink, UserId};
use explain::ExplanationEngine;
use properties::{PropertySource, PropertyStore, PropertyTable, SparqlClient};
use similarity::{SimilarityEngine, SimilarityInput, SimilarityMatrix, SimilarityMode};

use crate::config::EngineConfig;
use crate::predictor::{Predictor, top_n};
use crate::profile::Profile;

/// Final recommendation returned to the user
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecommendation {
    pub movie_id: MovieId,
    pub title: String,
    pub score: f64,
    pub explanation: Option<String>,
}

pub struct RecommendationEngine {
    data_index: Arc<DataIndex>,
    config: EngineConfig,
    predictor: Predictor,
    /// Full property table, or whatever titles are available when the run
    /// doesn't need properties
    properties: PropertyTable,
    matrix: SimilarityMatrix,
}

impl RecommendationEngine {
    /// Create an engine backed by the configured SPARQL endpoint
    pub fn new(data_index: Arc<DataIndex>, config: EngineConfig) -> Result<Self> {
        let client = SparqlClient::new(config.sparql_endpoint.clone())
            .with_exclusions(config.excluded_properties.clone());
        if config.rebuild_properties && config.needs_properties() {
            info!("Fetching movie properties from {}", client.endpoint());
        }
        Self::with_source(data_index, config, &client)
    }

    /// Create an engine that fetches properties from `source` on rebuild
    pub fn with_source(
        data_index: Arc<DataIndex>,
        config: EngineConfig,
        source: &dyn PropertySource,
    ) -> Result<Self> {
        config.validate().context("Invalid engine configuration")?;
        let predictor = Predictor::new(config.neighbours)?;

        let catalog: Vec<MovieLink> = data_index.movies().cloned().collect();
        let properties = if config.needs_properties() {
            let path = config.properties_file();
            PropertyTable::load_or_fetch(config.rebuild_properties, &path, &catalog, source)
                .with_context(|| {
                    format!(
                        "Failed to load movie properties from {:?} (rebuild: {})",
                        path, config.rebuild_properties
                    )
                })?
        } else {
            // Only titles are needed; use the cache when one exists
            let path = config.properties_file();
            PropertyTable::load(&path, &catalog).unwrap_or_else(|e| {
                warn!("No property cache at {:?} ({}), using resource names", path, e);
                PropertyTable::from_rows(&catalog, std::iter::empty())
            })
        };

        let item_ids = data_index.sorted_movie_ids();
        let input = match config.mode {
            SimilarityMode::Jaccard => SimilarityInput::KnowledgeGraph(&properties),
            SimilarityMode::Cosine => SimilarityInput::Interactions(data_index.as_ref()),
        };
        let path = config.similarity_file();
        let matrix = SimilarityEngine::new(&path)
            .with_rebuild(config.rebuild_similarity)
            .build_or_load(&item_ids, input)
            .with_context(|| {
                format!(
                    "Failed to {} {} similarity matrix at {:?}",
                    if config.rebuild_similarity { "build" } else { "load" },
                    config.mode,
                    path
                )
            })?;

        info!(
            "Engine ready: mode={}, k={}, N={}, {} items",
            config.mode,
            config.neighbours,
            config.top_n,
            matrix.len()
        );

        Ok(Self {
            data_index,
            config,
            predictor,
            properties,
            matrix,
        })
    }

    /// Top-N recommendations for a user
    pub fn recommend(&self, user_id: UserId) -> Vec<MovieRecommendation> {
        self.recommend_for(&self.profile(user_id))
    }

    /// Top-N recommendations for an explicit profile
    #[instrument(skip_all, fields(user = profile.user_id(), profile = profile.len()))]
    pub fn recommend_for(&self, profile: &Profile) -> Vec<MovieRecommendation> {
        let start_time = Instant::now();

        let unknown = profile.unknown_items(self.matrix.labels());
        let predictions = self.predictor.predict(&self.matrix, profile, &unknown);
        let best = top_n(predictions, self.config.top_n);

        let explanations: Vec<Option<String>> = if self.config.explain {
            let recommended: Vec<MovieId> = best.iter().map(|p| p.movie_id).collect();
            ExplanationEngine::new(&self.properties, self.matrix.len())
                .explain_all(&profile.items(), &recommended)
                .into_iter()
                .map(|e| e.sentence)
                .collect()
        } else {
            vec![None; best.len()]
        };

        let recommendations: Vec<MovieRecommendation> = best
            .into_iter()
            .zip(explanations)
            .map(|(prediction, explanation)| MovieRecommendation {
                movie_id: prediction.movie_id,
                title: self.title(prediction.movie_id),
                score: prediction.score,
                explanation,
            })
            .collect();

        info!(
            "Recommended {} of {} unknown items for user {} in {:.2?}",
            recommendations.len(),
            unknown.len(),
            profile.user_id(),
            start_time.elapsed()
        );
        recommendations
    }

    /// The user's current profile
    pub fn profile(&self, user_id: UserId) -> Profile {
        Profile::from_index(&self.data_index, user_id)
    }

    /// Display title of a movie
    pub fn title(&self, movie_id: MovieId) -> String {
        self.properties.get_name(movie_id)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

}
