//! Engine configuration.
//!
//! Loaded from an optional TOML file and then overridden by command-line
//! flags through the `with_*` builders. Every field has a default, so an
//! empty file is a valid configuration.
//!
//! ```toml
//! neighbours = 10
//! top_n = 5
//! mode = "cosine"
//! explain = true
//! ```

use properties::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use similarity::SimilarityMode;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Directory generated artifacts (matrices, property cache) land in
pub const DEFAULT_OUTPUT_DIR: &str = "generated_files";

/// Default property cache file name
pub const PROPERTIES_FILE: &str = "all_movie_props.tsv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Neighbour count k must be greater than 0")]
    ZeroNeighbours,

    #[error("Result count N must be greater than 0")]
    ZeroTopN,

    #[error("Failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Neighbour count k
    pub neighbours: usize,
    /// Result count N
    pub top_n: usize,
    pub mode: SimilarityMode,
    pub rebuild_similarity: bool,
    pub rebuild_properties: bool,
    pub explain: bool,
    pub output_dir: PathBuf,
    /// Overrides the per-mode matrix file inside `output_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_path: Option<PathBuf>,
    /// Overrides the property cache file inside `output_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties_path: Option<PathBuf>,
    pub sparql_endpoint: String,
    /// Predicates dropped from every knowledge-graph result
    pub excluded_properties: Vec<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            neighbours: 5,
            top_n: 5,
            mode: SimilarityMode::default(),
            rebuild_similarity: false,
            rebuild_properties: false,
            explain: false,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            similarity_path: None,
            properties_path: None,
            sparql_endpoint: DEFAULT_ENDPOINT.to_string(),
            excluded_properties: Vec::new(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.neighbours == 0 {
            return Err(ConfigError::ZeroNeighbours);
        }
        if self.top_n == 0 {
            return Err(ConfigError::ZeroTopN);
        }
        Ok(())
    }

    /// Where the matrix of the configured mode is persisted
    pub fn similarity_file(&self) -> PathBuf {
        self.similarity_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join(self.mode.default_file_name()))
    }

    /// Where the property cache is persisted
    pub fn properties_file(&self) -> PathBuf {
        self.properties_path
            .clone()
            .unwrap_or_else(|| self.output_dir.join(PROPERTIES_FILE))
    }

    /// Whether the run needs Item Property Sets beyond display names
    pub fn needs_properties(&self) -> bool {
        self.mode == SimilarityMode::Jaccard || self.explain
    }

    pub fn with_neighbours(mut self, k: usize) -> Self {
        self.neighbours = k;
        self
    }

    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    pub fn with_mode(mut self, mode: SimilarityMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_rebuild_similarity(mut self, rebuild: bool) -> Self {
        self.rebuild_similarity = rebuild;
        self
    }

    pub fn with_rebuild_properties(mut self, rebuild: bool) -> Self {
        self.rebuild_properties = rebuild;
        self
    }

    pub fn with_explain(mut self, explain: bool) -> Self {
        self.explain = explain;
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_similarity_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.similarity_path = Some(path.into());
        self
    }

    pub fn with_properties_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.properties_path = Some(path.into());
        self
    }

    pub fn with_sparql_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.sparql_endpoint = endpoint.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.neighbours, 5);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.mode, SimilarityMode::Jaccard);
        assert_eq!(
            config.similarity_file(),
            PathBuf::from("generated_files/sim_matrix.csv")
        );
        assert_eq!(
            config.properties_file(),
            PathBuf::from("generated_files/all_movie_props.tsv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_matrix_file_follows_mode() {
        let config = EngineConfig::default().with_mode(SimilarityMode::Cosine);
        assert_eq!(
            config.similarity_file(),
            PathBuf::from("generated_files/item_knn_sim.csv")
        );
        assert!(!config.needs_properties());
        assert!(config.with_explain(true).needs_properties());
    }

    #[test]
    fn test_parse_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            neighbours = 10
            mode = "cosine"
            similarity_path = "/tmp/knn.csv"
            excluded_properties = ["http://dbpedia.org/ontology/starring"]
            "#,
        )
        .unwrap();

        assert_eq!(config.neighbours, 10);
        assert_eq!(config.top_n, 5);
        assert_eq!(config.mode, SimilarityMode::Cosine);
        assert_eq!(config.similarity_file(), PathBuf::from("/tmp/knn.csv"));
        assert_eq!(config.excluded_properties.len(), 1);
    }

    #[test]
    fn test_path_and_endpoint_overrides() {
        let config = EngineConfig::default()
            .with_output_dir("/data/out")
            .with_properties_path("/cache/props.tsv")
            .with_sparql_endpoint("http://localhost:8890/sparql");

        assert_eq!(config.properties_file(), PathBuf::from("/cache/props.tsv"));
        assert_eq!(config.similarity_file(), PathBuf::from("/data/out/sim_matrix.csv"));
        assert_eq!(config.sparql_endpoint, "http://localhost:8890/sparql");

        let config = config.with_similarity_path("/data/jaccard.csv");
        assert_eq!(config.similarity_file(), PathBuf::from("/data/jaccard.csv"));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        assert!(matches!(
            EngineConfig::from_toml_str("neighbors = 3"),
            Err(ConfigError::Parse(_))
        ));
        assert!(EngineConfig::from_toml_str(r#"mode = "pearson""#).is_err());
    }

    #[test]
    fn test_validate() {
        assert!(matches!(
            EngineConfig::default().with_neighbours(0).validate(),
            Err(ConfigError::ZeroNeighbours)
        ));
        assert!(matches!(
            EngineConfig::default().with_top_n(0).validate(),
            Err(ConfigError::ZeroTopN)
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = EngineConfig::from_toml_file(Path::new("/nonexistent/lod-recs.toml"));
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }
}
