//! Similarity modes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where item-item similarity comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityMode {
    /// Jaccard over knowledge-graph property sets
    #[default]
    Jaccard,
    /// Cosine over user-item interaction columns
    Cosine,
}

impl SimilarityMode {
    /// File name the matrix of this mode is persisted under by default
    pub fn default_file_name(&self) -> &'static str {
        match self {
            SimilarityMode::Jaccard => "sim_matrix.csv",
            SimilarityMode::Cosine => "item_knn_sim.csv",
        }
    }
}

impl FromStr for SimilarityMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jaccard" => Ok(SimilarityMode::Jaccard),
            "cosine" => Ok(SimilarityMode::Cosine),
            other => Err(format!(
                "unknown similarity mode '{}' (expected 'jaccard' or 'cosine')",
                other
            )),
        }
    }
}

impl fmt::Display for SimilarityMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimilarityMode::Jaccard => write!(f, "jaccard"),
            SimilarityMode::Cosine => write!(f, "cosine"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mode() {
        assert_eq!("jaccard".parse::<SimilarityMode>(), Ok(SimilarityMode::Jaccard));
        assert_eq!("Cosine".parse::<SimilarityMode>(), Ok(SimilarityMode::Cosine));
        assert!("pearson".parse::<SimilarityMode>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [SimilarityMode::Jaccard, SimilarityMode::Cosine] {
            assert_eq!(mode.to_string().parse::<SimilarityMode>(), Ok(mode));
        }
    }
}
