//! DataIndex building and validation.
//!
//! Loads the mapping and interaction files, assembles the User-Item Matrix
//! and checks that every interaction points at a catalog movie.

use crate::error::{DataLoadError, Result};
use crate::parser;
use crate::types::*;
use std::path::Path;
use tracing::info;

/// Interactions file name inside the data directory
pub const INTERACTIONS_FILE: &str = "trainingset.tsv";

/// Linked-data mapping file name inside the data directory
pub const MAPPINGS_FILE: &str = "mappingLinkedData.tsv";

impl DataIndex {
    /// Load the dataset from a directory
    ///
    /// Steps:
    /// 1. Parse the mapping and interaction files in parallel
    /// 2. Insert the catalog, then the interactions
    /// 3. Validate data integrity
    pub fn load_from_files(data_dir: &Path) -> Result<Self> {
        info!("Loading linked-data movie dataset from {:?}", data_dir);

        let interactions_path = data_dir.join(INTERACTIONS_FILE);
        let mappings_path = data_dir.join(MAPPINGS_FILE);

        let (movies, interactions) = rayon::join(
            || parser::parse_mappings(&mappings_path),
            || parser::parse_interactions(&interactions_path),
        );

        let movies = movies?;
        let interactions = interactions?;

        info!(
            "Parsed {} movie links and {} interactions",
            movies.len(),
            interactions.len()
        );

        let mut index = DataIndex::new();

        for movie in movies {
            index.insert_movie(movie);
        }

        for interaction in interactions {
            index.insert_interaction(interaction);
        }

        index.validate()?;

        let (users, movies, interactions) = index.counts();
        info!(
            "DataIndex built: {} users, {} movies, {} interactions",
            users, movies, interactions
        );
        Ok(index)
    }

    /// Validate data integrity
    ///
    /// Every interacted movie must exist in the linked-data catalog,
    /// otherwise its column would have no label in the similarity matrix.
    pub fn validate(&self) -> Result<()> {
        let mut movie_ids: Vec<&MovieId> = self.item_users.keys().collect();
        movie_ids.sort_unstable();

        for &movie_id in movie_ids {
            if !self.movies.contains_key(&movie_id) {
                return Err(DataLoadError::MissingReference {
                    entity: "Movie".to_string(),
                    id: movie_id,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_dataset(dir: &Path, mappings: &str, interactions: &str) {
        fs::write(dir.join(MAPPINGS_FILE), mappings).unwrap();
        fs::write(dir.join(INTERACTIONS_FILE), interactions).unwrap();
    }

    #[test]
    fn test_load_dataset() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "3\thttp://dbpedia.org/resource/C\n1\thttp://dbpedia.org/resource/A\n2\thttp://dbpedia.org/resource/B\n",
            "10\t1\t1\n10\t2\t1\n11\t2\t1\n",
        );

        let index = DataIndex::load_from_files(dir.path()).unwrap();
        let (users, movies, interactions) = index.counts();

        assert_eq!(users, 2);
        assert_eq!(movies, 3);
        assert_eq!(interactions, 3);
        assert_eq!(index.sorted_movie_ids(), vec![1, 2, 3]);
        assert!(index.is_observed(10, 2));
        assert!(!index.is_observed(11, 1));
    }

    #[test]
    fn test_interaction_column_does_not_weight_cells() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "1\thttp://dbpedia.org/resource/A\n2\thttp://dbpedia.org/resource/B\n",
            "10\t1\t0\n10\t2\t2\n",
        );

        let index = DataIndex::load_from_files(dir.path()).unwrap();

        assert!(index.is_observed(10, 1));
        assert!(index.is_observed(10, 2));
        assert_eq!(index.counts().2, 2);
    }

    #[test]
    fn test_unmapped_movie_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write_dataset(
            dir.path(),
            "1\thttp://dbpedia.org/resource/A\n",
            "10\t1\t1\n10\t7\t1\n",
        );

        let result = DataIndex::load_from_files(dir.path());
        assert!(matches!(
            result,
            Err(DataLoadError::MissingReference { id: 7, .. })
        ));
    }

    #[test]
    fn test_missing_directory() {
        let result = DataIndex::load_from_files(Path::new("/no/such/dataset"));
        assert!(matches!(result, Err(DataLoadError::FileNotFound { .. })));
    }
}
