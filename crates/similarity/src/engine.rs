//! The Similarity Engine: build the all-pairs matrix or reload a persisted one.
//!
//! ## Algorithm
//! 1. Evaluate the upper triangle (including the diagonal) of the sorted
//!    item-id list, one row per rayon task
//! 2. Mirror every cell, so `sim(i, j) == sim(j, i)` holds bit for bit
//! 3. Persist the result when it was rebuilt
//!
//! Rebuilding is an explicit caller decision; the engine never compares
//! timestamps or tries to detect a stale file.

use crate::error::Result;
use crate::matrix::SimilarityMatrix;
use crate::measures::{CosineMeasure, JaccardMeasure};
use crate::mode::SimilarityMode;
use crate::persist::{read_matrix, write_matrix};
use crate::traits::SimilarityMeasure;
use data_loader::{DataIndex, MovieId};
use properties::PropertyStore;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, instrument};

/// What a rebuild computes similarity from
#[derive(Clone, Copy)]
pub enum SimilarityInput<'a> {
    /// Item Property Sets from the knowledge graph (Jaccard)
    KnowledgeGraph(&'a dyn PropertyStore),
    /// Interaction columns of the User-Item Matrix (cosine)
    Interactions(&'a DataIndex),
}

impl<'a> SimilarityInput<'a> {
    pub fn mode(&self) -> SimilarityMode {
        match self {
            SimilarityInput::KnowledgeGraph(_) => SimilarityMode::Jaccard,
            SimilarityInput::Interactions(_) => SimilarityMode::Cosine,
        }
    }

    /// The measure matching this input
    pub fn measure(&self) -> Box<dyn SimilarityMeasure + 'a> {
        match *self {
            SimilarityInput::KnowledgeGraph(store) => Box::new(JaccardMeasure::new(store)),
            SimilarityInput::Interactions(index) => Box::new(CosineMeasure::new(index)),
        }
    }
}

/// Compute the full matrix for `item_ids` (expected sorted ascending)
#[instrument(skip_all, fields(measure = measure.name(), items = item_ids.len()))]
pub fn build_matrix(measure: &dyn SimilarityMeasure, item_ids: &[MovieId]) -> SimilarityMatrix {
    let start = Instant::now();
    let n = item_ids.len();

    // Row i holds sim(i, j) for j >= i
    let upper: Vec<Vec<f64>> = item_ids
        .par_iter()
        .enumerate()
        .map(|(i, &a)| {
            item_ids[i..]
                .iter()
                .map(|&b| measure.similarity(a, b))
                .collect()
        })
        .collect();

    let mut values = vec![0.0; n * n];
    for (i, row) in upper.iter().enumerate() {
        for (offset, &value) in row.iter().enumerate() {
            let j = i + offset;
            values[i * n + j] = value;
            values[j * n + i] = value;
        }
    }

    info!(
        "Computed {} pairwise similarities in {:.2?}",
        n * (n + 1) / 2,
        start.elapsed()
    );
    SimilarityMatrix::from_parts(item_ids.to_vec(), values)
}

/// Owns the persistence policy of one similarity matrix file
#[derive(Debug, Clone)]
pub struct SimilarityEngine {
    path: PathBuf,
    rebuild: bool,
}

impl SimilarityEngine {
    /// Create an engine reading from / writing to `path` (default: reuse)
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            rebuild: false,
        }
    }

    /// Rebuild from scratch instead of loading the persisted file
    pub fn with_rebuild(mut self, rebuild: bool) -> Self {
        self.rebuild = rebuild;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rebuild and persist, or reload, the matrix for the sorted `item_ids`.
    ///
    /// On reload `input` is not consulted; the same `item_ids` are
    /// re-attached as row and column labels.
    pub fn build_or_load(
        &self,
        item_ids: &[MovieId],
        input: SimilarityInput<'_>,
    ) -> Result<SimilarityMatrix> {
        if self.rebuild {
            info!(
                "Building {} similarity matrix for {} items",
                input.mode(),
                item_ids.len()
            );
            let measure = input.measure();
            let matrix = build_matrix(measure.as_ref(), item_ids);
            write_matrix(&matrix, &self.path)?;
            info!("Similarity matrix written to {:?}", self.path);
            Ok(matrix)
        } else {
            let start = Instant::now();
            let matrix = read_matrix(&self.path, item_ids)?;
            info!(
                "Loaded {}x{} similarity matrix from {:?} in {:.2?}",
                matrix.len(),
                matrix.len(),
                self.path,
                start.elapsed()
            );
            Ok(matrix)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimilarityError;
    use properties::{Property, PropertyTable};

    const STARRING: &str = "http://dbpedia.org/ontology/starring";

    fn table() -> PropertyTable {
        PropertyTable::from_rows(
            &[],
            vec![
                (1, Property::new(STARRING, "A")),
                (1, Property::new(STARRING, "B")),
                (2, Property::new(STARRING, "B")),
                (2, Property::new(STARRING, "C")),
                (3, Property::new(STARRING, "D")),
            ],
        )
    }

    #[test]
    fn test_build_jaccard_matrix() {
        let table = table();
        let measure = JaccardMeasure::new(&table);
        let matrix = build_matrix(&measure, &[1, 2, 3, 4]);

        assert_eq!(matrix.len(), 4);
        assert_eq!(matrix.get(1, 2), Some(1.0 / 3.0));
        assert_eq!(matrix.get(1, 3), Some(0.0));
        // Movie 4 has no properties but is identical to itself
        assert_eq!(matrix.get(4, 4), Some(1.0));
        assert_eq!(matrix.get(3, 4), Some(0.0));
    }

    #[test]
    fn test_matrix_is_symmetric_with_unit_diagonal() {
        let table = table();
        let measure = JaccardMeasure::new(&table);
        let ids = [1, 2, 3, 4];
        let matrix = build_matrix(&measure, &ids);

        for &a in &ids {
            assert_eq!(matrix.get(a, a), Some(1.0));
            for &b in &ids {
                assert_eq!(matrix.get(a, b), matrix.get(b, a));
            }
        }
    }

    #[test]
    fn test_build_then_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim_matrix.csv");
        let table = table();
        let ids = [1, 2, 3];

        let built = SimilarityEngine::new(&path)
            .with_rebuild(true)
            .build_or_load(&ids, SimilarityInput::KnowledgeGraph(&table))
            .unwrap();

        // Reload ignores the input entirely
        let empty = PropertyTable::default();
        let loaded = SimilarityEngine::new(&path)
            .build_or_load(&ids, SimilarityInput::KnowledgeGraph(&empty))
            .unwrap();

        assert_eq!(built, loaded);
        assert_eq!(loaded.labels(), &ids);
    }

    #[test]
    fn test_reload_with_other_catalog_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sim_matrix.csv");
        let table = table();

        SimilarityEngine::new(&path)
            .with_rebuild(true)
            .build_or_load(&[1, 2, 3], SimilarityInput::KnowledgeGraph(&table))
            .unwrap();

        let result = SimilarityEngine::new(&path)
            .build_or_load(&[1, 2, 3, 4], SimilarityInput::KnowledgeGraph(&table));
        assert!(matches!(
            result,
            Err(SimilarityError::RowCountMismatch {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn test_input_mode() {
        let table = PropertyTable::default();
        let index = DataIndex::new();
        assert_eq!(
            SimilarityInput::KnowledgeGraph(&table).mode(),
            SimilarityMode::Jaccard
        );
        assert_eq!(
            SimilarityInput::Interactions(&index).mode(),
            SimilarityMode::Cosine
        );
    }
}
