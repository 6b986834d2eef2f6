//! Item-item similarity for neighbour-based recommendation.
//!
//! This crate provides:
//! - `SimilarityMeasure` trait with Jaccard (knowledge graph) and cosine
//!   (interactions) implementations
//! - `SimilarityMatrix`, the immutable labelled item×item matrix
//! - persistence of the matrix as a label-free numeric grid
//! - `SimilarityEngine`, which rebuilds or reloads on the caller's request
//!
//! ## Example Usage
//! ```ignore
//! use similarity::{SimilarityEngine, SimilarityInput};
//!
//! let catalog = index.sorted_movie_ids();
//! let matrix = SimilarityEngine::new("generated_files/sim_matrix.csv")
//!     .with_rebuild(true)
//!     .build_or_load(&catalog, SimilarityInput::KnowledgeGraph(&property_table))?;
//!
//! let sim = matrix.get(1, 2);
//! ```

pub mod engine;
pub mod error;
pub mod matrix;
pub mod measures;
pub mod mode;
pub mod persist;
pub mod traits;

// Re-export main types
pub use engine::{SimilarityEngine, SimilarityInput, build_matrix};
pub use error::{Result, SimilarityError};
pub use matrix::SimilarityMatrix;
pub use measures::{CosineMeasure, JaccardMeasure};
pub use mode::SimilarityMode;
pub use persist::{read_matrix, write_matrix};
pub use traits::SimilarityMeasure;
