//! # Explain Crate
//!
//! Turns a recommendation into a sentence grounded in the knowledge graph.
//!
//! ## Pipeline (per recommended movie)
//!
//! 1. **graph**: collect every `(property, object)` pair the recommended
//!    movie shares with a profile movie, keyed by object
//! 2. **scoring**: weight each shared object by how many profile movies it
//!    connects and how rare it is in the whole corpus (IDF), keep the best
//! 3. **render**: turn the winning objects into clauses and one sentence
//!
//! ## Example Usage
//!
//! ```ignore
//! use explain::ExplanationEngine;
//!
//! let engine = ExplanationEngine::new(&property_table, catalog_size);
//! for explanation in engine.explain_all(&profile_movies, &recommended) {
//!     if let Some(sentence) = explanation.sentence {
//!         println!("{}", sentence);
//!     }
//! }
//! ```

pub mod engine;
pub mod graph;
pub mod label;
pub mod render;
pub mod scoring;

pub use engine::{Explanation, ExplanationEngine};
pub use graph::{Edge, ExplanationGraph};
pub use label::{property_phrase, uri_label};
pub use scoring::{ScoredObject, idf, property_score, score_objects, select_max};
