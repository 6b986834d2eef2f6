//! # Data Loader Crate
//!
//! This crate loads the implicit-feedback movie dataset and its linked-data
//! mapping into an in-memory User-Item Matrix.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieLink, Interaction, DataIndex)
//! - **parser**: Parse the tab-separated files into Rust structs
//! - **index**: Assemble and validate the DataIndex
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::DataIndex;
//! use std::path::Path;
//!
//! let index = DataIndex::load_from_files(Path::new("data/facebook_movies"))?;
//!
//! let catalog = index.sorted_movie_ids();
//! let liked = index.interactions_of(10);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::{INTERACTIONS_FILE, MAPPINGS_FILE};
pub use types::{
    // Type aliases
    UserId,
    MovieId,
    // Core types
    MovieLink,
    Interaction,
    DataIndex,
};
