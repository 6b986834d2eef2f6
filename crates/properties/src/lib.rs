//! # Properties Crate
//!
//! This crate supplies Item Property Sets: the deduplicated
//! `(property, object)` pairs that describe each movie in the knowledge graph.
//!
//! ## Components
//!
//! - **types**: `Property`, `PropertySet`, and `PropertyLookup`
//! - **store**: the `PropertyStore` capability the engines depend on
//! - **table**: `PropertyTable`, the cached in-memory store
//! - **sparql**: `SparqlClient`, the live DBpedia backing
//! - **corpus**: object frequencies for IDF scoring
//!
//! ## Example Usage
//!
//! ```ignore
//! use properties::{PropertyStore, PropertyTable, SparqlClient};
//!
//! let client = SparqlClient::new("http://dbpedia.org/sparql");
//! let table = PropertyTable::load_or_fetch(rebuild, &cache_path, &catalog, &client)?;
//!
//! let props = table.get_properties(movie_id);
//! let title = table.get_name(movie_id);
//! ```

pub mod corpus;
pub mod error;
pub mod sparql;
pub mod store;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use corpus::ObjectCorpus;
pub use error::{PropertyError, Result};
pub use sparql::{DEFAULT_ENDPOINT, PropertySource, SparqlClient};
pub use store::PropertyStore;
pub use table::PropertyTable;
pub use types::{NAME_PREDICATE, Property, PropertyLookup, PropertySet, local_name};
