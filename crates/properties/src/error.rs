//! Error types for the properties crate.

use thiserror::Error;

/// Errors raised while reading, writing, or fetching movie properties
#[derive(Error, Debug)]
pub enum PropertyError {
    /// I/O error on the property cache file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A row of the cached property table couldn't be parsed
    #[error("Parse error at line {line} of property cache: {reason}")]
    Parse { line: usize, reason: String },

    /// The knowledge-graph endpoint rejected or failed the query
    #[error("Knowledge-graph query failed for {uri}: {reason}")]
    Query { uri: String, reason: String },

    /// The endpoint answered with something that isn't a SPARQL result set
    #[error("Invalid knowledge-graph response for {uri}: {reason}")]
    InvalidResponse { uri: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, PropertyError>;
