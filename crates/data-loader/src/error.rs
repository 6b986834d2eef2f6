//! Error types for the data-loader crate.

use thiserror::Error;

/// Errors raised while loading the interaction and mapping files
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// A dataset file is missing from the data directory
    #[error("Dataset file not found: {path}")]
    FileNotFound { path: String },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// A row couldn't be split or a field couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// An interaction points at a movie absent from the linked-data mapping
    #[error("Missing reference: {entity} with id {id} has no linked-data mapping")]
    MissingReference { entity: String, id: u32 },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
