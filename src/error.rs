//! Error types for Treemark
//!
//! Uses `thiserror` for library errors. The annotation core itself is total
//! over well-formed input and never returns these; they cover the manifest
//! loading and selection-resolution surface around it.

use thiserror::Error;

/// Result type alias for Treemark operations
pub type TreemarkResult<T> = Result<T, TreemarkError>;

/// Main error type for Treemark operations
#[derive(Error, Debug)]
pub enum TreemarkError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// A selection list references a pk with no node in the manifest
    #[error("{list} list references unknown node '{pk}'")]
    UnknownSelectionRef { pk: String, list: &'static str },

    /// A node requested by pk is not in the manifest
    #[error("node '{pk}' not found in manifest")]
    UnknownNode { pk: String },
}
