//! Error types for the spookify crate.

use std::path::PathBuf;

/// Spookify-specific error types.
#[derive(Debug, thiserror::Error)]
pub enum SpookifyError {
    /// A selection precondition was violated (empty word list, empty themed word).
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No embedded word list is registered under this name.
    #[error("unknown word list: {name}")]
    UnknownWordList { name: String },

    /// Word list file not found at the specified path.
    #[error("word list not found: {path}")]
    WordListNotFound { path: PathBuf },

    /// The word list parsed fine but contained no usable entries.
    #[error("word list has no usable entries: {source_name}")]
    EmptyWordList { source_name: String },

    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error with context.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpookifyError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Convenience result type for spookify operations.
pub type SpookifyResult<T> = Result<T, SpookifyError>;
