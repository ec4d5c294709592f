//! Error types for marrow-core.

use thiserror::Error;

/// Result type for marrow-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving a glTF document.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid data in the file.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// Unsupported feature or version.
    #[error("unsupported: {0}")]
    Unsupported(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
