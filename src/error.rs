// Error types for shelf application.
// Handles catalog source errors, cache errors, and general application errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("catalog source error: {0}")]
    Source(#[from] reqwest::Error),

    #[error("catalog source returned HTTP {0}")]
    SourceStatus(reqwest::StatusCode),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no cache directory available on this system")]
    NoCacheDir,

    #[error("{0}")]
    Other(String),
}

impl ShelfError {
    /// Whether the error originated in the network layer rather than in
    /// decoding of a response body.
    pub fn is_network(&self) -> bool {
        matches!(self, ShelfError::Source(_) | ShelfError::SourceStatus(_))
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;
