use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ImporterError>;

#[derive(Error, Debug)]
pub enum ImporterError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("HTTP error {status}: {url}")]
    HttpStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unexpected page structure: {0}")]
    StructuralMismatch(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] storage::error::StorageError),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ImporterError {
    /// Errors raised while talking to a source. The aggregator treats every
    /// one of these the same way: the whole run falls back.
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            Self::RequestError(_)
                | Self::HttpStatus { .. }
                | Self::Timeout(_)
                | Self::ParseError(_)
                | Self::MalformedResponse(_)
                | Self::StructuralMismatch(_)
        )
    }
}
