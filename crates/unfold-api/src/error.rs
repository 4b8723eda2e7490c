//! Error types for the catalog HTTP client.

use thiserror::Error;
use unfold_core::FetchError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Request could not be sent or the body could not be read.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status other than 404.
    #[error("server error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid base URL {0}")]
    BaseUrl(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<ApiError> for FetchError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::NotFound(what) => FetchError::NotFound(what),
            other => FetchError::Transport(other.to_string()),
        }
    }
}
