//! Curator error types

use thiserror::Error;
use shared::SharedError;

/// Result type for curator operations
pub type CuratorResult<T> = Result<T, CuratorError>;

/// Curator error types
#[derive(Error, Debug)]
pub enum CuratorError {
    #[error("No enabled art sources with a positive weight")]
    NoEnabledSources,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Failed to fetch artworks for {orientation}: no artworks available after {attempts} attempts")]
    PoolExhausted { orientation: String, attempts: usize },

    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
}

impl CuratorError {
    pub fn config(message: impl Into<String>) -> Self {
        CuratorError::ConfigError { message: message.into() }
    }

    /// True for errors a retry can never fix
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            CuratorError::NoEnabledSources | CuratorError::ConfigError { .. } | CuratorError::Shared(_)
        )
    }
}

impl From<serde_json::Error> for CuratorError {
    fn from(err: serde_json::Error) -> Self {
        CuratorError::SerializationError { message: err.to_string() }
    }
}

/// Failure of a single source adapter request
///
/// These are recovered by the pool builder as one wasted attempt.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SourceFailure {
    #[error("network error: {0}")]
    NetworkError(String),

    #[error("request timed out")]
    Timeout,

    #[error("rate limit exceeded")]
    RateLimitExceeded,

    #[error("unexpected HTTP status {0}")]
    HttpStatus(u16),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("no results")]
    NoResults,

    #[error("no candidate matched orientation {0}")]
    NoOrientationMatch(String),

    #[error("all candidates filtered as religious content")]
    AllReligious,
}

impl From<reqwest::Error> for SourceFailure {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            SourceFailure::Timeout
        } else if err.is_decode() {
            SourceFailure::InvalidResponse(err.to_string())
        } else if let Some(status) = err.status() {
            SourceFailure::HttpStatus(status.as_u16())
        } else {
            SourceFailure::NetworkError(err.to_string())
        }
    }
}
