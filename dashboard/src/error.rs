//! Dashboard-specific error types

use thiserror::Error;
use curator::CuratorError;
use shared::SharedError;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("HTTP server startup failed: {0}")]
    ServerStartup(String),

    #[error("Curator error: {0}")]
    Curator(#[from] CuratorError),

    #[error("Shared component error: {0}")]
    Shared(#[from] SharedError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DashboardError {
    pub fn config(message: impl Into<String>) -> Self {
        DashboardError::Config { message: message.into() }
    }
}

pub type DashboardResult<T> = Result<T, DashboardError>;
