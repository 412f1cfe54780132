//! Shared types for the ambient dashboard art service
//!
//! Contains the artwork data model, configuration types and logging helpers
//! used by both the curator library and the dashboard server.

pub mod config;
pub mod errors;
pub mod logging;
pub mod types;

pub use config::{ArtConfig, SourceConfig};
pub use errors::*;
pub use types::*;
