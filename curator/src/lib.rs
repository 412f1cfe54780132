//! Curator library for the ambient dashboard
//!
//! Builds pools of artworks from several museum APIs using weighted source
//! selection, caches them, and hands out a stable artwork per rotation slot.

pub mod error;
pub mod types;
pub mod traits;
pub mod services;
pub mod sources;

// Re-export main types
pub use error::{CuratorError, CuratorResult, SourceFailure};
pub use types::*;
pub use traits::*;
pub use services::*;
pub use sources::{build_http_client, SourceRegistry};
