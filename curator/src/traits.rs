//! Curator trait definitions for dependency injection

use std::time::Duration;
use async_trait::async_trait;

use shared::{ArtFilters, Artwork, Orientation};
use crate::error::SourceFailure;

/// A museum collection that can produce one artwork per request
#[mockall::automock]
#[async_trait]
pub trait ArtSource: Send + Sync {
    /// Fetch one normalized artwork matching orientation and filters.
    ///
    /// Religious candidates and candidates without an image are never returned.
    async fn fetch_artwork(&self, orientation: Option<Orientation>, filters: &ArtFilters) -> Result<Artwork, SourceFailure>;
}

/// Key/value store with per-entry expiry
#[mockall::automock]
#[async_trait]
pub trait KvCache: Send + Sync {
    /// Get a live value
    async fn get(&self, key: &str) -> Option<String>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: String, ttl: Duration);

    /// Delete keys, returning how many live entries were removed
    async fn del(&self, keys: &[String]) -> usize;

    /// List live keys
    async fn keys(&self) -> Vec<String>;
}

/// Source of uniform randomness
#[mockall::automock]
pub trait RandomSource: Send + Sync {
    /// Uniform value in `[0, 1)`
    fn next_unit(&self) -> f64;

    /// Uniform index in `[0, bound)`; returns 0 when `bound` is 0
    fn next_index(&self, bound: usize) -> usize;
}

/// Wall clock
#[mockall::automock]
pub trait Clock: Send + Sync {
    /// Milliseconds since the unix epoch
    fn now_millis(&self) -> u64;
}
