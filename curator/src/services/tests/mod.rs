//! Tests for curator services
//!
//! Sources are mocked with mockall; randomness and time are driven by
//! seeded and manual implementations so every outcome is reproducible.

pub mod memory_cache;
pub mod source_selector;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use shared::Artwork;
use crate::error::SourceFailure;
use crate::traits::MockArtSource;

/// Landscape artwork with a predictable image URL
pub fn landscape_artwork(source: &str, id: &str) -> Artwork {
    Artwork::new(source, id, format!("https://img.example/{source}/{id}.jpg"))
        .with_title(Some(&format!("Study {id}")))
        .with_dimensions(Some(1600.0), Some(900.0))
}

/// Mock source returning a fresh artwork id ("0", "1", ...) on every call
pub fn sequential_source(source: &'static str) -> MockArtSource {
    let counter = Arc::new(AtomicUsize::new(0));
    let mut mock = MockArtSource::new();
    mock.expect_fetch_artwork().returning(move |_, _| {
        let n = counter.fetch_add(1, Ordering::SeqCst);
        Ok(landscape_artwork(source, &n.to_string()))
    });
    mock
}

/// Mock source that always fails
pub fn failing_source(failure: SourceFailure) -> MockArtSource {
    let mut mock = MockArtSource::new();
    mock.expect_fetch_artwork().returning(move |_, _| Err(failure.clone()));
    mock
}
