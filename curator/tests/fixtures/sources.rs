//! Adapter and configuration builders pointed at a mock server

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use curator::services::content_filter::ContentFilter;
use curator::services::random::SeededRandom;
use curator::sources::build_http_client;
use shared::{ArtConfig, SourceConfig};

pub fn test_client() -> reqwest::Client {
    build_http_client(Duration::from_secs(5)).expect("client should build")
}

pub fn religious_filter() -> Arc<ContentFilter> {
    Arc::new(ContentFilter::new(&ArtConfig::default().religious_keywords))
}

pub fn seeded(seed: u64) -> Arc<SeededRandom> {
    Arc::new(SeededRandom::new(seed))
}

/// Default config for one source with its API redirected to `base`
pub fn source_config(key: &str, base: &str) -> SourceConfig {
    let mut config = ArtConfig::default()
        .source(key)
        .cloned()
        .unwrap_or_else(|| SourceConfig::new(key, key, 1));
    config.api_base = Some(base.to_string());
    config
}

/// Default config with every source redirected to `base` and no retry delay
pub fn art_config(base: &str, pool_size: usize) -> ArtConfig {
    let mut config = ArtConfig::default();
    config.pool_size = pool_size;
    config.retry_delay_ms = 0;
    for source in &mut config.sources {
        source.api_base = Some(base.to_string());
    }
    config
}
