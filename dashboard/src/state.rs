//! Shared handler state

use std::sync::Arc;
use std::time::{Duration, Instant};

use curator::{
    build_http_client, ArtRotation, ContentFilter, KvCache, MemoryCache, PoolBuilder, RandomSource,
    SourceRegistry, SystemClock, ThreadRandom,
};
use shared::ArtConfig;
use tracing::info;
use crate::error::DashboardResult;

/// State handed to every route; clones share the rotation
pub struct DashboardState<C>
where
    C: KvCache,
{
    pub rotation: Arc<ArtRotation<C>>,
    pub started_at: Instant,
}

impl<C> Clone for DashboardState<C>
where
    C: KvCache,
{
    fn clone(&self) -> Self {
        Self {
            rotation: self.rotation.clone(),
            started_at: self.started_at,
        }
    }
}

impl<C> DashboardState<C>
where
    C: KvCache,
{
    pub fn new(rotation: ArtRotation<C>) -> Self {
        Self {
            rotation: Arc::new(rotation),
            started_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

impl DashboardState<MemoryCache> {
    /// Wire the production rotation: live museum adapters, thread RNG,
    /// system clock and an in-process cache
    pub fn from_config(config: ArtConfig, cache: MemoryCache) -> DashboardResult<Self> {
        let client = build_http_client(Duration::from_millis(config.request_timeout_ms))?;
        let filter = Arc::new(ContentFilter::new(&config.religious_keywords));
        info!("Religious content filter has {} keywords", filter.keywords().len());
        let rng: Arc<dyn RandomSource> = Arc::new(ThreadRandom);

        let registry = SourceRegistry::from_config(&config, client, filter, rng.clone())?;
        let builder = PoolBuilder::new(registry, rng, Duration::from_millis(config.retry_delay_ms))?;
        let rotation = ArtRotation::new(cache, builder, Arc::new(SystemClock), config);

        Ok(Self::new(rotation))
    }
}
