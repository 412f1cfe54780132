//! Time-sliced artwork rotation over cached pools
//!
//! Pools live under `art:pool:<display>:<signature>` for the pool TTL. Each
//! rotation slot's pick lives under
//! `art:rotation:<display>:<signature>:<slot>` for one rotation interval.
//! No selection state is held in process; everything derives from the clock
//! and the cache.

use std::sync::Arc;
use std::time::Duration;
use futures_util::future::join_all;
use tracing::{debug, info, warn};

use shared::{ArtConfig, ArtFilters, Artwork, Orientation};
use crate::error::{CuratorError, CuratorResult};
use crate::services::pool_builder::PoolBuilder;
use crate::traits::{Clock, KvCache};
use crate::types::{CacheStats, CurrentSelection, DISPLAY_TARGETS};

pub const ART_KEY_PREFIX: &str = "art:";
pub const POOL_KEY_PREFIX: &str = "art:pool:";
pub const ROTATION_KEY_PREFIX: &str = "art:rotation:";

pub fn pool_key(display_name: &str, filters: &ArtFilters) -> String {
    format!("{POOL_KEY_PREFIX}{display_name}:{}", filters.signature())
}

pub fn rotation_key(display_name: &str, filters: &ArtFilters, slot: u64) -> String {
    format!("{ROTATION_KEY_PREFIX}{display_name}:{}:{slot}", filters.signature())
}

/// Rotation slot for a wall-clock time
pub fn rotation_slot(now_millis: u64, interval_seconds: u64) -> u64 {
    now_millis / interval_seconds.max(1).saturating_mul(1000)
}

/// Pool member shown during a slot
pub fn pick_for_slot(pool: &[Artwork], slot: u64) -> Option<&Artwork> {
    if pool.is_empty() {
        return None;
    }
    pool.get((slot % pool.len() as u64) as usize)
}

/// Configured display name for a request; anything unrecognized shares the
/// default display's pool
pub fn resolve_display(display_name: &str, config: &ArtConfig) -> String {
    let display_name = display_name.trim().to_lowercase();
    if config.rotation_intervals.contains_key(&display_name) {
        display_name
    } else {
        config.default_display.clone()
    }
}

/// Rotation selector composing the cache and the pool builder
pub struct ArtRotation<C>
where
    C: KvCache,
{
    cache: C,
    builder: PoolBuilder,
    clock: Arc<dyn Clock>,
    config: ArtConfig,
}

impl<C> ArtRotation<C>
where
    C: KvCache,
{
    pub fn new(cache: C, builder: PoolBuilder, clock: Arc<dyn Clock>, config: ArtConfig) -> Self {
        Self {
            cache,
            builder,
            clock,
            config,
        }
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    pub fn config(&self) -> &ArtConfig {
        &self.config
    }

    /// Artwork for the current rotation slot of a display
    pub async fn get_artwork(&self, display_name: &str, filters: &ArtFilters) -> CuratorResult<Artwork> {
        let display_name = resolve_display(display_name, &self.config);
        let interval = self.config.rotation_interval_for(&display_name);
        let slot = rotation_slot(self.clock.now_millis(), interval);
        let slot_key = rotation_key(&display_name, filters, slot);

        if let Some(artwork) = self.read_cached::<Artwork>(&slot_key).await {
            debug!("Rotation hit for {} slot {}", display_name, slot);
            return Ok(artwork);
        }

        let pool = self.load_or_build_pool(&display_name, filters).await?;
        self.store_pick(&display_name, &slot_key, &pool, slot, interval).await
    }

    /// Rebuild the pool bypassing the pool cache and re-pick the current slot
    pub async fn refresh(&self, display_name: &str, filters: &ArtFilters) -> CuratorResult<Artwork> {
        let display_name = resolve_display(display_name, &self.config);
        info!("Refreshing {} pool (styles: {})", display_name, filters.signature());

        let pool = self.build_and_store_pool(&display_name, filters).await?;
        let interval = self.config.rotation_interval_for(&display_name);
        let slot = rotation_slot(self.clock.now_millis(), interval);
        let slot_key = rotation_key(&display_name, filters, slot);
        self.store_pick(&display_name, &slot_key, &pool, slot, interval).await
    }

    /// Current artwork for every display target, fetched concurrently
    pub async fn current(&self, filters: &ArtFilters) -> CurrentSelection {
        let outcomes = join_all(
            DISPLAY_TARGETS
                .iter()
                .map(|display_name| async move { (*display_name, self.get_artwork(display_name, filters).await) }),
        )
        .await;

        collect_selection(outcomes)
    }

    /// Refresh every display target concurrently
    pub async fn refresh_all(&self, filters: &ArtFilters) -> CurrentSelection {
        let outcomes = join_all(
            DISPLAY_TARGETS
                .iter()
                .map(|display_name| async move { (*display_name, self.refresh(display_name, filters).await) }),
        )
        .await;

        collect_selection(outcomes)
    }

    /// Delete every art key, returning how many were removed
    pub async fn clear_cache(&self) -> usize {
        let keys: Vec<String> = self
            .cache
            .keys()
            .await
            .into_iter()
            .filter(|k| k.starts_with(ART_KEY_PREFIX))
            .collect();

        if keys.is_empty() {
            return 0;
        }

        let cleared = self.cache.del(&keys).await;
        info!("Cleared {} art cache entries", cleared);
        cleared
    }

    pub async fn cache_stats(&self) -> CacheStats {
        let keys: Vec<String> = self
            .cache
            .keys()
            .await
            .into_iter()
            .filter(|k| k.starts_with(ART_KEY_PREFIX))
            .collect();

        CacheStats {
            total_keys: keys.len(),
            pool_keys: keys.iter().filter(|k| k.starts_with(POOL_KEY_PREFIX)).count(),
            rotation_keys: keys.iter().filter(|k| k.starts_with(ROTATION_KEY_PREFIX)).count(),
            keys,
        }
    }

    async fn load_or_build_pool(&self, display_name: &str, filters: &ArtFilters) -> CuratorResult<Vec<Artwork>> {
        let key = pool_key(display_name, filters);
        match self.read_cached::<Vec<Artwork>>(&key).await {
            Some(pool) if !pool.is_empty() => {
                debug!("Pool hit for {} ({} artworks)", key, pool.len());
                Ok(pool)
            }
            _ => self.build_and_store_pool(display_name, filters).await,
        }
    }

    async fn build_and_store_pool(&self, display_name: &str, filters: &ArtFilters) -> CuratorResult<Vec<Artwork>> {
        let pool = self
            .builder
            .build_pool(self.config.pool_size, Orientation::for_display(display_name), filters)
            .await?;

        let payload = serde_json::to_string(&pool)?;
        self.cache
            .set(&pool_key(display_name, filters), payload, Duration::from_secs(self.config.pool_ttl_seconds))
            .await;
        Ok(pool)
    }

    async fn store_pick(
        &self,
        display_name: &str,
        slot_key: &str,
        pool: &[Artwork],
        slot: u64,
        interval: u64,
    ) -> CuratorResult<Artwork> {
        let artwork = pick_for_slot(pool, slot)
            .cloned()
            .ok_or_else(|| CuratorError::PoolExhausted {
                orientation: display_name.to_string(),
                attempts: 0,
            })?;

        // TTL is the full interval even when the slot is partly over
        let payload = serde_json::to_string(&artwork)?;
        self.cache.set(slot_key, payload, Duration::from_secs(interval)).await;

        info!("Rotation pick for {} slot {}: '{}' ({})", display_name, slot, artwork.title, artwork.source);
        Ok(artwork)
    }

    async fn read_cached<T>(&self, key: &str) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let raw = self.cache.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }
}

fn collect_selection(outcomes: Vec<(&str, CuratorResult<Artwork>)>) -> CurrentSelection {
    let mut selection = CurrentSelection::default();
    for (display_name, outcome) in outcomes {
        if let Err(e) = &outcome {
            warn!("No artwork for {}: {}", display_name, e);
        }
        selection.record(display_name, outcome);
    }
    selection
}
