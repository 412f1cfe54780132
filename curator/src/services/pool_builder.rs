//! Pool construction from weighted sources

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use shared::{ArtFilters, Artwork, Orientation};
use crate::error::{CuratorError, CuratorResult};
use crate::services::source_selector::WeightedSourceSelector;
use crate::sources::SourceRegistry;
use crate::traits::RandomSource;

/// Attempt budget per requested pool slot
pub const ATTEMPTS_PER_POOL_SLOT: usize = 4;

fn dedupe_key(artwork: &Artwork) -> (String, String) {
    let (source, id) = artwork.dedupe_key();
    (source.to_string(), id.to_string())
}

/// Assembles deduplicated artwork pools with a bounded attempt budget
pub struct PoolBuilder {
    selector: WeightedSourceSelector,
    registry: SourceRegistry,
    retry_delay: Duration,
}

impl PoolBuilder {
    pub fn new(registry: SourceRegistry, rng: Arc<dyn RandomSource>, retry_delay: Duration) -> CuratorResult<Self> {
        let selector = WeightedSourceSelector::new(registry.weights(), rng)?;
        Ok(Self {
            selector,
            registry,
            retry_delay,
        })
    }

    /// Build a pool of up to `pool_size` artworks.
    ///
    /// Adapter failures cost one attempt each. Only an empty pool after
    /// `pool_size * 4` attempts is an error; configuration errors are
    /// returned immediately.
    pub async fn build_pool(
        &self,
        pool_size: usize,
        orientation: Option<Orientation>,
        filters: &ArtFilters,
    ) -> CuratorResult<Vec<Artwork>> {
        let label = orientation.map(|o| o.as_str()).unwrap_or("any orientation");
        let max_attempts = pool_size.saturating_mul(ATTEMPTS_PER_POOL_SLOT);
        let mut pool: Vec<Artwork> = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut attempts = 0;

        if pool_size == 0 {
            return Ok(pool);
        }

        info!("Building {} pool of {} (styles: {})", label, pool_size, filters.signature());

        while attempts < max_attempts && pool.len() < pool_size {
            attempts += 1;
            let source_key = self.selector.select()?;

            match self.registry.adapter(source_key) {
                None => warn!("No adapter registered for source {}", source_key),
                Some(adapter) => match adapter.fetch_artwork(orientation, filters).await {
                    Ok(artwork) => {
                        if !artwork.has_image() {
                            debug!("Rejected artwork {} from {}: missing image", artwork.id, source_key);
                        } else if !seen.insert(dedupe_key(&artwork)) {
                            debug!("Rejected duplicate artwork {} from {}", artwork.id, artwork.source);
                        } else {
                            debug!("Added '{}' by {} from {}", artwork.title, artwork.artist, artwork.source);
                            pool.push(artwork);
                        }
                    }
                    Err(failure) => {
                        warn!(
                            "Attempt {}/{} against {} failed: {}",
                            attempts, max_attempts, source_key, failure
                        );
                    }
                },
            }

            if attempts < max_attempts && pool.len() < pool_size && !self.retry_delay.is_zero() {
                tokio::time::sleep(self.retry_delay).await;
            }
        }

        if pool.is_empty() {
            return Err(CuratorError::PoolExhausted {
                orientation: label.to_string(),
                attempts,
            });
        }

        if pool.len() < pool_size {
            warn!("Built partial {} pool: {}/{} after {} attempts", label, pool.len(), pool_size, attempts);
        } else {
            info!("Built {} pool of {} in {} attempts", label, pool.len(), attempts);
        }

        Ok(pool)
    }
}
