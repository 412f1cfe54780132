//! Weighted random source selection

use std::sync::Arc;

use crate::error::{CuratorError, CuratorResult};
use crate::traits::RandomSource;

/// Picks source keys with long-run frequency proportional to their weights.
///
/// Sources are walked in configured order, so the earliest source wins at a
/// cumulative-weight boundary. Zero-weight sources are never picked.
pub struct WeightedSourceSelector {
    sources: Vec<(String, u32)>,
    total_weight: u64,
    rng: Arc<dyn RandomSource>,
}

impl WeightedSourceSelector {
    /// Create a selector; fails when no source carries a positive weight
    pub fn new(sources: Vec<(String, u32)>, rng: Arc<dyn RandomSource>) -> CuratorResult<Self> {
        let total_weight: u64 = sources.iter().map(|(_, w)| u64::from(*w)).sum();
        if total_weight == 0 {
            return Err(CuratorError::NoEnabledSources);
        }

        Ok(Self {
            sources,
            total_weight,
            rng,
        })
    }

    pub fn total_weight(&self) -> u64 {
        self.total_weight
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sources.iter().map(|(k, _)| k.as_str())
    }

    /// Select the next source key
    pub fn select(&self) -> CuratorResult<&str> {
        if self.total_weight == 0 {
            return Err(CuratorError::NoEnabledSources);
        }

        let r = self.rng.next_unit() * self.total_weight as f64;
        let mut cumulative = 0u64;
        let mut last_weighted = None;

        for (key, weight) in &self.sources {
            if *weight == 0 {
                continue;
            }
            cumulative += u64::from(*weight);
            if r <= cumulative as f64 {
                return Ok(key.as_str());
            }
            last_weighted = Some(key.as_str());
        }

        // Only reachable if the random source breaks its [0, 1) contract
        last_weighted.ok_or(CuratorError::NoEnabledSources)
    }
}
