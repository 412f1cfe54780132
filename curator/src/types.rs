//! Curator-specific data types

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use shared::Artwork;

use crate::error::CuratorResult;

/// Display targets served by the combined `current` view
pub const DISPLAY_TARGETS: [&str; 3] = ["portrait", "landscape", "tv"];

/// One artwork per display target, with per-display failures
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSelection {
    pub portrait: Option<Artwork>,
    pub landscape: Option<Artwork>,
    pub tv: Option<Artwork>,
    /// Set when any display has no artwork
    pub warning: bool,
    /// Failure message per display
    pub errors: BTreeMap<String, String>,
}

impl CurrentSelection {
    /// Record the outcome for one display
    pub fn record(&mut self, display: &str, outcome: CuratorResult<Artwork>) {
        match outcome {
            Ok(artwork) => match display {
                "portrait" => self.portrait = Some(artwork),
                "landscape" => self.landscape = Some(artwork),
                "tv" => self.tv = Some(artwork),
                _ => {}
            },
            Err(e) => {
                self.warning = true;
                self.errors.insert(display.to_string(), e.to_string());
            }
        }
    }

    pub fn get(&self, display: &str) -> Option<&Artwork> {
        match display {
            "portrait" => self.portrait.as_ref(),
            "landscape" => self.landscape.as_ref(),
            "tv" => self.tv.as_ref(),
            _ => None,
        }
    }
}

/// Art cache key counts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub total_keys: usize,
    pub pool_keys: usize,
    pub rotation_keys: usize,
    pub keys: Vec<String>,
}
