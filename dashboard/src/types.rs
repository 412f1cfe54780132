//! Request and response bodies for the HTTP surface

use serde::{Deserialize, Serialize};
use shared::{ArtFilters, Artwork};

/// Query string accepted by the art routes
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtQuery {
    /// Comma separated styles, e.g. `Cubism,Surrealism`
    pub styles: Option<String>,
    /// Display to refresh; all displays when absent
    pub orientation: Option<String>,
}

impl ArtQuery {
    pub fn filters(&self) -> ArtFilters {
        ArtFilters::from_query(self.styles.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrientationResponse {
    pub orientation: String,
    pub artwork: Option<Artwork>,
    pub warning: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearCacheResponse {
    pub status: String,
    pub cleared: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub timestamp: String,
}
