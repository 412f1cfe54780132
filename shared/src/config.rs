//! Configuration types for the art rotation service
//!
//! `ArtConfig::default()` carries a complete working setup. A JSON file can
//! overlay any subset of fields; missing fields keep their defaults.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{SharedError, SharedResult};

pub const DEFAULT_POOL_SIZE: usize = 12;
pub const DEFAULT_POOL_TTL_SECONDS: u64 = 3600;
pub const DEFAULT_RETRY_DELAY_MS: u64 = 500;
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;
pub const DEFAULT_DISPLAY: &str = "landscape";
pub const DEFAULT_ROTATION_INTERVAL_SECONDS: u64 = 600;

/// Upper bounds accepted by [`ArtConfig::validate`]
pub const MAX_POOL_SIZE: usize = 500;
pub const MAX_POOL_TTL_SECONDS: u64 = 7 * 24 * 60 * 60;
pub const MAX_ROTATION_INTERVAL_SECONDS: u64 = 24 * 60 * 60;
pub const MAX_RETRY_DELAY_MS: u64 = 60_000;
pub const MAX_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Art rotation configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtConfig {
    pub pool_size: usize,
    pub pool_ttl_seconds: u64,
    pub retry_delay_ms: u64,
    pub request_timeout_ms: u64,
    /// Display whose rotation interval applies to unknown display names
    pub default_display: String,
    /// Rotation interval in seconds per display name
    pub rotation_intervals: BTreeMap<String, u64>,
    /// Sources in selection order
    pub sources: Vec<SourceConfig>,
    pub religious_keywords: Vec<String>,
}

/// Per-museum source configuration
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceConfig {
    pub key: String,
    pub name: String,
    pub enabled: bool,
    pub weight: u32,
    /// Search terms used when the caller supplies no style filter
    pub styles: Vec<String>,
    pub departments: Vec<String>,
    pub api_base: Option<String>,
    pub image_base: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            key: String::new(),
            name: String::new(),
            enabled: true,
            weight: 1,
            styles: Vec::new(),
            departments: Vec::new(),
            api_base: None,
            image_base: None,
        }
    }
}

impl SourceConfig {
    pub fn new(key: impl Into<String>, name: impl Into<String>, weight: u32) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            weight,
            ..Self::default()
        }
    }

    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_departments<I, S>(mut self, departments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.departments = departments.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = Some(api_base.into());
        self
    }

    pub fn with_image_base(mut self, image_base: impl Into<String>) -> Self {
        self.image_base = Some(image_base.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }
}

fn default_religious_keywords() -> Vec<String> {
    [
        "madonna",
        "christ",
        "jesus",
        "virgin",
        "saint",
        "crucifixion",
        "annunciation",
        "nativity",
        "resurrection",
        "apostle",
        "biblical",
        "bible",
        "holy family",
        "angel",
        "pietà",
        "altarpiece",
        "lamentation",
        "adoration of the magi",
        "baptism",
        "religious",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for ArtConfig {
    fn default() -> Self {
        let mut rotation_intervals = BTreeMap::new();
        rotation_intervals.insert("portrait".to_string(), DEFAULT_ROTATION_INTERVAL_SECONDS);
        rotation_intervals.insert("landscape".to_string(), DEFAULT_ROTATION_INTERVAL_SECONDS);
        rotation_intervals.insert("tv".to_string(), 1200);

        Self {
            pool_size: DEFAULT_POOL_SIZE,
            pool_ttl_seconds: DEFAULT_POOL_TTL_SECONDS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            default_display: DEFAULT_DISPLAY.to_string(),
            rotation_intervals,
            sources: vec![
                SourceConfig::new("artic", "Art Institute of Chicago", 35)
                    .with_styles(["Impressionism", "Post-Impressionism", "Modernism", "Cubism", "Surrealism"]),
                SourceConfig::new("met", "The Metropolitan Museum of Art", 35)
                    .with_styles(["landscape", "portrait", "still life"])
                    // European Paintings
                    .with_departments(["11"]),
                SourceConfig::new("cleveland", "Cleveland Museum of Art", 20)
                    .with_styles(["painting", "landscape", "still life"]),
            ],
            religious_keywords: default_religious_keywords(),
        }
    }
}

impl ArtConfig {
    /// Load a JSON config file; fields absent from the file keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> SharedResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| SharedError::ConfigFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> SharedResult<Self> {
        serde_json::from_str(raw).map_err(|e| SharedError::DeserializationError {
            message: e.to_string(),
        })
    }

    /// Rotation interval for a display, falling back to the default display
    pub fn rotation_interval_for(&self, display: &str) -> u64 {
        let display = display.trim().to_lowercase();
        self.rotation_intervals
            .get(&display)
            .or_else(|| self.rotation_intervals.get(&self.default_display))
            .copied()
            .unwrap_or(DEFAULT_ROTATION_INTERVAL_SECONDS)
    }

    pub fn enabled_sources(&self) -> impl Iterator<Item = &SourceConfig> {
        self.sources.iter().filter(|s| s.enabled)
    }

    pub fn source(&self, key: &str) -> Option<&SourceConfig> {
        self.sources.iter().find(|s| s.key == key)
    }

    pub fn source_mut(&mut self, key: &str) -> Option<&mut SourceConfig> {
        self.sources.iter_mut().find(|s| s.key == key)
    }

    /// Reject configurations the service cannot run with
    pub fn validate(&self) -> SharedResult<()> {
        if self.pool_size == 0 || self.pool_size > MAX_POOL_SIZE {
            return Err(invalid("poolSize", &self.pool_size.to_string()));
        }
        if self.pool_ttl_seconds == 0 || self.pool_ttl_seconds > MAX_POOL_TTL_SECONDS {
            return Err(invalid("poolTtlSeconds", &self.pool_ttl_seconds.to_string()));
        }
        if self.retry_delay_ms > MAX_RETRY_DELAY_MS {
            return Err(invalid("retryDelayMs", &self.retry_delay_ms.to_string()));
        }
        if self.request_timeout_ms == 0 || self.request_timeout_ms > MAX_REQUEST_TIMEOUT_MS {
            return Err(invalid("requestTimeoutMs", &self.request_timeout_ms.to_string()));
        }
        if let Some((display, secs)) = self
            .rotation_intervals
            .iter()
            .find(|(_, secs)| **secs == 0 || **secs > MAX_ROTATION_INTERVAL_SECONDS)
        {
            return Err(invalid(&format!("rotationIntervals.{display}"), &secs.to_string()));
        }
        if !self.rotation_intervals.contains_key(&self.default_display) {
            return Err(invalid("defaultDisplay", &self.default_display));
        }
        if let Some(source) = self.sources.iter().find(|s| s.key.trim().is_empty()) {
            return Err(invalid("sources.key", &source.name));
        }
        if !self.enabled_sources().any(|s| s.weight > 0) {
            return Err(invalid("sources", "no enabled source with a positive weight"));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str) -> SharedError {
    SharedError::InvalidConfig {
        field: field.to_string(),
        value: value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = ArtConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.pool_size, 12);
        assert_eq!(config.pool_ttl_seconds, 3600);
        assert_eq!(config.retry_delay_ms, 500);

        let keys: Vec<&str> = config.enabled_sources().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["artic", "met", "cleveland"]);
    }

    #[test]
    fn test_rotation_interval_fallback() {
        let config = ArtConfig::default();
        assert_eq!(config.rotation_interval_for("tv"), 1200);
        assert_eq!(config.rotation_interval_for("PORTRAIT"), 600);
        assert_eq!(
            config.rotation_interval_for("hallway"),
            config.rotation_interval_for(DEFAULT_DISPLAY)
        );
    }

    #[test]
    fn test_validate_rejects_no_enabled_sources() {
        let mut config = ArtConfig::default();
        for source in config.sources.iter_mut() {
            source.enabled = false;
        }
        assert!(matches!(config.validate(), Err(SharedError::InvalidConfig { .. })));

        let mut config = ArtConfig::default();
        for source in config.sources.iter_mut() {
            source.weight = 0;
        }
        assert!(matches!(config.validate(), Err(SharedError::InvalidConfig { .. })));
    }

    #[test]
    fn test_validate_rejects_zero_values() {
        let mut config = ArtConfig::default();
        config.pool_size = 0;
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.rotation_intervals.insert("tv".to_string(), 0);
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.default_display = "hallway".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_oversized_values() {
        let mut config = ArtConfig::default();
        config.rotation_intervals.insert("landscape".to_string(), 1 << 61);
        assert!(matches!(config.validate(), Err(SharedError::InvalidConfig { .. })));

        let mut config = ArtConfig::default();
        config.pool_ttl_seconds = u64::MAX;
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.pool_size = MAX_POOL_SIZE + 1;
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.retry_delay_ms = MAX_RETRY_DELAY_MS + 1;
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());

        let mut config = ArtConfig::default();
        config.pool_size = MAX_POOL_SIZE;
        config.pool_ttl_seconds = MAX_POOL_TTL_SECONDS;
        config.rotation_intervals.insert("tv".to_string(), MAX_ROTATION_INTERVAL_SECONDS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_overlays_defaults() {
        let config = ArtConfig::from_json_str(r#"{ "poolSize": 4, "rotationIntervals": { "portrait": 60 } }"#).unwrap();
        assert_eq!(config.pool_size, 4);
        assert_eq!(config.pool_ttl_seconds, DEFAULT_POOL_TTL_SECONDS);
        assert_eq!(config.rotation_interval_for("portrait"), 60);
        assert_eq!(config.sources.len(), 3);
        // Replacing the map drops the default display entry
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sources": [ {{ "key": "artic", "name": "Art Institute of Chicago", "weight": 10 }} ], "religiousKeywords": ["madonna"] }}"#
        )
        .unwrap();

        let config = ArtConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.sources.len(), 1);
        assert!(config.sources[0].enabled);
        assert_eq!(config.sources[0].weight, 10);
        assert_eq!(config.religious_keywords, vec!["madonna".to_string()]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = ArtConfig::from_json_file("/definitely/not/here.json");
        assert!(matches!(result, Err(SharedError::ConfigFile { .. })));
    }
}
