//! Command line and environment configuration
//!
//! Every flag falls back to an environment variable, so a `.env` file loaded
//! through dotenvy is enough to run the service.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use clap::Parser;

use shared::ArtConfig;
use crate::error::{DashboardError, DashboardResult};

#[derive(Parser, Debug, Clone)]
#[command(name = "dashboard")]
#[command(about = "Ambient dashboard art rotation service")]
pub struct DashboardArgs {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "DASHBOARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for the HTTP server
    #[arg(long, env = "DASHBOARD_PORT", default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "DASHBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// JSON file overlaying the built-in art configuration
    #[arg(long, env = "ART_CONFIG")]
    pub art_config: Option<PathBuf>,

    /// Artworks per pool
    #[arg(long, env = "ART_POOL_SIZE")]
    pub pool_size: Option<usize>,

    /// Pool lifetime in seconds
    #[arg(long, env = "ART_POOL_TTL_SECONDS")]
    pub pool_ttl_seconds: Option<u64>,

    /// Pause between failed source attempts
    #[arg(long, env = "ART_RETRY_DELAY_MS")]
    pub retry_delay_ms: Option<u64>,

    /// Timeout for a single museum API request
    #[arg(long, env = "ART_REQUEST_TIMEOUT_MS")]
    pub request_timeout_ms: Option<u64>,

    /// How often expired cache entries are purged
    #[arg(long, env = "ART_CACHE_PURGE_SECONDS", default_value = "60")]
    pub cache_purge_seconds: u64,
}

impl DashboardArgs {
    pub fn bind_address(&self) -> DashboardResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| DashboardError::config(format!("Invalid bind address {}:{}: {}", self.host, self.port, e)))
    }

    pub fn cache_purge_interval(&self) -> Duration {
        Duration::from_secs(self.cache_purge_seconds.max(1))
    }

    /// Defaults, then the config file, then flag overrides; validated
    pub fn art_config(&self) -> DashboardResult<ArtConfig> {
        let mut config = match &self.art_config {
            Some(path) => ArtConfig::from_json_file(path)?,
            None => ArtConfig::default(),
        };

        if let Some(pool_size) = self.pool_size {
            config.pool_size = pool_size;
        }
        if let Some(ttl) = self.pool_ttl_seconds {
            config.pool_ttl_seconds = ttl;
        }
        if let Some(delay) = self.retry_delay_ms {
            config.retry_delay_ms = delay;
        }
        if let Some(timeout) = self.request_timeout_ms {
            config.request_timeout_ms = timeout;
        }

        config.validate()?;
        Ok(config)
    }
}
