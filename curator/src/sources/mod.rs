//! Museum source adapters
//!
//! Each adapter queries one museum search API, normalizes candidates into
//! [`Artwork`], drops candidates with the wrong orientation, no image or
//! religious content, and picks one survivor at random.

pub mod artic;
pub mod cleveland;
pub mod met;

use std::sync::Arc;
use std::time::Duration;
use reqwest::{Client, Response, StatusCode};
use url::Url;

use shared::{ArtConfig, ArtFilters, Artwork, Orientation, SourceConfig};
use crate::error::{CuratorError, CuratorResult, SourceFailure};
use crate::services::content_filter::ContentFilter;
use crate::traits::{ArtSource, RandomSource};

pub use artic::ArticSource;
pub use cleveland::ClevelandSource;
pub use met::MetSource;

/// Search term used when neither caller nor config supply a style
pub const DEFAULT_SEARCH_TERM: &str = "painting";

const USER_AGENT: &str = concat!("ambient-dashboard/", env!("CARGO_PKG_VERSION"));

/// Shared HTTP client for all adapters
pub fn build_http_client(timeout: Duration) -> CuratorResult<Client> {
    Ok(Client::builder().timeout(timeout).user_agent(USER_AGENT).build()?)
}

/// A registered adapter with its selection weight
#[derive(Clone)]
pub struct RegisteredSource {
    pub key: String,
    pub weight: u32,
    pub adapter: Arc<dyn ArtSource>,
}

/// Enabled adapters in configured order
#[derive(Clone, Default)]
pub struct SourceRegistry {
    entries: Vec<RegisteredSource>,
}

impl SourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an adapter; a later registration under the same key replaces it
    pub fn with_source(mut self, key: impl Into<String>, weight: u32, adapter: Arc<dyn ArtSource>) -> Self {
        let key = key.into();
        self.entries.retain(|e| e.key != key);
        self.entries.push(RegisteredSource { key, weight, adapter });
        self
    }

    /// Build adapters for every enabled source in the config
    pub fn from_config(
        config: &ArtConfig,
        client: Client,
        filter: Arc<ContentFilter>,
        rng: Arc<dyn RandomSource>,
    ) -> CuratorResult<Self> {
        let mut registry = Self::new();

        for source in config.enabled_sources() {
            let adapter: Arc<dyn ArtSource> = match source.key.as_str() {
                "artic" => Arc::new(ArticSource::new(source, client.clone(), filter.clone(), rng.clone())?),
                "met" => Arc::new(MetSource::new(source, client.clone(), filter.clone(), rng.clone())?),
                "cleveland" => Arc::new(ClevelandSource::new(source, client.clone(), filter.clone(), rng.clone())?),
                other => return Err(CuratorError::config(format!("Unknown art source '{other}'"))),
            };
            registry = registry.with_source(source.key.clone(), source.weight, adapter);
        }

        if registry.is_empty() {
            return Err(CuratorError::NoEnabledSources);
        }
        Ok(registry)
    }

    pub fn weights(&self) -> Vec<(String, u32)> {
        self.entries.iter().map(|e| (e.key.clone(), e.weight)).collect()
    }

    pub fn adapter(&self, key: &str) -> Option<&Arc<dyn ArtSource>> {
        self.entries.iter().find(|e| e.key == key).map(|e| &e.adapter)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Settings common to every adapter, resolved from a [`SourceConfig`]
pub(crate) struct AdapterSettings {
    pub name: String,
    pub api_base: Url,
    pub styles: Vec<String>,
    pub departments: Vec<String>,
}

impl AdapterSettings {
    pub fn resolve(config: &SourceConfig, default_api_base: &str) -> CuratorResult<Self> {
        let raw = config.api_base.as_deref().unwrap_or(default_api_base);
        Ok(Self {
            name: config.name.clone(),
            api_base: parse_base_url(raw)?,
            styles: config.styles.clone(),
            departments: config.departments.clone(),
        })
    }

    pub fn endpoint(&self, path: &str) -> Result<Url, SourceFailure> {
        self.api_base
            .join(path)
            .map_err(|e| SourceFailure::InvalidResponse(format!("bad endpoint {path}: {e}")))
    }
}

/// Parse a base URL so that relative joins append to its path
pub(crate) fn parse_base_url(raw: &str) -> CuratorResult<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    Url::parse(&raw).map_err(|e| CuratorError::config(format!("Invalid source URL '{raw}': {e}")))
}

/// Search term: caller style, else configured style, else the default
pub(crate) fn choose_search_term(filters: &ArtFilters, configured: &[String], rng: &dyn RandomSource) -> String {
    let requested = filters.normalized_styles();
    let candidates: Vec<&str> = if !requested.is_empty() {
        requested.iter().map(String::as_str).collect()
    } else {
        configured.iter().map(|s| s.trim()).filter(|s| !s.is_empty()).collect()
    };

    if candidates.is_empty() {
        return DEFAULT_SEARCH_TERM.to_string();
    }
    candidates[rng.next_index(candidates.len())].to_string()
}

/// Random member of a non-empty list
pub(crate) fn choose<'a, T>(items: &'a [T], rng: &dyn RandomSource) -> Option<&'a T> {
    if items.is_empty() {
        None
    } else {
        items.get(rng.next_index(items.len()))
    }
}

/// Check a single candidate against the adapter contract
pub(crate) fn check_candidate(
    artwork: &Artwork,
    orientation: Option<Orientation>,
    filter: &ContentFilter,
) -> Result<(), SourceFailure> {
    if !artwork.has_image() {
        return Err(SourceFailure::NoResults);
    }
    if let Some(wanted) = orientation {
        if artwork.orientation != Some(wanted) {
            return Err(SourceFailure::NoOrientationMatch(wanted.to_string()));
        }
    }
    if filter.is_religious(artwork) {
        return Err(SourceFailure::AllReligious);
    }
    Ok(())
}

/// Pick one random candidate that passes image, orientation and content checks
pub(crate) fn select_candidate(
    candidates: Vec<Artwork>,
    orientation: Option<Orientation>,
    filter: &ContentFilter,
    rng: &dyn RandomSource,
) -> Result<Artwork, SourceFailure> {
    let with_image: Vec<Artwork> = candidates.into_iter().filter(Artwork::has_image).collect();
    if with_image.is_empty() {
        return Err(SourceFailure::NoResults);
    }

    let matching: Vec<Artwork> = match orientation {
        Some(wanted) => with_image
            .into_iter()
            .filter(|a| a.orientation == Some(wanted))
            .collect(),
        None => with_image,
    };
    if matching.is_empty() {
        let wanted = orientation.map(|o| o.to_string()).unwrap_or_default();
        return Err(SourceFailure::NoOrientationMatch(wanted));
    }

    let mut secular: Vec<Artwork> = matching.into_iter().filter(|a| !filter.is_religious(a)).collect();
    if secular.is_empty() {
        return Err(SourceFailure::AllReligious);
    }

    let index = rng.next_index(secular.len());
    Ok(secular.swap_remove(index))
}

/// Map a non-success response to a failure
pub(crate) fn check_status(response: Response) -> Result<Response, SourceFailure> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(match status {
        StatusCode::TOO_MANY_REQUESTS => SourceFailure::RateLimitExceeded,
        StatusCode::NOT_FOUND => SourceFailure::NoResults,
        other => SourceFailure::HttpStatus(other.as_u16()),
    })
}

/// Read a dimension given either as a JSON number or a numeric string
pub(crate) fn dimension(value: Option<&serde_json::Value>) -> Option<f64> {
    match value? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// First line of a multi-line credit such as ARTIC's `artist_display`
pub(crate) fn first_line(value: Option<&str>) -> Option<&str> {
    value.and_then(|v| v.lines().next())
}
