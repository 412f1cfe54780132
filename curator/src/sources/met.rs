//! Metropolitan Museum of Art adapter
//!
//! The Met search endpoint returns object ids only, so candidates are fetched
//! one object at a time and the first acceptable one wins.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use shared::{ArtFilters, Artwork, Orientation, SourceConfig};
use crate::error::{CuratorResult, SourceFailure};
use crate::services::content_filter::ContentFilter;
use crate::sources::{check_candidate, check_status, choose, choose_search_term, dimension, AdapterSettings};
use crate::traits::{ArtSource, RandomSource};

pub const MET_API_BASE: &str = "https://collectionapi.metmuseum.org";

const SEARCH_PATH: &str = "public/collection/v1/search";
const OBJECT_PATH: &str = "public/collection/v1/objects/";
/// Objects inspected per request before giving up
pub const MET_OBJECT_ATTEMPTS: usize = 8;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(rename = "objectIDs", default)]
    object_ids: Option<Vec<u64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetObject {
    #[serde(rename = "objectID")]
    object_id: u64,
    title: Option<String>,
    artist_display_name: Option<String>,
    object_date: Option<String>,
    primary_image: Option<String>,
    primary_image_small: Option<String>,
    classification: Option<String>,
    #[serde(default)]
    measurements: Option<Vec<Measurement>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Measurement {
    element_measurements: Option<HashMap<String, serde_json::Value>>,
}

/// Adapter for the Met collection API
pub struct MetSource {
    client: Client,
    settings: AdapterSettings,
    filter: Arc<ContentFilter>,
    rng: Arc<dyn RandomSource>,
}

impl MetSource {
    pub fn new(
        config: &SourceConfig,
        client: Client,
        filter: Arc<ContentFilter>,
        rng: Arc<dyn RandomSource>,
    ) -> CuratorResult<Self> {
        Ok(Self {
            client,
            settings: AdapterSettings::resolve(config, MET_API_BASE)?,
            filter,
            rng,
        })
    }

    async fn search(&self, term: &str) -> Result<Vec<u64>, SourceFailure> {
        let url = self.settings.endpoint(SEARCH_PATH)?;
        let mut query = vec![("hasImages", "true".to_string()), ("q", term.to_string())];
        if let Some(department) = choose(&self.settings.departments, self.rng.as_ref()) {
            query.push(("departmentId", department.clone()));
        }

        let response = self.client.get(url).query(&query).send().await?;
        let body: SearchResponse = check_status(response)?.json().await?;
        Ok(body.object_ids.unwrap_or_default())
    }

    async fn fetch_object(&self, id: u64) -> Result<MetObject, SourceFailure> {
        let url = self.settings.endpoint(&format!("{OBJECT_PATH}{id}"))?;
        let response = self.client.get(url).send().await?;
        Ok(check_status(response)?.json().await?)
    }

    fn normalize(&self, object: MetObject) -> Artwork {
        let image = object
            .primary_image_small
            .as_deref()
            .filter(|url| !url.trim().is_empty())
            .or(object.primary_image.as_deref())
            .unwrap_or_default();

        // First measurement carrying both height and width
        let (width, height) = object
            .measurements
            .iter()
            .flatten()
            .filter_map(|m| m.element_measurements.as_ref())
            .map(|dims| (dimension(dims.get("Width")), dimension(dims.get("Height"))))
            .find(|(w, h)| w.is_some() && h.is_some())
            .unwrap_or((None, None));

        Artwork::new(&self.settings.name, object.object_id.to_string(), image)
            .with_title(object.title.as_deref())
            .with_artist(object.artist_display_name.as_deref())
            .with_date(object.object_date.as_deref())
            .with_style(object.classification.as_deref())
            .with_dimensions(width, height)
    }
}

#[async_trait]
impl ArtSource for MetSource {
    async fn fetch_artwork(&self, orientation: Option<Orientation>, filters: &ArtFilters) -> Result<Artwork, SourceFailure> {
        let term = choose_search_term(filters, &self.settings.styles, self.rng.as_ref());
        let ids = self.search(&term).await?;
        if ids.is_empty() {
            return Err(SourceFailure::NoResults);
        }

        debug!("Met search '{}' returned {} objects", term, ids.len());

        let mut remaining: Vec<u64> = ids.into_iter().collect::<HashSet<_>>().into_iter().collect();
        remaining.sort_unstable();
        let budget = MET_OBJECT_ATTEMPTS.min(remaining.len());
        let mut last_failure = SourceFailure::NoResults;

        for _ in 0..budget {
            let id = remaining.swap_remove(self.rng.next_index(remaining.len()));

            let artwork = match self.fetch_object(id).await {
                Ok(object) => self.normalize(object),
                Err(failure) => {
                    debug!("Met object {} unavailable: {}", id, failure);
                    last_failure = failure;
                    continue;
                }
            };

            match check_candidate(&artwork, orientation, &self.filter) {
                Ok(()) => return Ok(artwork),
                Err(failure) => {
                    debug!("Met object {} rejected: {}", id, failure);
                    last_failure = failure;
                }
            }
        }

        Err(last_failure)
    }
}
