//! Cleveland Museum of Art adapter

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use shared::{ArtFilters, Artwork, Orientation, SourceConfig};
use crate::error::{CuratorResult, SourceFailure};
use crate::services::content_filter::ContentFilter;
use crate::sources::{check_status, choose, choose_search_term, dimension, select_candidate, AdapterSettings};
use crate::traits::{ArtSource, RandomSource};

pub const CLEVELAND_API_BASE: &str = "https://openaccess-api.clevelandart.org";

const SEARCH_PATH: &str = "api/artworks/";
const PAGE_LIMIT: usize = 50;
const MAX_SKIP: usize = 100;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ClevelandArtwork>,
}

#[derive(Debug, Deserialize)]
struct ClevelandArtwork {
    id: u64,
    title: Option<String>,
    creation_date: Option<String>,
    #[serde(default)]
    creators: Vec<Creator>,
    #[serde(rename = "type")]
    kind: Option<String>,
    images: Option<Images>,
}

#[derive(Debug, Deserialize)]
struct Creator {
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Images {
    web: Option<WebImage>,
}

#[derive(Debug, Deserialize)]
struct WebImage {
    url: Option<String>,
    width: Option<serde_json::Value>,
    height: Option<serde_json::Value>,
}

/// Creator descriptions read "Claude Monet (French, 1840–1926)"
fn creator_name(description: &str) -> &str {
    description.split(" (").next().unwrap_or(description).trim()
}

/// Adapter for the Cleveland open access API
pub struct ClevelandSource {
    client: Client,
    settings: AdapterSettings,
    filter: Arc<ContentFilter>,
    rng: Arc<dyn RandomSource>,
}

impl ClevelandSource {
    pub fn new(
        config: &SourceConfig,
        client: Client,
        filter: Arc<ContentFilter>,
        rng: Arc<dyn RandomSource>,
    ) -> CuratorResult<Self> {
        Ok(Self {
            client,
            settings: AdapterSettings::resolve(config, CLEVELAND_API_BASE)?,
            filter,
            rng,
        })
    }

    fn normalize(&self, item: ClevelandArtwork) -> Option<Artwork> {
        let web = item.images.and_then(|images| images.web)?;
        let url = web.url.as_deref().map(str::trim).filter(|url| !url.is_empty())?;
        let artist = item
            .creators
            .first()
            .and_then(|c| c.description.as_deref())
            .map(creator_name);

        Some(
            Artwork::new(&self.settings.name, item.id.to_string(), url)
                .with_title(item.title.as_deref())
                .with_artist(artist)
                .with_date(item.creation_date.as_deref())
                .with_style(item.kind.as_deref())
                .with_dimensions(dimension(web.width.as_ref()), dimension(web.height.as_ref())),
        )
    }
}

#[async_trait]
impl ArtSource for ClevelandSource {
    async fn fetch_artwork(&self, orientation: Option<Orientation>, filters: &ArtFilters) -> Result<Artwork, SourceFailure> {
        let term = choose_search_term(filters, &self.settings.styles, self.rng.as_ref());
        let skip = self.rng.next_index(MAX_SKIP);
        let url = self.settings.endpoint(SEARCH_PATH)?;

        let mut query = vec![
            ("q", term.clone()),
            ("has_image", "1".to_string()),
            ("limit", PAGE_LIMIT.to_string()),
            ("skip", skip.to_string()),
        ];
        if let Some(department) = choose(&self.settings.departments, self.rng.as_ref()) {
            query.push(("department", department.clone()));
        }

        debug!("Cleveland search '{}' skip {}", term, skip);

        let response = self.client.get(url).query(&query).send().await?;
        let body: SearchResponse = check_status(response)?.json().await?;

        let candidates: Vec<Artwork> = body
            .data
            .into_iter()
            .filter_map(|item| self.normalize(item))
            .collect();

        select_candidate(candidates, orientation, &self.filter, self.rng.as_ref())
    }
}
