//! Art Institute of Chicago adapter

use std::sync::Arc;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use shared::{ArtFilters, Artwork, Orientation, SourceConfig};
use crate::error::{CuratorResult, SourceFailure};
use crate::services::content_filter::ContentFilter;
use crate::sources::{check_status, choose_search_term, first_line, select_candidate, AdapterSettings};
use crate::traits::{ArtSource, RandomSource};

pub const ARTIC_API_BASE: &str = "https://api.artic.edu";
pub const ARTIC_IIIF_BASE: &str = "https://www.artic.edu/iiif/2";

const SEARCH_PATH: &str = "api/v1/artworks/search";
const SEARCH_FIELDS: &str = "id,title,artist_display,date_display,image_id,style_title,department_title,thumbnail";
const PAGE_LIMIT: usize = 40;
const MAX_PAGE: usize = 5;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<ArticArtwork>,
}

#[derive(Debug, Deserialize)]
struct ArticArtwork {
    id: u64,
    title: Option<String>,
    artist_display: Option<String>,
    date_display: Option<String>,
    image_id: Option<String>,
    style_title: Option<String>,
    department_title: Option<String>,
    thumbnail: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    width: Option<f64>,
    height: Option<f64>,
}

/// Adapter for the ARTIC public search API
pub struct ArticSource {
    client: Client,
    settings: AdapterSettings,
    iiif_base: String,
    filter: Arc<ContentFilter>,
    rng: Arc<dyn RandomSource>,
}

impl ArticSource {
    pub fn new(
        config: &SourceConfig,
        client: Client,
        filter: Arc<ContentFilter>,
        rng: Arc<dyn RandomSource>,
    ) -> CuratorResult<Self> {
        let iiif_base = config
            .image_base
            .as_deref()
            .unwrap_or(ARTIC_IIIF_BASE)
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            client,
            settings: AdapterSettings::resolve(config, ARTIC_API_BASE)?,
            iiif_base,
            filter,
            rng,
        })
    }

    fn image_url(&self, image_id: &str) -> String {
        format!("{}/{}/full/843,/0/default.jpg", self.iiif_base, image_id)
    }

    fn in_allowed_department(&self, item: &ArticArtwork) -> bool {
        if self.settings.departments.is_empty() {
            return true;
        }
        item.department_title.as_deref().is_some_and(|dept| {
            self.settings
                .departments
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(dept.trim()))
        })
    }

    fn normalize(&self, item: ArticArtwork) -> Option<Artwork> {
        let image_id = item.image_id.as_deref().map(str::trim).filter(|id| !id.is_empty())?;
        let (width, height) = item
            .thumbnail
            .as_ref()
            .map(|t| (t.width, t.height))
            .unwrap_or((None, None));

        Some(
            Artwork::new(&self.settings.name, item.id.to_string(), self.image_url(image_id))
                .with_title(item.title.as_deref())
                .with_artist(first_line(item.artist_display.as_deref()))
                .with_date(item.date_display.as_deref())
                .with_style(item.style_title.as_deref())
                .with_dimensions(width, height),
        )
    }
}

#[async_trait]
impl ArtSource for ArticSource {
    async fn fetch_artwork(&self, orientation: Option<Orientation>, filters: &ArtFilters) -> Result<Artwork, SourceFailure> {
        let term = choose_search_term(filters, &self.settings.styles, self.rng.as_ref());
        let page = (1 + self.rng.next_index(MAX_PAGE)).to_string();
        let limit = PAGE_LIMIT.to_string();
        let url = self.settings.endpoint(SEARCH_PATH)?;

        debug!("ARTIC search '{}' page {}", term, page);

        let response = self
            .client
            .get(url)
            .query(&[
                ("q", term.as_str()),
                ("page", page.as_str()),
                ("limit", limit.as_str()),
                ("fields", SEARCH_FIELDS),
            ])
            .send()
            .await?;

        let body: SearchResponse = check_status(response)?.json().await?;

        let candidates: Vec<Artwork> = body
            .data
            .into_iter()
            .filter(|item| self.in_allowed_department(item))
            .filter_map(|item| self.normalize(item))
            .collect();

        select_candidate(candidates, orientation, &self.filter, self.rng.as_ref())
    }
}
