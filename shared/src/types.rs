//! Core artwork types and identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

pub const UNTITLED: &str = "Untitled";
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";
pub const UNKNOWN_DATE: &str = "Unknown Date";
pub const UNKNOWN_STYLE: &str = "Unknown Style";

/// Signature used for cache keys when no style filter is active
pub const EMPTY_FILTER_SIGNATURE: &str = "all";

/// Image orientation derived from reported dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    /// Derive orientation from width and height.
    ///
    /// Returns `None` for square images and for missing, zero, negative or
    /// non-finite dimensions.
    pub fn from_dimensions(width: f64, height: f64) -> Option<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return None;
        }

        if height > width {
            Some(Orientation::Portrait)
        } else if width > height {
            Some(Orientation::Landscape)
        } else {
            None
        }
    }

    /// Orientation a display target needs from the sources.
    ///
    /// `tv` screens are landscape; unknown targets accept anything.
    pub fn for_display(display: &str) -> Option<Self> {
        match display.trim().to_lowercase().as_str() {
            "portrait" => Some(Orientation::Portrait),
            "landscape" | "tv" => Some(Orientation::Landscape),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A normalized artwork as returned by any museum source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artwork {
    pub id: String,
    pub source: String,
    pub image_url: String,
    pub title: String,
    pub artist: String,
    pub date: String,
    pub style: String,
    pub orientation: Option<Orientation>,
}

fn text_or(value: Option<&str>, fallback: &str) -> String {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(fallback)
        .to_string()
}

impl Artwork {
    /// Create an artwork with sentinel metadata and unknown orientation
    pub fn new(source: impl Into<String>, id: impl Into<String>, image_url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            image_url: image_url.into().trim().to_string(),
            title: UNTITLED.to_string(),
            artist: UNKNOWN_ARTIST.to_string(),
            date: UNKNOWN_DATE.to_string(),
            style: UNKNOWN_STYLE.to_string(),
            orientation: None,
        }
    }

    pub fn with_title(mut self, title: Option<&str>) -> Self {
        self.title = text_or(title, UNTITLED);
        self
    }

    pub fn with_artist(mut self, artist: Option<&str>) -> Self {
        self.artist = text_or(artist, UNKNOWN_ARTIST);
        self
    }

    pub fn with_date(mut self, date: Option<&str>) -> Self {
        self.date = text_or(date, UNKNOWN_DATE);
        self
    }

    pub fn with_style(mut self, style: Option<&str>) -> Self {
        self.style = text_or(style, UNKNOWN_STYLE);
        self
    }

    /// Set orientation from dimensions; either side missing means unknown
    pub fn with_dimensions(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.orientation = match (width, height) {
            (Some(w), Some(h)) => Orientation::from_dimensions(w, h),
            _ => None,
        };
        self
    }

    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }

    /// Identity within a pool
    pub fn dedupe_key(&self) -> (&str, &str) {
        (&self.source, &self.id)
    }
}

/// Style filters supplied by callers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtFilters {
    pub styles: Option<Vec<String>>,
}

impl ArtFilters {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_styles<I, S>(styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            styles: Some(styles.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a comma separated query value such as `Cubism,Surrealism`
    pub fn from_query(raw: Option<&str>) -> Self {
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::with_styles(raw.split(',')),
            _ => Self::none(),
        }
    }

    /// Trimmed, de-duplicated and sorted styles
    pub fn normalized_styles(&self) -> Vec<String> {
        let mut styles: Vec<String> = self
            .styles
            .iter()
            .flatten()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        styles.sort();
        styles.dedup();
        styles
    }

    pub fn is_empty(&self) -> bool {
        self.normalized_styles().is_empty()
    }

    /// Stable encoding used to partition cache keys
    pub fn signature(&self) -> String {
        let styles = self.normalized_styles();
        if styles.is_empty() {
            EMPTY_FILTER_SIGNATURE.to_string()
        } else {
            styles.join("-")
        }
    }
}
