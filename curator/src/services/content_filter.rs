//! Religious content filter applied by every source adapter

use shared::Artwork;

/// Case-insensitive keyword denylist over title, artist and style
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    keywords: Vec<String>,
}

impl ContentFilter {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        Self { keywords }
    }

    /// Filter that lets everything through
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        !self.keywords.is_empty()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_religious(&self, artwork: &Artwork) -> bool {
        if self.keywords.is_empty() {
            return false;
        }

        [&artwork.title, &artwork.artist, &artwork.style].iter().any(|field| {
            let field = field.to_lowercase();
            self.keywords.iter().any(|keyword| field.contains(keyword.as_str()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artwork(title: &str, artist: &str, style: &str) -> Artwork {
        Artwork::new("Test Museum", "1", "https://img.example/1.jpg")
            .with_title(Some(title))
            .with_artist(Some(artist))
            .with_style(Some(style))
    }

    #[test]
    fn test_matches_title_case_insensitively() {
        let filter = ContentFilter::new(["Madonna", "saint"]);
        assert!(filter.is_religious(&artwork("Madonna and Child", "Unknown", "Gothic")));
        assert!(filter.is_religious(&artwork("THE MADONNA", "Unknown", "Gothic")));
        assert!(!filter.is_religious(&artwork("Water Lilies", "Claude Monet", "Impressionism")));
    }

    #[test]
    fn test_matches_artist_and_style() {
        let filter = ContentFilter::new(["saint", "religious"]);
        assert!(filter.is_religious(&artwork("Portrait", "Master of Saint Giles", "Gothic")));
        assert!(filter.is_religious(&artwork("Panel", "Unknown", "Religious Art")));
    }

    #[test]
    fn test_blank_keywords_are_ignored() {
        let filter = ContentFilter::new(["", "   "]);
        assert!(!filter.is_active());
        assert!(!filter.is_religious(&artwork("Madonna and Child", "Unknown", "Gothic")));
        assert!(!ContentFilter::disabled().is_religious(&artwork("Madonna", "x", "y")));
    }
}
