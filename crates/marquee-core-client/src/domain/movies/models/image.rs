// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum ImageSize {
    /// Thumbnails, e.g. reviewer avatars.
    #[strum(serialize = "w100")]
    W100,
    /// Posters in listings.
    #[strum(serialize = "w500")]
    W500,
    #[strum(serialize = "original")]
    Original,
}

/// Resolves TMDB image paths (e.g. `/abc.jpg`) against the image base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlBuilder {
    base_url: String,
}

impl ImageUrlBuilder {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        let path = path.map(str::trim).filter(|p| !p.is_empty())?;
        let path = path.trim_start_matches('/');
        Some(format!("{}/{}/{}", self.base_url, size, path))
    }
}

impl Default for ImageUrlBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_sized_urls() {
        let builder = ImageUrlBuilder::default();
        assert_eq!(
            builder.url(Some("/poster.jpg"), ImageSize::W500).as_deref(),
            Some("https://image.tmdb.org/t/p/w500/poster.jpg")
        );
        assert_eq!(
            builder.url(Some("/poster.jpg"), ImageSize::Original).as_deref(),
            Some("https://image.tmdb.org/t/p/original/poster.jpg")
        );
        assert_eq!(builder.url(None, ImageSize::W100), None);
        assert_eq!(builder.url(Some(""), ImageSize::W100), None);
    }
}
