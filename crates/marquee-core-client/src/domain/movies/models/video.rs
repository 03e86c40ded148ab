// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    /// "Trailer", "Teaser", "Clip", …
    pub kind: String,
    pub official: bool,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind.eq_ignore_ascii_case("trailer")
    }

    pub fn watch_url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }

    /// Picks an official trailer if there is one, otherwise any trailer.
    pub fn best_trailer(videos: &[Video]) -> Option<&Video> {
        videos
            .iter()
            .filter(|video| video.is_trailer())
            .max_by_key(|video| video.official)
    }
}
