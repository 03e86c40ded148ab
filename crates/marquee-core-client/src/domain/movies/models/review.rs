// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub author: String,
    pub content: String,
    /// The author's own rating (1–10), if they left one.
    pub rating: Option<f32>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
