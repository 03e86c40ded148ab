// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::hash::{Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{GenreId, MovieId};

/// An immutable snapshot of a movie as it appears in listings. Equality is decided by `id`
/// alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSummary {
    pub id: MovieId,
    pub title: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: f32,
    pub release_date: Option<NaiveDate>,
    pub genre_ids: Vec<GenreId>,
}

impl MovieSummary {
    pub fn release_year(&self) -> Option<i32> {
        use chrono::Datelike;
        self.release_date.map(|date| date.year())
    }
}

impl PartialEq for MovieSummary {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MovieSummary {}

impl Hash for MovieSummary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
