// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::movies::models::{Genre, MovieSummary, Review};
use crate::domain::shared::models::{MovieId, Page};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetails {
    pub id: MovieId,
    pub title: String,
    pub original_title: Option<String>,
    pub tagline: Option<String>,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<NaiveDate>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    pub genres: Vec<Genre>,
    pub vote_average: f32,
    pub vote_count: u32,
    pub status: Option<String>,
    pub homepage: Option<String>,
}

impl MovieDetails {
    /// The listing representation of this movie, e.g. to toggle it as a favorite from the
    /// detail page.
    pub fn summary(&self) -> MovieSummary {
        MovieSummary {
            id: self.id,
            title: self.title.clone(),
            overview: self.overview.clone(),
            poster_path: self.poster_path.clone(),
            backdrop_path: self.backdrop_path.clone(),
            vote_average: self.vote_average,
            release_date: self.release_date,
            genre_ids: self.genres.iter().map(|genre| genre.id).collect(),
        }
    }

    /// Formats the runtime as e.g. "2h 15m".
    pub fn formatted_runtime(&self) -> Option<String> {
        let runtime = self.runtime.filter(|r| *r > 0)?;
        Some(match (runtime / 60, runtime % 60) {
            (0, minutes) => format!("{minutes}m"),
            (hours, 0) => format!("{hours}h"),
            (hours, minutes) => format!("{hours}h {minutes}m"),
        })
    }
}

/// Everything the detail view shows at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDetailPage {
    pub details: MovieDetails,
    pub reviews: Page<Review>,
    pub recommendations: Page<MovieSummary>,
}
