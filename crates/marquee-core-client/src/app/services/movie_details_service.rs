// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{error, warn};

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::{DynImageUrlBuilder, DynMovieCatalogService};
use crate::domain::movies::models::{Credits, ImageSize, MovieDetailPage, Video};
use crate::domain::shared::models::MovieId;

#[derive(InjectDependencies)]
pub struct MovieDetailsService {
    #[inject]
    catalog_service: DynMovieCatalogService,
    #[inject]
    image_url_builder: DynImageUrlBuilder,
}

impl MovieDetailsService {
    /// Loads details, the first page of reviews and the first page of recommendations
    /// concurrently. If any of them fails the page is not shown at all.
    pub async fn load_detail_page(&self, movie_id: &MovieId) -> Option<MovieDetailPage> {
        let result = futures::try_join!(
            self.catalog_service.load_movie_details(movie_id),
            self.catalog_service.load_reviews(movie_id, 1),
            self.catalog_service.load_recommendations(movie_id, 1),
        );

        match result {
            Ok((details, reviews, recommendations)) => Some(MovieDetailPage {
                details,
                reviews,
                recommendations,
            }),
            Err(err) => {
                error!(
                    "Failed to load detail page for movie {}. {}",
                    movie_id,
                    err.to_string()
                );
                None
            }
        }
    }

    pub async fn load_credits(&self, movie_id: &MovieId) -> Credits {
        self.catalog_service
            .load_credits(movie_id)
            .await
            .unwrap_or_else(|err| {
                warn!("Failed to load credits for movie {}. {}", movie_id, err);
                Credits::default()
            })
    }

    pub async fn load_videos(&self, movie_id: &MovieId) -> Vec<Video> {
        self.catalog_service
            .load_videos(movie_id)
            .await
            .unwrap_or_else(|err| {
                warn!("Failed to load videos for movie {}. {}", movie_id, err);
                vec![]
            })
    }

    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        self.image_url_builder.url(path, size)
    }
}
