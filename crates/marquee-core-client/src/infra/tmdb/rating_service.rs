// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::ratings::models::{RatedMovie, Rating};
use crate::domain::ratings::services::RatingService;
use crate::domain::session::models::Session;
use crate::domain::shared::models::{MovieId, Page, RequestError};
use crate::infra::tmdb::dtos::{PageResponse, RatedMovieResponse, RatingRequest};
use crate::infra::tmdb::TmdbClient;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl RatingService for TmdbClient {
    async fn rate_movie(
        &self,
        session: &Session,
        movie_id: &MovieId,
        rating: Rating,
    ) -> Result<(), RequestError> {
        let request = self
            .request(Method::POST, &format!("/movie/{movie_id}/rating"))
            .query(&[("session_id", session.session_id.as_str())])
            .json(&RatingRequest {
                value: rating.value(),
            });
        self.send_expecting_success("rating", request).await
    }

    async fn delete_rating(
        &self,
        session: &Session,
        movie_id: &MovieId,
    ) -> Result<(), RequestError> {
        let request = self
            .request(Method::DELETE, &format!("/movie/{movie_id}/rating"))
            .query(&[("session_id", session.session_id.as_str())]);
        self.send_expecting_success("rating deletion", request)
            .await
    }

    async fn load_rated_movies(
        &self,
        session: &Session,
        page: u32,
    ) -> Result<Page<RatedMovie>, RequestError> {
        let request = self
            .request(
                Method::GET,
                &format!("/account/{}/rated/movies", session.account_id),
            )
            .query(&[
                ("session_id", session.session_id.as_str().to_string()),
                ("page", page.to_string()),
            ]);
        let response: PageResponse<RatedMovieResponse> =
            self.send("rated movies", request).await?;
        Ok(response.into_model("rated movies", RatedMovie::try_from)?)
    }
}
