// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::favorites::services::FavoritesService;
use crate::domain::movies::models::MovieSummary;
use crate::domain::session::models::Session;
use crate::domain::shared::models::{MovieId, Page, RequestError};
use crate::infra::tmdb::dtos::{FavoriteRequest, MovieSummaryResponse, PageResponse};
use crate::infra::tmdb::TmdbClient;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl FavoritesService for TmdbClient {
    async fn load_favorites(
        &self,
        session: &Session,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError> {
        let request = self
            .request(
                Method::GET,
                &format!("/account/{}/favorite/movies", session.account_id),
            )
            .query(&[
                ("session_id", session.session_id.as_str().to_string()),
                ("page", page.to_string()),
            ]);
        let response: PageResponse<MovieSummaryResponse> =
            self.send("favorite movies", request).await?;
        Ok(response.into_model("favorite movies", MovieSummary::try_from)?)
    }

    async fn set_favorite(
        &self,
        session: &Session,
        movie_id: &MovieId,
        is_favorite: bool,
    ) -> Result<(), RequestError> {
        let request = self
            .request(
                Method::POST,
                &format!("/account/{}/favorite", session.account_id),
            )
            .query(&[("session_id", session.session_id.as_str())])
            .json(&FavoriteRequest {
                media_type: "movie",
                media_id: movie_id.value(),
                favorite: is_favorite,
            });
        self.send_expecting_success("favorite", request).await
    }
}
