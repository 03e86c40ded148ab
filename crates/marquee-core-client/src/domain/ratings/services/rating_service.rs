// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::ratings::models::{RatedMovie, Rating};
use crate::domain::session::models::Session;
use crate::domain::shared::models::{MovieId, Page, RequestError};

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait RatingService: SendUnlessWasm + SyncUnlessWasm {
    async fn rate_movie(
        &self,
        session: &Session,
        movie_id: &MovieId,
        rating: Rating,
    ) -> Result<(), RequestError>;
    async fn delete_rating(&self, session: &Session, movie_id: &MovieId)
        -> Result<(), RequestError>;
    async fn load_rated_movies(
        &self,
        session: &Session,
        page: u32,
    ) -> Result<Page<RatedMovie>, RequestError>;
}
