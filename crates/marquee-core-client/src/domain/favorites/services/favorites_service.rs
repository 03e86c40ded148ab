// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::movies::models::MovieSummary;
use crate::domain::session::models::Session;
use crate::domain::shared::models::{MovieId, Page, RequestError};

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FavoritesService: SendUnlessWasm + SyncUnlessWasm {
    async fn load_favorites(
        &self,
        session: &Session,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError>;
    async fn set_favorite(
        &self,
        session: &Session,
        movie_id: &MovieId,
        is_favorite: bool,
    ) -> Result<(), RequestError>;
}
