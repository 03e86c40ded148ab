// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::movies::models::MovieSummary;
use crate::domain::shared::models::{FetchError, MovieId, MutationError};

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FavoritesDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Replaces the local set with the first page of the account's favorites.
    async fn refresh(&self) -> Result<Vec<MovieSummary>, FetchError>;
    /// Flips the membership of `movie`. Returns whether the movie is a favorite afterwards.
    async fn toggle(&self, movie: &MovieSummary) -> Result<bool, MutationError>;
    fn is_favorite(&self, movie_id: &MovieId) -> bool;
    fn favorites(&self) -> Vec<MovieSummary>;
    fn clear(&self);
}
