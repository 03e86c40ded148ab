// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::movies::models::{
    Credits, Genre, MovieDetails, MovieList, MovieSummary, Review, Video,
};
use crate::domain::shared::models::{GenreId, MovieId, Page, RequestError};

/// Read-only access to the public movie catalog.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MovieCatalogService: SendUnlessWasm + SyncUnlessWasm {
    async fn load_list(
        &self,
        list: MovieList,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError>;
    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError>;
    async fn discover_by_genre(
        &self,
        genre: &GenreId,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError>;
    async fn load_genres(&self) -> Result<Vec<Genre>, RequestError>;
    async fn load_movie_details(&self, movie_id: &MovieId) -> Result<MovieDetails, RequestError>;
    async fn load_credits(&self, movie_id: &MovieId) -> Result<Credits, RequestError>;
    async fn load_videos(&self, movie_id: &MovieId) -> Result<Vec<Video>, RequestError>;
    async fn load_recommendations(
        &self,
        movie_id: &MovieId,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError>;
    async fn load_reviews(
        &self,
        movie_id: &MovieId,
        page: u32,
    ) -> Result<Page<Review>, RequestError>;
}
