// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use reqwest::Method;

use crate::domain::movies::models::{
    Credits, Genre, MovieDetails, MovieList, MovieSummary, Review, Video,
};
use crate::domain::movies::services::MovieCatalogService;
use crate::domain::shared::models::{GenreId, MovieId, Page, RequestError};
use crate::infra::tmdb::dtos::{
    CreditsResponse, GenreListResponse, MovieDetailsResponse, MovieSummaryResponse,
    PageResponse, ReviewResponse, VideoListResponse,
};
use crate::infra::tmdb::TmdbClient;

fn list_path(list: MovieList) -> String {
    match list {
        MovieList::Popular => "/movie/popular".to_string(),
        MovieList::TopRated => "/movie/top_rated".to_string(),
        MovieList::NowPlaying => "/movie/now_playing".to_string(),
        MovieList::Upcoming => "/movie/upcoming".to_string(),
        MovieList::Trending(window) => format!("/trending/movie/{window}"),
    }
}

impl TmdbClient {
    async fn load_movie_page(
        &self,
        resource: &str,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Page<MovieSummary>, RequestError> {
        let request = self.request(Method::GET, path).query(query);
        let response: PageResponse<MovieSummaryResponse> = self.send(resource, request).await?;
        Ok(response.into_model(resource, MovieSummary::try_from)?)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl MovieCatalogService for TmdbClient {
    async fn load_list(
        &self,
        list: MovieList,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError> {
        self.load_movie_page(
            &list.to_string(),
            &list_path(list),
            &[("page", page.to_string())],
        )
        .await
    }

    async fn search_movies(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError> {
        self.load_movie_page(
            "search results",
            "/search/movie",
            &[("query", query.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn discover_by_genre(
        &self,
        genre: &GenreId,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError> {
        self.load_movie_page(
            "discover results",
            "/discover/movie",
            &[("with_genres", genre.to_string()), ("page", page.to_string())],
        )
        .await
    }

    async fn load_genres(&self) -> Result<Vec<Genre>, RequestError> {
        let request = self.request(Method::GET, "/genre/movie/list");
        let response: GenreListResponse = self.send("genre list", request).await?;
        Ok(response.into_model()?)
    }

    async fn load_movie_details(&self, movie_id: &MovieId) -> Result<MovieDetails, RequestError> {
        let request = self.request(Method::GET, &format!("/movie/{movie_id}"));
        let response: MovieDetailsResponse = self.send("movie details", request).await?;
        Ok(response.try_into()?)
    }

    async fn load_credits(&self, movie_id: &MovieId) -> Result<Credits, RequestError> {
        let request = self.request(Method::GET, &format!("/movie/{movie_id}/credits"));
        let response: CreditsResponse = self.send("credits", request).await?;
        Ok(response.try_into()?)
    }

    async fn load_videos(&self, movie_id: &MovieId) -> Result<Vec<Video>, RequestError> {
        let request = self.request(Method::GET, &format!("/movie/{movie_id}/videos"));
        let response: VideoListResponse = self.send("video list", request).await?;
        Ok(response.into_model()?)
    }

    async fn load_recommendations(
        &self,
        movie_id: &MovieId,
        page: u32,
    ) -> Result<Page<MovieSummary>, RequestError> {
        self.load_movie_page(
            "recommendations",
            &format!("/movie/{movie_id}/recommendations"),
            &[("page", page.to_string())],
        )
        .await
    }

    async fn load_reviews(
        &self,
        movie_id: &MovieId,
        page: u32,
    ) -> Result<Page<Review>, RequestError> {
        let request = self
            .request(Method::GET, &format!("/movie/{movie_id}/reviews"))
            .query(&[("page", page)]);
        let response: PageResponse<ReviewResponse> = self.send("reviews", request).await?;
        Ok(response.into_model("reviews", Review::try_from)?)
    }
}
