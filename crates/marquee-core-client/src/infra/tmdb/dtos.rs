// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::movies::models::{
    CastMember, Credits, CrewMember, Genre, MovieDetails, MovieSummary, Review, Video,
};
use crate::domain::ratings::models::{RatedMovie, Rating};
use crate::domain::session::models::{AccountDetails, RequestToken};
use crate::domain::shared::models::{AccountId, GenreId, MovieId, Page, SchemaError, SessionId};

// Requests

#[derive(Serialize)]
pub struct ValidateWithLoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
    pub request_token: &'a str,
}

#[derive(Serialize)]
pub struct CreateSessionRequest<'a> {
    pub request_token: &'a str,
}

#[derive(Serialize)]
pub struct DeleteSessionRequest<'a> {
    pub session_id: &'a str,
}

#[derive(Serialize)]
pub struct FavoriteRequest {
    pub media_type: &'static str,
    pub media_id: u64,
    pub favorite: bool,
}

#[derive(Serialize)]
pub struct RatingRequest {
    pub value: f32,
}

// Responses

/// The body TMDB sends for errors and for writes.
#[derive(Deserialize, Debug)]
pub struct StatusResponse {
    pub success: Option<bool>,
    pub status_message: Option<String>,
}

#[derive(Deserialize)]
pub struct RequestTokenResponse {
    pub request_token: Option<String>,
}

#[derive(Deserialize)]
pub struct SessionResponse {
    pub session_id: Option<String>,
}

#[derive(Deserialize)]
pub struct AccountResponse {
    pub id: Option<u64>,
    pub username: Option<String>,
}

#[derive(Deserialize)]
pub struct PageResponse<T> {
    pub page: Option<u32>,
    pub results: Option<Vec<T>>,
    pub total_pages: Option<u32>,
    pub total_results: Option<u32>,
}

#[derive(Deserialize)]
pub struct MovieSummaryResponse {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub vote_average: Option<f32>,
    pub release_date: Option<String>,
    #[serde(default)]
    pub genre_ids: Vec<u64>,
}

#[derive(Deserialize)]
pub struct RatedMovieResponse {
    #[serde(flatten)]
    pub movie: MovieSummaryResponse,
    pub rating: Option<f32>,
}

#[derive(Deserialize)]
pub struct GenreResponse {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Deserialize)]
pub struct GenreListResponse {
    pub genres: Option<Vec<GenreResponse>>,
}

#[derive(Deserialize)]
pub struct MovieDetailsResponse {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub original_title: Option<String>,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub release_date: Option<String>,
    pub runtime: Option<u32>,
    #[serde(default)]
    pub genres: Vec<GenreResponse>,
    pub vote_average: Option<f32>,
    pub vote_count: Option<u32>,
    pub status: Option<String>,
    pub homepage: Option<String>,
}

#[derive(Deserialize)]
pub struct CastResponse {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub character: Option<String>,
    pub profile_path: Option<String>,
    pub order: Option<u32>,
}

#[derive(Deserialize)]
pub struct CrewResponse {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub job: Option<String>,
    pub department: Option<String>,
    pub profile_path: Option<String>,
}

#[derive(Deserialize)]
pub struct CreditsResponse {
    #[serde(default)]
    pub cast: Vec<CastResponse>,
    #[serde(default)]
    pub crew: Vec<CrewResponse>,
}

#[derive(Deserialize)]
pub struct VideoResponse {
    pub id: Option<String>,
    pub key: Option<String>,
    pub name: Option<String>,
    pub site: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub official: bool,
}

#[derive(Deserialize)]
pub struct VideoListResponse {
    pub results: Option<Vec<VideoResponse>>,
}

#[derive(Deserialize)]
pub struct AuthorDetailsResponse {
    pub rating: Option<f32>,
}

#[derive(Deserialize)]
pub struct ReviewResponse {
    pub id: Option<String>,
    pub author: Option<String>,
    pub content: Option<String>,
    pub url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub author_details: Option<AuthorDetailsResponse>,
}

// Conversions

fn required<T>(value: Option<T>, resource: &str, field: &str) -> Result<T, SchemaError> {
    value.ok_or_else(|| SchemaError::new(resource, format!("missing field `{field}`")))
}

fn required_text(
    value: Option<String>,
    resource: &str,
    field: &str,
) -> Result<String, SchemaError> {
    let value = required(value, resource, field)?;
    if value.trim().is_empty() {
        return Err(SchemaError::new(resource, format!("field `{field}` is empty")));
    }
    Ok(value)
}

fn required_id(value: Option<u64>, resource: &str) -> Result<u64, SchemaError> {
    match required(value, resource, "id")? {
        0 => Err(SchemaError::new(resource, "field `id` must be positive")),
        id => Ok(id),
    }
}

/// TMDB sends an empty string for unknown release dates.
fn parse_date(value: Option<String>) -> Option<NaiveDate> {
    value.and_then(|date| NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl RequestTokenResponse {
    pub fn into_model(self) -> Result<RequestToken, SchemaError> {
        required_text(self.request_token, "request token", "request_token").map(RequestToken::new)
    }
}

impl SessionResponse {
    pub fn into_model(self) -> Result<SessionId, SchemaError> {
        required_text(self.session_id, "session", "session_id").map(SessionId::new)
    }
}

impl AccountResponse {
    pub fn into_model(self) -> Result<AccountDetails, SchemaError> {
        Ok(AccountDetails {
            id: AccountId::new(required_id(self.id, "account")?),
            username: required_text(self.username, "account", "username")?,
        })
    }
}

impl<T> PageResponse<T> {
    pub fn into_model<U>(
        self,
        resource: &str,
        convert: impl Fn(T) -> Result<U, SchemaError>,
    ) -> Result<Page<U>, SchemaError> {
        let page = required(self.page, resource, "page")?;
        if page == 0 {
            return Err(SchemaError::new(resource, "field `page` must be at least 1"));
        }
        let results = required(self.results, resource, "results")?
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Page {
            page,
            total_pages: self.total_pages.unwrap_or(page),
            total_results: self.total_results.unwrap_or(results.len() as u32),
            results,
        })
    }
}

impl TryFrom<MovieSummaryResponse> for MovieSummary {
    type Error = SchemaError;

    fn try_from(value: MovieSummaryResponse) -> Result<Self, Self::Error> {
        Ok(MovieSummary {
            id: MovieId::new(required_id(value.id, "movie")?),
            title: required(value.title, "movie", "title")?,
            overview: value.overview.unwrap_or_default(),
            poster_path: non_empty(value.poster_path),
            backdrop_path: non_empty(value.backdrop_path),
            vote_average: value.vote_average.unwrap_or_default(),
            release_date: parse_date(value.release_date),
            genre_ids: value.genre_ids.into_iter().map(GenreId::new).collect(),
        })
    }
}

impl TryFrom<RatedMovieResponse> for RatedMovie {
    type Error = SchemaError;

    fn try_from(value: RatedMovieResponse) -> Result<Self, Self::Error> {
        let rating = required(value.rating, "rated movie", "rating")?;
        Ok(RatedMovie {
            movie: value.movie.try_into()?,
            rating: Rating::from_value(rating)
                .map_err(|err| SchemaError::new("rated movie", err.to_string()))?,
        })
    }
}

impl TryFrom<GenreResponse> for Genre {
    type Error = SchemaError;

    fn try_from(value: GenreResponse) -> Result<Self, Self::Error> {
        Ok(Genre {
            id: GenreId::new(required_id(value.id, "genre")?),
            name: required_text(value.name, "genre", "name")?,
        })
    }
}

impl GenreListResponse {
    pub fn into_model(self) -> Result<Vec<Genre>, SchemaError> {
        required(self.genres, "genre list", "genres")?
            .into_iter()
            .map(Genre::try_from)
            .collect()
    }
}

impl TryFrom<MovieDetailsResponse> for MovieDetails {
    type Error = SchemaError;

    fn try_from(value: MovieDetailsResponse) -> Result<Self, Self::Error> {
        Ok(MovieDetails {
            id: MovieId::new(required_id(value.id, "movie details")?),
            title: required(value.title, "movie details", "title")?,
            original_title: non_empty(value.original_title),
            tagline: non_empty(value.tagline),
            overview: value.overview.unwrap_or_default(),
            poster_path: non_empty(value.poster_path),
            backdrop_path: non_empty(value.backdrop_path),
            release_date: parse_date(value.release_date),
            runtime: value.runtime,
            genres: value
                .genres
                .into_iter()
                .map(Genre::try_from)
                .collect::<Result<_, _>>()?,
            vote_average: value.vote_average.unwrap_or_default(),
            vote_count: value.vote_count.unwrap_or_default(),
            status: non_empty(value.status),
            homepage: non_empty(value.homepage),
        })
    }
}

impl TryFrom<CreditsResponse> for Credits {
    type Error = SchemaError;

    fn try_from(value: CreditsResponse) -> Result<Self, Self::Error> {
        let cast = value
            .cast
            .into_iter()
            .map(|member| {
                Ok(CastMember {
                    id: required_id(member.id, "cast member")?,
                    name: required(member.name, "cast member", "name")?,
                    character: non_empty(member.character),
                    profile_path: non_empty(member.profile_path),
                    order: member.order.unwrap_or(u32::MAX),
                })
            })
            .collect::<Result<_, SchemaError>>()?;

        let crew = value
            .crew
            .into_iter()
            .map(|member| {
                Ok(CrewMember {
                    id: required_id(member.id, "crew member")?,
                    name: required(member.name, "crew member", "name")?,
                    job: member.job.unwrap_or_default(),
                    department: member.department.unwrap_or_default(),
                    profile_path: non_empty(member.profile_path),
                })
            })
            .collect::<Result<_, SchemaError>>()?;

        Ok(Credits { cast, crew })
    }
}

impl TryFrom<VideoResponse> for Video {
    type Error = SchemaError;

    fn try_from(value: VideoResponse) -> Result<Self, Self::Error> {
        Ok(Video {
            id: required_text(value.id, "video", "id")?,
            key: required_text(value.key, "video", "key")?,
            name: value.name.unwrap_or_default(),
            site: required(value.site, "video", "site")?,
            kind: value.kind.unwrap_or_default(),
            official: value.official,
        })
    }
}

impl VideoListResponse {
    pub fn into_model(self) -> Result<Vec<Video>, SchemaError> {
        required(self.results, "video list", "results")?
            .into_iter()
            .map(Video::try_from)
            .collect()
    }
}

impl TryFrom<ReviewResponse> for Review {
    type Error = SchemaError;

    fn try_from(value: ReviewResponse) -> Result<Self, Self::Error> {
        Ok(Review {
            id: required_text(value.id, "review", "id")?,
            author: required(value.author, "review", "author")?,
            content: value.content.unwrap_or_default(),
            rating: value.author_details.and_then(|details| details.rating),
            url: non_empty(value.url),
            created_at: value.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_movie_without_id_is_a_schema_error() {
        let response = serde_json::from_str::<MovieSummaryResponse>(r#"{"title": "Heat"}"#)
            .expect("valid JSON");

        let err = MovieSummary::try_from(response).unwrap_err();
        assert_eq!(err, SchemaError::new("movie", "missing field `id`"));
    }

    #[test]
    fn test_empty_release_date_is_absent() {
        let response = serde_json::from_str::<MovieSummaryResponse>(
            r#"{"id": 949, "title": "Heat", "release_date": "", "poster_path": null}"#,
        )
        .expect("valid JSON");

        let movie = MovieSummary::try_from(response).expect("valid movie");
        assert_eq!(movie.release_date, None);
        assert_eq!(movie.poster_path, None);
        assert_eq!(movie.vote_average, 0.0);
    }

    #[test]
    fn test_page_without_results_is_a_schema_error() {
        let response = serde_json::from_str::<PageResponse<MovieSummaryResponse>>(
            r#"{"page": 1, "total_pages": 3}"#,
        )
        .expect("valid JSON");

        let err = response
            .into_model("popular movies", MovieSummary::try_from)
            .unwrap_err();
        assert_eq!(err.reason, "missing field `results`");
    }
}
