// marquee/marquee-sdk-js
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use marquee_core_client::dtos::{ImageSize, MovieList, TimeWindow};

use crate::error::Result;

#[wasm_bindgen(typescript_custom_section)]
const TS_APPEND_CONTENT: &'static str = r#"
export interface Session {
    sessionId: string
    accountId: number
    username: string
}

export interface Page<T> {
    page: number
    results: T[]
    totalPages: number
    totalResults: number
}

export interface MovieSummary {
    id: number
    title: string
    overview: string
    posterPath: string | null
    backdropPath: string | null
    voteAverage: number
    releaseDate: string | null
    genreIds: number[]
}

export interface Genre {
    id: number
    name: string
}

export interface CatalogQuery {
    search: string | null
    genre: number | null
    page: number
}

export type Route =
    | ({ view: 'catalog' } & CatalogQuery)
    | { view: 'movieDetail', id: number }
    | { view: 'favorites' }
    | { view: 'login', returnTo: Route | null }

export interface RatedMovie {
    movie: MovieSummary
    rating: number
}
"#;

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum MovieListKind {
    Popular = 0,
    TopRated = 1,
    NowPlaying = 2,
    Upcoming = 3,
    TrendingToday = 4,
    TrendingThisWeek = 5,
}

impl From<MovieListKind> for MovieList {
    fn from(value: MovieListKind) -> Self {
        match value {
            MovieListKind::Popular => MovieList::Popular,
            MovieListKind::TopRated => MovieList::TopRated,
            MovieListKind::NowPlaying => MovieList::NowPlaying,
            MovieListKind::Upcoming => MovieList::Upcoming,
            MovieListKind::TrendingToday => MovieList::Trending(TimeWindow::Day),
            MovieListKind::TrendingThisWeek => MovieList::Trending(TimeWindow::Week),
        }
    }
}

#[wasm_bindgen]
#[derive(Clone, Copy)]
pub enum ImageSizeKind {
    Thumbnail = 0,
    Poster = 1,
    Original = 2,
}

impl From<ImageSizeKind> for ImageSize {
    fn from(value: ImageSizeKind) -> Self {
        match value {
            ImageSizeKind::Thumbnail => ImageSize::W100,
            ImageSizeKind::Poster => ImageSize::W500,
            ImageSizeKind::Original => ImageSize::Original,
        }
    }
}

/// Converts `value` into a plain JS object.
pub fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    Ok(value.serialize(&serializer)?)
}

pub fn from_js<T: DeserializeOwned>(value: JsValue) -> Result<T> {
    Ok(serde_wasm_bindgen::from_value(value)?)
}
