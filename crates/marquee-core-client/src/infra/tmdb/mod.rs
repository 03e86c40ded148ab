// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tmdb_client::TmdbClient;
pub use tmdb_config::{TmdbConfig, DEFAULT_BASE_URL};

mod authentication_service;
mod catalog_service;
mod dtos;
mod favorites_service;
mod rating_service;
mod tmdb_client;
mod tmdb_config;
