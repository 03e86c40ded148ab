// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

//! The core of Marquee, a TMDB movie browser.
//!
//! A `Client` holds at most one authenticated TMDB session, persisted in a single durable
//! slot and restored on startup. Signing in loads the account's favorite movies into a local
//! mirror that front-ends can query synchronously. Catalog, detail and rating operations go
//! straight to the TMDB REST API.

pub use app::deps::{AppConfig, FavoriteTogglePolicy};
pub use app::dtos;
pub use client::{Client, ClientDelegate};
pub use client_builder::{ClientBuilder, UndefinedStore};
pub use client_event::{ClientEvent, SessionEvent};
pub use infra::events::Subscription;
pub use infra::tmdb::{TmdbConfig, DEFAULT_BASE_URL};

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
