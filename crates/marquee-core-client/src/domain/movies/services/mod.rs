// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use movie_catalog_service::MovieCatalogService;

mod movie_catalog_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::movie_catalog_service::MockMovieCatalogService;
}
