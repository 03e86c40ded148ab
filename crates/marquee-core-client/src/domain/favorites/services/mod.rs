// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use favorites_domain_service::FavoritesDomainService;
pub use favorites_service::FavoritesService;

mod favorites_domain_service;
mod favorites_service;
pub mod impls;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::favorites_domain_service::MockFavoritesDomainService;
    pub use super::favorites_service::MockFavoritesService;
}
