// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use favorites_repository::FavoritesRepository;

mod favorites_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::favorites_repository::MockFavoritesRepository;
}
