// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_favorites_repository::InMemoryFavoritesRepository;

mod in_memory_favorites_repository;
