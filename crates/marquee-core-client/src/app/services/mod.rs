// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use catalog_service::CatalogService;
pub use favorites_service::FavoritesService;
pub use movie_details_service::MovieDetailsService;
pub use navigation_service::NavigationService;
pub use ratings_service::RatingsService;
pub use session_service::SessionService;

mod catalog_service;
mod favorites_service;
mod movie_details_service;
mod navigation_service;
mod ratings_service;
mod session_service;
