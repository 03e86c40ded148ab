// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rating_service::RatingService;

mod rating_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::rating_service::MockRatingService;
}
