// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use rating::{RatedMovie, Rating, RatingError};

mod rating;
