// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod favorites;
pub mod movies;
pub mod navigation;
pub mod ratings;
pub mod session;
pub mod shared;
