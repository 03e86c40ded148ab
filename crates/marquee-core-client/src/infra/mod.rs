// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod events;
pub mod favorites;
pub(crate) mod platform_dependencies;
pub mod session;
pub mod tmdb;
