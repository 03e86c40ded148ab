// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use favorites_domain_service::{FavoritesDomainService, FavoritesDomainServiceDependencies};

mod favorites_domain_service;
