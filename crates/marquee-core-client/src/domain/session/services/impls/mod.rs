// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_domain_service::{SessionDomainService, SessionDomainServiceDependencies};

mod session_domain_service;
