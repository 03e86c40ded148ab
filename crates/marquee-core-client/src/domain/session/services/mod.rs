// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use authentication_service::AuthenticationService;
pub use session_domain_service::SessionDomainService;

mod authentication_service;
pub mod impls;
mod session_domain_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::authentication_service::MockAuthenticationService;
    pub use super::session_domain_service::MockSessionDomainService;
}
