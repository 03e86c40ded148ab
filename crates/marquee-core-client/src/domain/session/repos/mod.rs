// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use session_repository::SessionRepository;

mod session_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::session_repository::MockSessionRepository;
}
