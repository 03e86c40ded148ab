// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use store_session_repository::{StoreSessionRepository, SESSION_KEY};

mod store_session_repository;
