// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_details::AccountDetails;
pub use request_token::RequestToken;
pub use session::Session;
pub use session_transition::SessionTransition;

mod account_details;
mod request_token;
mod session;
mod session_transition;
