// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use immediate_client_event_dispatcher::ImmediateClientEventDispatcher;
pub use subscription::Subscription;

mod immediate_client_event_dispatcher;
mod subscription;
