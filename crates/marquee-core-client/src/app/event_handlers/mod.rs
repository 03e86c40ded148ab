// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use favorites_event_handler::FavoritesEventHandler;
pub use session_event_handler_queue::SessionEventHandlerQueue;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::session::models::SessionTransition;
use crate::ClientEvent;

mod favorites_event_handler;
mod session_event_handler_queue;

/// Receives every session transition after it has been persisted.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionObserver: SendUnlessWasm + SyncUnlessWasm {
    async fn handle_session_transition(&self, transition: &SessionTransition);
}

/// A single subscriber in the `SessionEventHandlerQueue`.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait SessionEventHandler: SendUnlessWasm + SyncUnlessWasm {
    fn name(&self) -> &'static str;
    async fn handle_session_transition(&self, transition: &SessionTransition) -> Result<()>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: SendUnlessWasm + SyncUnlessWasm {
    fn dispatch_event(&self, event: ClientEvent);
}
