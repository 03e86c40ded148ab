// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use async_trait::async_trait;
use tracing::{error, warn};

use crate::app::event_handlers::{SessionEventHandler, SessionObserver};
use crate::domain::session::models::SessionTransition;

/// Forwards session transitions to each handler in turn. A failing handler doesn't keep the
/// others from running.
pub struct SessionEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn SessionEventHandler>>>,
}

impl SessionEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            handlers: Default::default(),
        }
    }

    pub fn set_handlers(&self, handlers: Vec<Box<dyn SessionEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("Tried to set handlers on SessionEventHandlerQueue more than once.");
        }
    }
}

impl Default for SessionEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl SessionObserver for SessionEventHandlerQueue {
    async fn handle_session_transition(&self, transition: &SessionTransition) {
        let Some(handlers) = self.handlers.get() else {
            warn!("Dropping session transition since no handlers were set.");
            return;
        };

        for handler in handlers.iter() {
            if let Err(err) = handler.handle_session_transition(transition).await {
                error!(
                    "Session event handler '{}' failed with error: {}",
                    handler.name(),
                    err.to_string()
                );
            }
        }
    }
}
