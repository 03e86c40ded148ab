// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::{Arc, OnceLock, Weak};

use tracing::error;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::infra::events::subscription::Subscribers;
use crate::infra::events::Subscription;
use crate::{Client, ClientDelegate, ClientEvent};

/// Delivers events synchronously, first to the delegate set at build time and then to every
/// live subscriber.
pub struct ImmediateClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegate: Option<Box<dyn ClientDelegate>>,
    subscribers: Arc<Subscribers>,
}

impl ImmediateClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        Self {
            client_inner: Default::default(),
            delegate,
            subscribers: Default::default(),
        }
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            error!("Tried to set client_inner on ImmediateClientEventDispatcher more than once.");
        }
    }

    pub(crate) fn subscribe(&self, delegate: Arc<dyn ClientDelegate>) -> Subscription {
        self.subscribers.insert(delegate)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl ClientEventDispatcherTrait for ImmediateClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        let subscribers = self.subscribers.snapshot();
        if self.delegate.is_none() && subscribers.is_empty() {
            return;
        }

        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };
        let client = Client::from(client_inner);

        if let Some(delegate) = &self.delegate {
            delegate.handle_event(client.clone(), event.clone());
        }
        for subscriber in subscribers {
            subscriber.handle_event(client.clone(), event.clone());
        }
    }
}
