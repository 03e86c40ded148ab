// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use crate::ClientDelegate;

#[derive(Default)]
pub(crate) struct Subscribers {
    next_id: AtomicU64,
    entries: RwLock<Vec<(u64, Arc<dyn ClientDelegate>)>>,
}

impl Subscribers {
    pub fn insert(self: &Arc<Self>, delegate: Arc<dyn ClientDelegate>) -> Subscription {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.entries.write().push((id, delegate));
        Subscription {
            id,
            subscribers: Arc::downgrade(self),
        }
    }

    /// A snapshot of the current subscribers, so that delegates may (un)subscribe while
    /// handling an event.
    pub fn snapshot(&self) -> Vec<Arc<dyn ClientDelegate>> {
        self.entries
            .read()
            .iter()
            .map(|(_, delegate)| delegate.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn remove(&self, id: u64) {
        self.entries.write().retain(|(entry_id, _)| *entry_id != id);
    }
}

/// Keeps a delegate registered with `Client::subscribe`. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    subscribers: Weak<Subscribers>,
}

impl Subscription {
    /// Unsubscribes now. Same as dropping the subscription.
    pub fn cancel(self) {}
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.remove(self.id);
        }
    }
}
