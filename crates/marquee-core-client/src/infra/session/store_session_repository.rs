// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use marquee_store::prelude::*;

use crate::domain::session::models::Session;
use crate::domain::session::repos::SessionRepository;

/// The storage key holding the JSON-serialized session.
pub const SESSION_KEY: &str = "auth";

pub struct StoreSessionRepository<D: Driver> {
    store: Store<D>,
}

impl<D: Driver> StoreSessionRepository<D> {
    pub fn new(store: Store<D>) -> Self {
        Self { store }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl<D: Driver> SessionRepository for StoreSessionRepository<D> {
    async fn get(&self) -> Result<Option<Session>> {
        Ok(self.store.get::<Session>(SESSION_KEY).await?)
    }

    async fn set(&self, session: &Session) -> Result<()> {
        Ok(self.store.set(SESSION_KEY, session).await?)
    }

    async fn delete(&self) -> Result<()> {
        Ok(self.store.delete(SESSION_KEY).await?)
    }
}
