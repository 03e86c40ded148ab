// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::session::models::Session;

/// The single durable slot that holds the current session.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionRepository: SendUnlessWasm + SyncUnlessWasm {
    async fn get(&self) -> Result<Option<Session>>;
    async fn set(&self, session: &Session) -> Result<()>;
    async fn delete(&self) -> Result<()>;
}
