// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::SecretString;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::session::models::Session;
use crate::domain::shared::models::AuthError;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait SessionDomainService: SendUnlessWasm + SyncUnlessWasm {
    /// Adopts the persisted session, if there is a usable one.
    async fn restore_session(&self) -> Option<Session>;
    async fn login(&self, username: &str, password: &SecretString) -> Result<Session, AuthError>;
    /// Always ends signed out.
    async fn logout(&self);
}
