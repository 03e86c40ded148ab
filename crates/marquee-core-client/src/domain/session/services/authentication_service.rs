// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::SecretString;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::session::models::{AccountDetails, RequestToken};
use crate::domain::shared::models::{RequestError, SessionId};

/// The remote side of the login exchange.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait AuthenticationService: SendUnlessWasm + SyncUnlessWasm {
    async fn create_request_token(&self) -> Result<RequestToken, RequestError>;
    /// Returns the validated request token.
    async fn validate_with_login(
        &self,
        username: &str,
        password: &SecretString,
        request_token: &RequestToken,
    ) -> Result<RequestToken, RequestError>;
    async fn create_session(&self, request_token: &RequestToken)
        -> Result<SessionId, RequestError>;
    async fn delete_session(&self, session_id: &SessionId) -> Result<(), RequestError>;
    async fn load_account_details(
        &self,
        session_id: &SessionId,
    ) -> Result<AccountDetails, RequestError>;
}
