// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::session::models::{AccountDetails, RequestToken};
use crate::domain::session::services::AuthenticationService;
use crate::domain::shared::models::{RequestError, SessionId};
use crate::infra::tmdb::dtos::{
    AccountResponse, CreateSessionRequest, DeleteSessionRequest, RequestTokenResponse,
    SessionResponse, ValidateWithLoginRequest,
};
use crate::infra::tmdb::TmdbClient;

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl AuthenticationService for TmdbClient {
    async fn create_request_token(&self) -> Result<RequestToken, RequestError> {
        let request = self.request(Method::GET, "/authentication/token/new");
        let response: RequestTokenResponse = self.send("request token", request).await?;
        Ok(response.into_model()?)
    }

    async fn validate_with_login(
        &self,
        username: &str,
        password: &SecretString,
        request_token: &RequestToken,
    ) -> Result<RequestToken, RequestError> {
        let request = self
            .request(Method::POST, "/authentication/token/validate_with_login")
            .json(&ValidateWithLoginRequest {
                username,
                password: password.expose_secret(),
                request_token: request_token.as_str(),
            });
        let response: RequestTokenResponse = self.send("validated token", request).await?;
        Ok(response.into_model()?)
    }

    async fn create_session(
        &self,
        request_token: &RequestToken,
    ) -> Result<SessionId, RequestError> {
        let request = self
            .request(Method::POST, "/authentication/session/new")
            .json(&CreateSessionRequest {
                request_token: request_token.as_str(),
            });
        let response: SessionResponse = self.send("session", request).await?;
        Ok(response.into_model()?)
    }

    async fn delete_session(&self, session_id: &SessionId) -> Result<(), RequestError> {
        let request = self
            .request(Method::DELETE, "/authentication/session")
            .json(&DeleteSessionRequest {
                session_id: session_id.as_str(),
            });
        self.send_expecting_success("session deletion", request)
            .await
    }

    async fn load_account_details(
        &self,
        session_id: &SessionId,
    ) -> Result<AccountDetails, RequestError> {
        let request = self
            .request(Method::GET, "/account")
            .query(&[("session_id", session_id.as_str())]);
        let response: AccountResponse = self.send("account", request).await?;
        Ok(response.into_model()?)
    }
}
