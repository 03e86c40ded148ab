// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::shared::models::{RequestError, SchemaError};
use crate::infra::tmdb::dtos::StatusResponse;
use crate::infra::tmdb::TmdbConfig;

/// A thin binding of one base URL and one API key to the TMDB REST endpoints. Each
/// operation maps to exactly one request. There is no caching and no retrying.
pub struct TmdbClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
}

impl TmdbClient {
    pub fn new(config: &TmdbConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: &TmdbConfig) -> Self {
        if config.api_key.expose_secret().is_empty() {
            warn!("No TMDB API key configured. Requests will be rejected.");
        }

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub(super) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http
            .request(method, format!("{}{}", self.base_url, path))
            .query(&[("api_key", self.api_key.expose_secret())])
    }

    /// Sends `request` and decodes the JSON body of a successful response.
    pub(super) async fn send<T: DeserializeOwned>(
        &self,
        resource: &str,
        request: RequestBuilder,
    ) -> Result<T, RequestError> {
        let response = request.send().await.map_err(Self::classify_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<StatusResponse>(&error_body)
                .ok()
                .and_then(|body| body.status_message);
            debug!("{} failed with status {}.", resource, status);
            return Err(RequestError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(Self::classify_reqwest_error)?;

        serde_json::from_slice(&body)
            .map_err(|err| SchemaError::new(resource, err.to_string()).into())
    }

    /// Like `send` for endpoints that answer with a bare status object.
    pub(super) async fn send_expecting_success(
        &self,
        resource: &str,
        request: RequestBuilder,
    ) -> Result<(), RequestError> {
        let response = self.send::<StatusResponse>(resource, request).await?;

        if response.success == Some(false) {
            return Err(RequestError::Status {
                status: 200,
                message: response.status_message,
            });
        }
        Ok(())
    }

    fn classify_reqwest_error(err: reqwest::Error) -> RequestError {
        let message = if err.is_timeout() {
            format!("Request timed out: {}", err)
        } else if err.is_decode() {
            format!("Failed to read response: {}", err)
        } else {
            format!("Network error: {}", err)
        };
        RequestError::Transport { message }
    }
}
