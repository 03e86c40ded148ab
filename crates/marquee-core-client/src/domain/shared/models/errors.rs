// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::Display;

use crate::domain::ratings::models::RatingError;
use crate::domain::shared::models::MovieId;

pub const GENERIC_LOGIN_FAILURE: &str = "Login failed";

/// A response body didn't have the shape we expected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("Invalid {resource} response: {reason}")]
pub struct SchemaError {
    pub resource: String,
    pub reason: String,
}

impl SchemaError {
    pub fn new(resource: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            resource: resource.into(),
            reason: reason.into(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    #[error("Transport error: {message}")]
    Transport { message: String },
    #[error(
        "Request failed with status {status}{}",
        .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    )]
    Status {
        status: u16,
        /// The upstream `status_message`, if the error body carried one.
        message: Option<String>,
    },
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl RequestError {
    pub fn upstream_message(&self) -> Option<&str> {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } => Some(message),
            _ => None,
        }
    }
}

/// Any step of the login exchange was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct AuthError {
    pub message: String,
}

impl AuthError {
    pub fn generic() -> Self {
        Self {
            message: GENERIC_LOGIN_FAILURE.to_string(),
        }
    }
}

impl From<RequestError> for AuthError {
    fn from(value: RequestError) -> Self {
        match value.upstream_message() {
            Some(message) if !message.trim().is_empty() => Self {
                message: message.to_string(),
            },
            _ => Self::generic(),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Not signed in")]
    NotSignedIn,
    #[error(transparent)]
    Request(#[from] RequestError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MutationKind {
    #[strum(to_string = "manage favorites")]
    Favorite,
    #[strum(to_string = "rate movies")]
    Rating,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Must be logged in to {mutation}")]
    NotSignedIn { mutation: MutationKind },
    #[error("A favorite toggle for movie {movie_id} is still in progress")]
    ToggleInFlight { movie_id: MovieId },
    #[error(transparent)]
    InvalidRating(#[from] RatingError),
    #[error(transparent)]
    Request(#[from] RequestError),
}
