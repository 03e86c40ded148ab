// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::ratings::models::Rating;
use crate::domain::shared::models::{MovieId, MutationKind};

#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    /// The session has been created, replaced or ended.
    SessionChanged { event: SessionEvent },
    /// The favorite set has changed. Read it via `client.favorites.favorites()`.
    FavoritesChanged,
    /// The rating of a movie was set (`Some`) or removed (`None`).
    RatingChanged {
        movie_id: MovieId,
        rating: Option<Rating>,
    },
    /// A write operation was rejected. Front-ends show `message` as a transient notification.
    MutationFailed {
        mutation: MutationKind,
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    SignedOut,
}
