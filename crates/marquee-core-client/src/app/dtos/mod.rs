// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::domain::movies::models::{
    CastMember, CatalogQuery, Credits, CrewMember, Genre, ImageSize, MovieDetailPage,
    MovieDetails, MovieList, MovieSummary, Review, TimeWindow, Video,
};
pub use crate::domain::navigation::models::Route;
pub use crate::domain::ratings::models::{RatedMovie, Rating, RatingError};
pub use crate::domain::session::models::Session;
pub use crate::domain::shared::models::{
    AccountId, AuthError, FetchError, GenreId, MovieId, MutationError, MutationKind, Page,
    RequestError, SchemaError, SessionId,
};
