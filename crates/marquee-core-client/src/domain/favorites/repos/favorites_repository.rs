// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::movies::models::MovieSummary;
use crate::domain::shared::models::MovieId;

/// The local favorite set. Keeps insertion order and holds each movie id at most once.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait FavoritesRepository: SendUnlessWasm + SyncUnlessWasm {
    fn get_all(&self) -> Vec<MovieSummary>;
    fn contains(&self, movie_id: &MovieId) -> bool;
    fn replace_all(&self, movies: Vec<MovieSummary>);
    /// Appends `movie` or, if a movie with the same id exists, replaces it in place.
    fn insert(&self, movie: MovieSummary);
    /// Returns `true` if the movie was part of the set.
    fn delete(&self, movie_id: &MovieId) -> bool;
    fn clear(&self);
}
