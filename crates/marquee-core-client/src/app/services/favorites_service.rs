// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::DynFavoritesDomainService;
use crate::domain::movies::models::MovieSummary;
use crate::domain::shared::models::{FetchError, MovieId, MutationError};

#[derive(InjectDependencies)]
pub struct FavoritesService {
    #[inject]
    favorites_domain_service: DynFavoritesDomainService,
}

impl FavoritesService {
    /// The favorite movies of the signed-in account. Empty while signed out.
    pub fn favorites(&self) -> Vec<MovieSummary> {
        self.favorites_domain_service.favorites()
    }

    pub fn is_favorite(&self, movie_id: &MovieId) -> bool {
        self.favorites_domain_service.is_favorite(movie_id)
    }

    pub async fn refresh(&self) -> Result<Vec<MovieSummary>, FetchError> {
        self.favorites_domain_service.refresh().await
    }

    /// Adds `movie` to or removes it from the favorites. Returns whether it is a favorite
    /// afterwards.
    pub async fn toggle(&self, movie: &MovieSummary) -> Result<bool, MutationError> {
        self.favorites_domain_service.toggle(movie).await
    }
}
