// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use marquee_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynFavoritesRepository, DynFavoritesService,
    FavoriteTogglePolicy,
};
use crate::domain::movies::models::MovieSummary;
use crate::domain::shared::models::{FetchError, MovieId, MutationError, MutationKind};
use crate::ClientEvent;

use super::super::FavoritesDomainService as FavoritesDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct FavoritesDomainService {
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    favorites_repo: DynFavoritesRepository,
    favorites_service: DynFavoritesService,

    #[state]
    pending_toggles: Mutex<HashSet<MovieId>>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl FavoritesDomainServiceTrait for FavoritesDomainService {
    #[tracing::instrument(skip(self))]
    async fn refresh(&self) -> Result<Vec<MovieSummary>, FetchError> {
        let Some(session) = self.ctx.session() else {
            return Err(FetchError::NotSignedIn);
        };

        let page = self.favorites_service.load_favorites(&session, 1).await?;

        if !self.ctx.is_current_session(&session) {
            debug!("Discarding favorites loaded for a session that has ended.");
            return Ok(self.favorites_repo.get_all());
        }

        info!("Loaded {} favorites.", page.results.len());
        self.favorites_repo.replace_all(page.results);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FavoritesChanged);

        Ok(self.favorites_repo.get_all())
    }

    #[tracing::instrument(skip(self, movie), fields(movie_id = %movie.id))]
    async fn toggle(&self, movie: &MovieSummary) -> Result<bool, MutationError> {
        let Some(session) = self.ctx.session() else {
            return Err(MutationError::NotSignedIn {
                mutation: MutationKind::Favorite,
            });
        };

        let _guard = match self.ctx.config.favorite_toggle_policy {
            FavoriteTogglePolicy::RejectWhilePending => Some(self.begin_toggle(movie.id)?),
            FavoriteTogglePolicy::Unguarded => None,
        };

        let is_favorite = self.favorites_repo.contains(&movie.id);

        if let Err(err) = self
            .favorites_service
            .set_favorite(&session, &movie.id, !is_favorite)
            .await
        {
            warn!("Failed to toggle favorite. {}", err.to_string());

            self.client_event_dispatcher
                .dispatch_event(ClientEvent::MutationFailed {
                    mutation: MutationKind::Favorite,
                    message: err.to_string(),
                });

            if let Err(err) = self.refresh().await {
                warn!(
                    "Failed to reload favorites after failed toggle. {}",
                    err.to_string()
                );
            }

            return Err(err.into());
        }

        if !self.ctx.is_current_session(&session) {
            debug!("Discarding favorite toggle for a session that has ended.");
            return Ok(!is_favorite);
        }

        if is_favorite {
            self.favorites_repo.delete(&movie.id);
        } else {
            self.favorites_repo.insert(movie.clone());
        }

        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FavoritesChanged);

        Ok(!is_favorite)
    }

    fn is_favorite(&self, movie_id: &MovieId) -> bool {
        if self.ctx.session().is_none() {
            return false;
        }
        self.favorites_repo.contains(movie_id)
    }

    fn favorites(&self) -> Vec<MovieSummary> {
        if self.ctx.session().is_none() {
            return vec![];
        }
        self.favorites_repo.get_all()
    }

    fn clear(&self) {
        self.favorites_repo.clear();
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::FavoritesChanged);
    }
}

impl FavoritesDomainService {
    fn begin_toggle(&self, movie_id: MovieId) -> Result<PendingToggle<'_>, MutationError> {
        if !self.pending_toggles.lock().insert(movie_id) {
            return Err(MutationError::ToggleInFlight { movie_id });
        }
        Ok(PendingToggle {
            pending_toggles: &self.pending_toggles,
            movie_id,
        })
    }
}

/// Marks a toggle as in flight until dropped.
struct PendingToggle<'a> {
    pending_toggles: &'a Mutex<HashSet<MovieId>>,
    movie_id: MovieId,
}

impl Drop for PendingToggle<'_> {
    fn drop(&mut self) {
        self.pending_toggles.lock().remove(&self.movie_id);
    }
}
