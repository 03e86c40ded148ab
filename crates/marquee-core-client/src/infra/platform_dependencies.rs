// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use marquee_store::prelude::*;

use crate::app::deps::{
    AppContext, AppDependencies, DynClientEventDispatcher, DynFavoritesDomainService,
    DynFavoritesRepository, DynSessionDomainService, DynSessionObserver,
};
use crate::domain::favorites::services::impls::{
    FavoritesDomainService, FavoritesDomainServiceDependencies,
};
use crate::domain::movies::models::ImageUrlBuilder;
use crate::domain::session::services::impls::{
    SessionDomainService, SessionDomainServiceDependencies,
};
use crate::infra::favorites::InMemoryFavoritesRepository;
use crate::infra::session::StoreSessionRepository;
use crate::infra::tmdb::TmdbClient;

pub(crate) struct PlatformDependencies<D: Driver> {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: AppContext,
    pub image_url_builder: ImageUrlBuilder,
    pub session_observer: DynSessionObserver,
    pub store: Store<D>,
    pub tmdb: Arc<TmdbClient>,
}

impl<D: Driver> From<PlatformDependencies<D>> for AppDependencies {
    fn from(d: PlatformDependencies<D>) -> Self {
        let ctx = Arc::new(d.ctx);
        let favorites_repo: DynFavoritesRepository = Arc::new(InMemoryFavoritesRepository::new());
        let session_repo = Arc::new(StoreSessionRepository::new(d.store));

        let favorites_domain_service: DynFavoritesDomainService =
            Arc::new(FavoritesDomainService::from(FavoritesDomainServiceDependencies {
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                ctx: ctx.clone(),
                favorites_repo: favorites_repo.clone(),
                favorites_service: d.tmdb.clone(),
            }));

        let session_domain_service: DynSessionDomainService =
            Arc::new(SessionDomainService::from(SessionDomainServiceDependencies {
                authentication_service: d.tmdb.clone(),
                client_event_dispatcher: d.client_event_dispatcher.clone(),
                ctx: ctx.clone(),
                session_observer: d.session_observer.clone(),
                session_repo: session_repo.clone(),
            }));

        AppDependencies {
            authentication_service: d.tmdb.clone(),
            catalog_service: d.tmdb.clone(),
            client_event_dispatcher: d.client_event_dispatcher,
            ctx,
            favorites_domain_service,
            favorites_repo,
            favorites_service: d.tmdb.clone(),
            image_url_builder: Arc::new(d.image_url_builder),
            rating_service: d.tmdb,
            session_domain_service,
            session_observer: d.session_observer,
            session_repo,
        }
    }
}
