// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use derivative::Derivative;
use parking_lot::RwLock;

use crate::app::deps::{AppConfig, AppContext, AppDependencies, DynFavoritesRepository};
use crate::app::event_handlers::{MockClientEventDispatcherTrait, MockSessionObserver};
use crate::domain::favorites::repos::mocks::MockFavoritesRepository;
use crate::domain::favorites::services::impls::FavoritesDomainServiceDependencies;
use crate::domain::favorites::services::mocks::{
    MockFavoritesDomainService, MockFavoritesService,
};
use crate::domain::movies::models::{ImageUrlBuilder, MovieSummary};
use crate::domain::movies::services::mocks::MockMovieCatalogService;
use crate::domain::ratings::services::mocks::MockRatingService;
use crate::domain::session::models::Session;
use crate::domain::session::repos::mocks::MockSessionRepository;
use crate::domain::session::services::impls::SessionDomainServiceDependencies;
use crate::domain::session::services::mocks::{
    MockAuthenticationService, MockSessionDomainService,
};
use crate::domain::shared::models::{AccountId, MovieId, Page, SessionId};
use crate::infra::favorites::InMemoryFavoritesRepository;

pub fn mock_session() -> Session {
    Session {
        session_id: SessionId::from("f3b2c1d0-session"),
        account_id: AccountId::from(20_671_234),
        username: "jane.doe".to_string(),
    }
}

pub fn mock_movie(id: u64) -> MovieSummary {
    MovieSummary {
        id: MovieId::from(id),
        title: format!("Movie {id}"),
        overview: format!("Overview of movie {id}"),
        poster_path: Some(format!("/poster-{id}.jpg")),
        backdrop_path: None,
        vote_average: 7.5,
        release_date: None,
        genre_ids: vec![],
    }
}

pub fn mock_movie_page(ids: impl IntoIterator<Item = u64>) -> Page<MovieSummary> {
    let results = ids.into_iter().map(mock_movie).collect::<Vec<_>>();
    Page {
        page: 1,
        total_pages: 1,
        total_results: results.len() as u32,
        results,
    }
}

/// A context that is signed in with `mock_session()`.
impl Default for AppContext {
    fn default() -> Self {
        AppContext {
            session: RwLock::new(Some(mock_session())),
            login_error: Default::default(),
            config: AppConfig::default(),
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockAppDependencies {
    pub authentication_service: MockAuthenticationService,
    pub catalog_service: MockMovieCatalogService,
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    #[derivative(Default(value = "Arc::new(AppContext::default())"))]
    pub ctx: Arc<AppContext>,
    pub favorites_domain_service: MockFavoritesDomainService,
    pub favorites_repo: MockFavoritesRepository,
    pub favorites_service: MockFavoritesService,
    pub image_url_builder: ImageUrlBuilder,
    pub rating_service: MockRatingService,
    pub session_domain_service: MockSessionDomainService,
    pub session_observer: MockSessionObserver,
    pub session_repo: MockSessionRepository,
}

impl MockAppDependencies {
    /// Same as `default()` but without a session.
    pub fn signed_out() -> Self {
        let deps = Self::default();
        deps.ctx.replace_session(None);
        deps
    }

    pub fn into_deps(self) -> AppDependencies {
        AppDependencies::from(self)
    }
}

impl From<MockAppDependencies> for AppDependencies {
    fn from(mock: MockAppDependencies) -> Self {
        AppDependencies {
            authentication_service: Arc::new(mock.authentication_service),
            catalog_service: Arc::new(mock.catalog_service),
            client_event_dispatcher: Arc::new(mock.client_event_dispatcher),
            ctx: mock.ctx,
            favorites_domain_service: Arc::new(mock.favorites_domain_service),
            favorites_repo: Arc::new(mock.favorites_repo),
            favorites_service: Arc::new(mock.favorites_service),
            image_url_builder: Arc::new(mock.image_url_builder),
            rating_service: Arc::new(mock.rating_service),
            session_domain_service: Arc::new(mock.session_domain_service),
            session_observer: Arc::new(mock.session_observer),
            session_repo: Arc::new(mock.session_repo),
        }
    }
}

#[derive(Derivative)]
#[derivative(Default)]
pub struct MockSessionDomainServiceDependencies {
    pub authentication_service: MockAuthenticationService,
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    #[derivative(Default(value = "Arc::new(AppContext::default())"))]
    pub ctx: Arc<AppContext>,
    pub session_observer: MockSessionObserver,
    pub session_repo: MockSessionRepository,
}

impl MockSessionDomainServiceDependencies {
    /// Same as `default()` but without a session.
    pub fn signed_out() -> Self {
        let deps = Self::default();
        deps.ctx.replace_session(None);
        deps
    }

    pub fn into_deps(self) -> SessionDomainServiceDependencies {
        SessionDomainServiceDependencies::from(self)
    }
}

impl From<MockSessionDomainServiceDependencies> for SessionDomainServiceDependencies {
    fn from(value: MockSessionDomainServiceDependencies) -> Self {
        Self {
            authentication_service: Arc::new(value.authentication_service),
            client_event_dispatcher: Arc::new(value.client_event_dispatcher),
            ctx: value.ctx,
            session_observer: Arc::new(value.session_observer),
            session_repo: Arc::new(value.session_repo),
        }
    }
}

/// Uses a real in-memory repository so that tests can inspect the favorite set.
#[derive(Derivative)]
#[derivative(Default)]
pub struct MockFavoritesDomainServiceDependencies {
    pub client_event_dispatcher: MockClientEventDispatcherTrait,
    #[derivative(Default(value = "Arc::new(AppContext::default())"))]
    pub ctx: Arc<AppContext>,
    #[derivative(Default(value = "Arc::new(InMemoryFavoritesRepository::new())"))]
    pub favorites_repo: DynFavoritesRepository,
    pub favorites_service: MockFavoritesService,
}

impl MockFavoritesDomainServiceDependencies {
    pub fn into_deps(self) -> FavoritesDomainServiceDependencies {
        FavoritesDomainServiceDependencies::from(self)
    }
}

impl From<MockFavoritesDomainServiceDependencies> for FavoritesDomainServiceDependencies {
    fn from(value: MockFavoritesDomainServiceDependencies) -> Self {
        Self {
            client_event_dispatcher: Arc::new(value.client_event_dispatcher),
            ctx: value.ctx,
            favorites_repo: value.favorites_repo,
            favorites_service: Arc::new(value.favorites_service),
        }
    }
}
