// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use secrecy::SecretString;
use tracing::info;
use url::Url;

use marquee_store::prelude::{Driver, Store};

use crate::app::deps::{AppConfig, AppContext, AppDependencies};
use crate::app::event_handlers::{FavoritesEventHandler, SessionEventHandlerQueue};
use crate::app::services::{
    CatalogService, FavoritesService, MovieDetailsService, NavigationService, RatingsService,
    SessionService,
};
use crate::client::ClientInner;
use crate::domain::movies::models::ImageUrlBuilder;
use crate::infra::events::ImmediateClientEventDispatcher;
use crate::infra::platform_dependencies::PlatformDependencies;
use crate::infra::tmdb::{TmdbClient, TmdbConfig};
use crate::{Client, ClientDelegate};

pub struct UndefinedStore;

pub struct ClientBuilder<S> {
    app_config: AppConfig,
    delegate: Option<Box<dyn ClientDelegate>>,
    http_client: Option<reqwest::Client>,
    store: S,
    tmdb_config: TmdbConfig,
}

impl ClientBuilder<UndefinedStore> {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            delegate: None,
            http_client: None,
            store: UndefinedStore,
            tmdb_config: Default::default(),
        }
    }

    pub fn set_store<D: Driver>(self, store: Store<D>) -> ClientBuilder<Store<D>> {
        ClientBuilder {
            app_config: self.app_config,
            delegate: self.delegate,
            http_client: self.http_client,
            store,
            tmdb_config: self.tmdb_config,
        }
    }
}

impl<S> ClientBuilder<S> {
    pub fn set_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.tmdb_config.api_key = SecretString::new(api_key.into());
        self
    }

    pub fn set_base_url(mut self, base_url: Url) -> Self {
        self.tmdb_config.base_url = base_url.to_string();
        self
    }

    pub fn set_image_base_url(mut self, image_base_url: Url) -> Self {
        self.tmdb_config.image_base_url = image_base_url.to_string();
        self
    }

    pub fn set_tmdb_config(mut self, config: TmdbConfig) -> Self {
        self.tmdb_config = config;
        self
    }

    pub fn set_http_client(mut self, http_client: reqwest::Client) -> Self {
        self.http_client = Some(http_client);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }
}

impl<D: Driver> ClientBuilder<Store<D>> {
    /// Builds the client and adopts the persisted session, if there is one.
    pub async fn build(self) -> Client {
        let tmdb = Arc::new(match self.http_client {
            Some(http_client) => TmdbClient::with_http_client(http_client, &self.tmdb_config),
            None => TmdbClient::new(&self.tmdb_config),
        });

        let session_event_handler_queue = Arc::new(SessionEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ImmediateClientEventDispatcher::new(self.delegate));

        let dependencies: AppDependencies = PlatformDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            ctx: AppContext::new(self.app_config),
            image_url_builder: ImageUrlBuilder::new(&self.tmdb_config.image_base_url),
            session_observer: session_event_handler_queue.clone(),
            store: self.store,
            tmdb,
        }
        .into();

        session_event_handler_queue
            .set_handlers(vec![Box::new(FavoritesEventHandler::from(&dependencies))]);

        let client_inner = Arc::new(ClientInner {
            catalog: CatalogService::from(&dependencies),
            ctx: dependencies.ctx.clone(),
            event_dispatcher: event_dispatcher.clone(),
            favorites: FavoritesService::from(&dependencies),
            movie_details: MovieDetailsService::from(&dependencies),
            navigation: NavigationService::from(&dependencies),
            ratings: RatingsService::from(&dependencies),
            session: SessionService::from(&dependencies),
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        if let Some(session) = dependencies.session_domain_service.restore_session().await {
            info!("Signed in as {}.", session.username);
        }

        Client::from(client_inner)
    }
}
