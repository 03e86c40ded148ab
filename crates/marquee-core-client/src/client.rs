// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::ops::Deref;
use std::sync::Arc;

use secrecy::SecretString;

use marquee_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::DynAppContext;
use crate::app::services::{
    CatalogService, FavoritesService, MovieDetailsService, NavigationService, RatingsService,
    SessionService,
};
use crate::client_builder::{ClientBuilder, UndefinedStore};
use crate::domain::session::models::Session;
use crate::domain::shared::models::AuthError;
use crate::infra::events::{ImmediateClientEventDispatcher, Subscription};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

impl Client {
    pub fn builder() -> ClientBuilder<UndefinedStore> {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub catalog: CatalogService,
    pub(crate) ctx: DynAppContext,
    pub(crate) event_dispatcher: Arc<ImmediateClientEventDispatcher>,
    pub favorites: FavoritesService,
    pub movie_details: MovieDetailsService,
    pub navigation: NavigationService,
    pub ratings: RatingsService,
    pub session: SessionService,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Client {
    pub async fn login(
        &self,
        username: impl AsRef<str>,
        password: SecretString,
    ) -> Result<Session, AuthError> {
        self.session.login(username, password).await
    }

    pub async fn logout(&self) {
        self.session.logout().await
    }

    pub fn current_session(&self) -> Option<Session> {
        self.ctx.session()
    }

    /// Registers an additional delegate. It receives events until the returned
    /// `Subscription` is dropped.
    #[must_use = "Dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, delegate: Arc<dyn ClientDelegate>) -> Subscription {
        self.event_dispatcher.subscribe(delegate)
    }
}
