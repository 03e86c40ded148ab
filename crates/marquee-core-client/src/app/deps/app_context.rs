// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use parking_lot::RwLock;

use crate::domain::movies::models::TimeWindow;
use crate::domain::session::models::Session;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FavoriteTogglePolicy {
    /// A toggle for a movie whose previous toggle hasn't completed yet fails with
    /// `MutationError::ToggleInFlight` without contacting the server.
    #[default]
    RejectWhilePending,
    /// Toggles are never serialized. Two overlapping toggles for the same movie read the same
    /// membership and send the same direction.
    Unguarded,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// The pause in typing after which a search is issued.
    pub search_debounce_interval: Duration,
    /// TMDB refuses to serve pages beyond 500.
    pub max_catalog_pages: u32,
    pub favorite_toggle_policy: FavoriteTogglePolicy,
    pub trending_window: TimeWindow,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            search_debounce_interval: Duration::from_millis(500),
            max_catalog_pages: 500,
            favorite_toggle_policy: Default::default(),
            trending_window: TimeWindow::Week,
        }
    }
}

pub struct AppContext {
    pub(crate) session: RwLock<Option<Session>>,
    pub(crate) login_error: RwLock<Option<String>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            session: Default::default(),
            login_error: Default::default(),
            config,
        }
    }
}

impl AppContext {
    pub fn session(&self) -> Option<Session> {
        self.session.read().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.session.read().is_some()
    }

    /// Returns `true` if `session` still identifies the signed-in account.
    pub fn is_current_session(&self, session: &Session) -> bool {
        self.session
            .read()
            .as_ref()
            .map(|current| current.has_same_identity(session))
            .unwrap_or(false)
    }

    /// Swaps the current session and returns the previous one.
    pub fn replace_session(&self, session: Option<Session>) -> Option<Session> {
        std::mem::replace(&mut *self.session.write(), session)
    }

    pub fn login_error(&self) -> Option<String> {
        self.login_error.read().clone()
    }

    pub fn set_login_error(&self, message: Option<String>) {
        *self.login_error.write() = message;
    }
}
