// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::DynFavoritesDomainService;
use crate::app::event_handlers::SessionEventHandler;
use crate::domain::session::models::SessionTransition;

/// Keeps the favorites mirror in step with the session. Favorites are account-scoped, so
/// any new identity triggers a full reload and signing out empties the set.
#[derive(InjectDependencies)]
pub struct FavoritesEventHandler {
    #[inject]
    favorites_domain_service: DynFavoritesDomainService,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl SessionEventHandler for FavoritesEventHandler {
    fn name(&self) -> &'static str {
        "favorites"
    }

    async fn handle_session_transition(&self, transition: &SessionTransition) -> Result<()> {
        match transition {
            SessionTransition::SignedIn(_) => self.refresh_favorites().await,
            SessionTransition::IdentityChanged { .. } => {
                self.favorites_domain_service.clear();
                self.refresh_favorites().await
            }
            SessionTransition::SignedOut => self.favorites_domain_service.clear(),
        }
        Ok(())
    }
}

impl FavoritesEventHandler {
    async fn refresh_favorites(&self) {
        // Read failures degrade to an empty set.
        if let Err(err) = self.favorites_domain_service.refresh().await {
            warn!("Failed to load favorites. {}", err.to_string());
        }
    }
}
