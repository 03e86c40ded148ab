// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use async_trait::async_trait;
use secrecy::SecretString;
use tracing::{error, info, warn};

use marquee_proc_macros::DependenciesStruct;

use crate::app::deps::{
    DynAppContext, DynAuthenticationService, DynClientEventDispatcher, DynSessionObserver,
    DynSessionRepository,
};
use crate::client_event::SessionEvent;
use crate::domain::session::models::{Session, SessionTransition};
use crate::domain::shared::models::{AuthError, RequestError};
use crate::ClientEvent;

use super::super::SessionDomainService as SessionDomainServiceTrait;

#[derive(DependenciesStruct)]
pub struct SessionDomainService {
    authentication_service: DynAuthenticationService,
    client_event_dispatcher: DynClientEventDispatcher,
    ctx: DynAppContext,
    session_observer: DynSessionObserver,
    session_repo: DynSessionRepository,
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl SessionDomainServiceTrait for SessionDomainService {
    async fn restore_session(&self) -> Option<Session> {
        let session = match self.session_repo.get().await {
            Ok(Some(session)) if session.is_complete() => session,
            Ok(Some(_)) => {
                warn!("Discarding incomplete persisted session.");
                self.discard_persisted_session().await;
                return None;
            }
            Ok(None) => return None,
            Err(err) => {
                warn!("Discarding unreadable persisted session. {}", err.to_string());
                self.discard_persisted_session().await;
                return None;
            }
        };

        info!("Restored session for {}.", session.username);
        self.adopt_session(Some(session.clone())).await;
        Some(session)
    }

    /// Runs the login exchange. Each step only runs if the previous one succeeded. The
    /// session is persisted exactly once, after all steps succeeded.
    #[tracing::instrument(skip(self, password))]
    async fn login(&self, username: &str, password: &SecretString) -> Result<Session, AuthError> {
        self.ctx.set_login_error(None);

        let session = match self.perform_login_exchange(username, password).await {
            Ok(session) => session,
            Err(err) => {
                warn!("Login failed. {}", err.to_string());
                let err = AuthError::from(err);
                self.ctx.set_login_error(Some(err.message.clone()));
                return Err(err);
            }
        };

        if let Err(err) = self.session_repo.set(&session).await {
            error!("Failed to persist session. {}", err.to_string());
            let err = AuthError::generic();
            self.ctx.set_login_error(Some(err.message.clone()));
            return Err(err);
        }

        self.adopt_session(Some(session.clone())).await;
        Ok(session)
    }

    async fn logout(&self) {
        if let Some(session) = self.ctx.session() {
            if let Err(err) = self
                .authentication_service
                .delete_session(&session.session_id)
                .await
            {
                warn!("Failed to invalidate session remotely. {}", err.to_string());
            }
        }

        if let Err(err) = self.session_repo.delete().await {
            error!("Failed to remove persisted session. {}", err.to_string());
        }

        self.adopt_session(None).await;
    }
}

impl SessionDomainService {
    async fn perform_login_exchange(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Session, RequestError> {
        let request_token = self.authentication_service.create_request_token().await?;
        let validated_token = self
            .authentication_service
            .validate_with_login(username, password, &request_token)
            .await?;
        let session_id = self
            .authentication_service
            .create_session(&validated_token)
            .await?;
        let account = self
            .authentication_service
            .load_account_details(&session_id)
            .await?;

        Ok(Session {
            session_id,
            account_id: account.id,
            username: account.username,
        })
    }

    async fn discard_persisted_session(&self) {
        if let Err(err) = self.session_repo.delete().await {
            error!("Failed to remove persisted session. {}", err.to_string());
        }
    }

    /// Replaces the current session, then informs observers and the delegate about the
    /// transition (if any).
    async fn adopt_session(&self, session: Option<Session>) {
        let previous = self.ctx.replace_session(session.clone());

        let Some(transition) = SessionTransition::between(previous.as_ref(), session.as_ref())
        else {
            return;
        };

        self.session_observer
            .handle_session_transition(&transition)
            .await;

        let event = match transition {
            SessionTransition::SignedOut => SessionEvent::SignedOut,
            SessionTransition::SignedIn(_) | SessionTransition::IdentityChanged { .. } => {
                SessionEvent::SignedIn
            }
        };
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged { event });
    }
}
