// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::SecretString;

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynSessionDomainService};
use crate::domain::session::models::Session;
use crate::domain::shared::models::AuthError;

#[derive(InjectDependencies)]
pub struct SessionService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    session_domain_service: DynSessionDomainService,
}

impl SessionService {
    /// Signs in with TMDB credentials. Calling `login` while signed in replaces the session.
    pub async fn login(
        &self,
        username: impl AsRef<str>,
        password: SecretString,
    ) -> Result<Session, AuthError> {
        self.session_domain_service
            .login(username.as_ref(), &password)
            .await
    }

    pub async fn logout(&self) {
        self.session_domain_service.logout().await
    }

    pub fn current_session(&self) -> Option<Session> {
        self.ctx.session()
    }

    pub fn is_signed_in(&self) -> bool {
        self.ctx.is_signed_in()
    }

    /// The message of the last failed login. It stays around until acknowledged or until the
    /// next login attempt.
    pub fn login_error(&self) -> Option<String> {
        self.ctx.login_error()
    }

    pub fn acknowledge_login_error(&self) {
        self.ctx.set_login_error(None)
    }
}
