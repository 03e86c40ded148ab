// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::session::models::Session;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionTransition {
    /// Anonymous → Authenticated
    SignedIn(Session),
    /// Authenticated → Authenticated with a different session or account id.
    IdentityChanged { previous: Session, current: Session },
    /// Authenticated → Anonymous
    SignedOut,
}

impl SessionTransition {
    /// Classifies a change of the current session. Returns `None` if nothing that
    /// account-scoped state depends on has changed.
    pub fn between(previous: Option<&Session>, current: Option<&Session>) -> Option<Self> {
        match (previous, current) {
            (None, None) => None,
            (None, Some(current)) => Some(Self::SignedIn(current.clone())),
            (Some(_), None) => Some(Self::SignedOut),
            (Some(previous), Some(current)) if previous.has_same_identity(current) => None,
            (Some(previous), Some(current)) => Some(Self::IdentityChanged {
                previous: previous.clone(),
                current: current.clone(),
            }),
        }
    }

    pub fn current_session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            Self::IdentityChanged { current, .. } => Some(current),
            Self::SignedOut => None,
        }
    }
}
