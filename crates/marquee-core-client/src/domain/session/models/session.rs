// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{AccountId, SessionId};

/// One authenticated identity. A `Session` is always fully populated, absence is
/// expressed as `Option<Session>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub session_id: SessionId,
    pub account_id: AccountId,
    pub username: String,
}

impl Session {
    /// Records read back from storage might have been tampered with or written by an older
    /// version. Those are only adopted when every field carries a value.
    pub fn is_complete(&self) -> bool {
        !self.session_id.is_empty() && self.account_id.value() > 0 && !self.username.is_empty()
    }

    /// Favorites are scoped to this pair. A username change alone doesn't affect them.
    pub fn has_same_identity(&self, other: &Session) -> bool {
        self.session_id == other.session_id && self.account_id == other.account_id
    }
}
