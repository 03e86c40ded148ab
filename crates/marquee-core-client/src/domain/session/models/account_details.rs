// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::AccountId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDetails {
    pub id: AccountId,
    pub username: String,
}
