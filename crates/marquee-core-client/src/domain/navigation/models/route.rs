// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::movies::models::CatalogQuery;
use crate::domain::shared::models::MovieId;

/// The four views of the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "view")]
pub enum Route {
    Catalog(CatalogQuery),
    MovieDetail { id: MovieId },
    Favorites,
    #[serde(rename_all = "camelCase")]
    Login { return_to: Option<Box<Route>> },
}

impl Route {
    /// Views that require a session.
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Favorites)
    }
}

impl Default for Route {
    fn default() -> Self {
        Route::Catalog(CatalogQuery::default())
    }
}
