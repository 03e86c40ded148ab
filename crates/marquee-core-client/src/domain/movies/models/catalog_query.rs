// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::GenreId;

/// What the catalog view shows. A non-blank search wins over a genre filter, a genre filter
/// wins over the popular list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub genre: Option<GenreId>,
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CatalogSource<'a> {
    Search(&'a str),
    Genre(GenreId),
    Popular,
}

impl CatalogQuery {
    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search: Some(query.into()),
            ..Default::default()
        }
    }

    pub fn genre(genre: GenreId) -> Self {
        Self {
            genre: Some(genre),
            ..Default::default()
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub(crate) fn source(&self) -> CatalogSource<'_> {
        if let Some(search) = self
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            return CatalogSource::Search(search);
        }
        if let Some(genre) = self.genre {
            return CatalogSource::Genre(genre);
        }
        CatalogSource::Popular
    }
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: None,
            genre: None,
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_precedence() {
        let query = CatalogQuery {
            search: Some("  batman ".to_string()),
            genre: Some(GenreId::from(28)),
            page: 1,
        };
        assert_eq!(query.source(), CatalogSource::Search("batman"));

        let query = CatalogQuery {
            search: Some("   ".to_string()),
            genre: Some(GenreId::from(28)),
            page: 1,
        };
        assert_eq!(query.source(), CatalogSource::Genre(GenreId::from(28)));

        assert_eq!(CatalogQuery::default().source(), CatalogSource::Popular);
    }
}
