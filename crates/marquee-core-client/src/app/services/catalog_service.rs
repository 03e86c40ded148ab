// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use futures::{Stream, StreamExt};
use tracing::{error, info};

use marquee_proc_macros::InjectDependencies;
use marquee_wasm_utils::{MarqueeStreamExt, SendUnlessWasm};

use crate::app::deps::{DynAppContext, DynImageUrlBuilder, DynMovieCatalogService};
use crate::domain::movies::models::{
    CatalogQuery, CatalogSource, Genre, ImageSize, MovieList, MovieSummary,
};
use crate::domain::shared::models::{Page, RequestError};

#[derive(InjectDependencies)]
pub struct CatalogService {
    #[inject]
    catalog_service: DynMovieCatalogService,
    #[inject]
    ctx: DynAppContext,
    #[inject]
    image_url_builder: DynImageUrlBuilder,
}

impl CatalogService {
    /// Loads the catalog page described by `query`. Failures are logged and yield an
    /// empty page.
    pub async fn load_catalog(&self, query: &CatalogQuery) -> Page<MovieSummary> {
        let page = query.page.max(1);

        let result = match query.source() {
            CatalogSource::Search(search) => {
                self.catalog_service.search_movies(search, page).await
            }
            CatalogSource::Genre(genre) => {
                self.catalog_service.discover_by_genre(&genre, page).await
            }
            CatalogSource::Popular => {
                self.catalog_service.load_list(MovieList::Popular, page).await
            }
        };

        self.degrade_page("catalog", page, result)
    }

    pub async fn load_list(&self, list: MovieList, page: u32) -> Page<MovieSummary> {
        let page = page.max(1);
        let result = self.catalog_service.load_list(list, page).await;
        self.degrade_page(&list.to_string(), page, result)
    }

    /// Loads trending movies for the configured time window.
    pub async fn load_trending(&self, page: u32) -> Page<MovieSummary> {
        self.load_list(MovieList::Trending(self.ctx.config.trending_window), page)
            .await
    }

    pub async fn load_genres(&self) -> Vec<Genre> {
        match self.catalog_service.load_genres().await {
            Ok(genres) => genres,
            Err(err) => {
                error!("Failed to load genres. {}", err.to_string());
                vec![]
            }
        }
    }

    /// Turns raw search input (one item per keystroke) into catalog pages. A search is only
    /// issued once the input has been quiet for the configured debounce interval, and only
    /// if the trimmed input differs from the previous search. Blank input falls back to the
    /// popular list.
    pub fn search_as_you_type<S>(
        &self,
        input: S,
    ) -> impl Stream<Item = (CatalogQuery, Page<MovieSummary>)> + '_
    where
        S: Stream<Item = String> + SendUnlessWasm + 'static,
    {
        let interval = self.ctx.config.search_debounce_interval;

        input
            .map(|text| text.trim().to_string())
            .debounced(interval)
            .scan(None::<String>, |last_query, query| {
                let is_repeat = last_query.as_deref() == Some(query.as_str());
                *last_query = Some(query.clone());
                futures::future::ready(Some((!is_repeat).then_some(query)))
            })
            .filter_map(futures::future::ready)
            .then(move |query| async move {
                let query = CatalogQuery::search(query);
                let page = self.load_catalog(&query).await;
                (query, page)
            })
    }

    pub fn image_url(&self, path: Option<&str>, size: ImageSize) -> Option<String> {
        self.image_url_builder.url(path, size)
    }
}

impl CatalogService {
    fn degrade_page(
        &self,
        label: &str,
        page: u32,
        result: Result<Page<MovieSummary>, RequestError>,
    ) -> Page<MovieSummary> {
        match result {
            Ok(result) => {
                info!(
                    "Loaded {} movies for {} (page {}/{}).",
                    result.results.len(),
                    label,
                    result.page,
                    result.total_pages
                );
                result.capped(self.ctx.config.max_catalog_pages)
            }
            Err(err) => {
                error!("Failed to load {}. {}", label, err.to_string());
                Page::empty(page)
            }
        }
    }
}
