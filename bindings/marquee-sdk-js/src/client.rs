// marquee/marquee-sdk-js
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use secrecy::SecretString;
use tracing::{info, Level};
use tracing_subscriber::fmt::format::{FmtSpan, Pretty};
use tracing_subscriber::prelude::*;
use url::Url;
use wasm_bindgen::prelude::*;

use marquee_core_client::dtos::{CatalogQuery, MovieId, MovieSummary, Route};
use marquee_core_client::{AppConfig, Client as MarqueeClient, FavoriteTogglePolicy};
use marquee_store::prelude::{LocalStorageDriver, Store};

use crate::delegate::{Delegate, JSDelegate};
use crate::error::{Result, WasmError};
use crate::search::SearchInput;
use crate::types::{from_js, to_js, ImageSizeKind, MovieListKind};

#[derive(Debug, PartialEq, Clone)]
#[wasm_bindgen(js_name = "MarqueeClientConfig")]
pub struct ClientConfig {
    #[wasm_bindgen(skip)]
    pub api_key: String,

    #[wasm_bindgen(skip)]
    pub base_url: Option<String>,

    #[wasm_bindgen(skip)]
    pub image_base_url: Option<String>,

    /// The pause in typing (in milliseconds) after which a search is issued. Default is 500.
    #[wasm_bindgen(js_name = "searchDebounceMs")]
    pub search_debounce_ms: u32,

    /// Defines if a favorite toggle is rejected while a previous toggle for the same movie
    /// is still in progress. Default is true.
    #[wasm_bindgen(js_name = "rejectOverlappingToggles")]
    pub reject_overlapping_toggles: bool,

    #[wasm_bindgen(js_name = "loggingEnabled")]
    pub logging_enabled: bool,

    #[wasm_bindgen(skip)]
    pub logging_min_level: String,
}

#[wasm_bindgen(js_class = "MarqueeClientConfig")]
impl ClientConfig {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Default::default()
    }

    #[wasm_bindgen(getter, js_name = "apiKey")]
    pub fn api_key(&self) -> String {
        self.api_key.clone()
    }

    #[wasm_bindgen(setter, js_name = "apiKey")]
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key
    }

    #[wasm_bindgen(getter, js_name = "baseUrl")]
    pub fn base_url(&self) -> Option<String> {
        self.base_url.clone()
    }

    #[wasm_bindgen(setter, js_name = "baseUrl")]
    pub fn set_base_url(&mut self, base_url: Option<String>) {
        self.base_url = base_url
    }

    #[wasm_bindgen(getter, js_name = "imageBaseUrl")]
    pub fn image_base_url(&self) -> Option<String> {
        self.image_base_url.clone()
    }

    #[wasm_bindgen(setter, js_name = "imageBaseUrl")]
    pub fn set_image_base_url(&mut self, image_base_url: Option<String>) {
        self.image_base_url = image_base_url
    }

    #[wasm_bindgen(getter, js_name = "loggingMinLevel")]
    pub fn logging_min_level(&self) -> String {
        self.logging_min_level.clone()
    }

    #[wasm_bindgen(setter, js_name = "loggingMinLevel")]
    pub fn set_logging_min_level(&mut self, level: String) {
        self.logging_min_level = level
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_key: String::new(),
            base_url: None,
            image_base_url: None,
            search_debounce_ms: 500,
            reject_overlapping_toggles: true,
            logging_enabled: true,
            logging_min_level: "info".to_string(),
        }
    }
}

impl From<&ClientConfig> for AppConfig {
    fn from(config: &ClientConfig) -> Self {
        AppConfig {
            search_debounce_interval: Duration::from_millis(config.search_debounce_ms.into()),
            favorite_toggle_policy: if config.reject_overlapping_toggles {
                FavoriteTogglePolicy::RejectWhilePending
            } else {
                FavoriteTogglePolicy::Unguarded
            },
            ..Default::default()
        }
    }
}

#[wasm_bindgen(js_name = "MarqueeClient")]
pub struct Client {
    client: MarqueeClient,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn movie_id(value: f64) -> Result<MovieId> {
    if value.fract() != 0.0 || value < 1.0 || value > u64::MAX as f64 {
        return Err(WasmError::from(anyhow::format_err!("{value} is not a valid movie id.")).into());
    }
    Ok(MovieId::new(value as u64))
}

#[wasm_bindgen(js_class = "MarqueeClient")]
impl Client {
    pub async fn init(delegate: JSDelegate, config: Option<ClientConfig>) -> Result<Client> {
        let config = config.unwrap_or_default();

        if config.logging_enabled {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .without_time()
                .with_writer(
                    tracing_web::MakeWebConsoleWriter::new()
                        .with_pretty_level()
                        .with_max_level(config.logging_min_level.parse().unwrap_or(Level::INFO)),
                )
                .with_level(false)
                .with_span_events(FmtSpan::ACTIVE);
            let perf_layer =
                tracing_web::performance_layer().with_details_from_fields(Pretty::default());

            tracing_subscriber::registry()
                .with(fmt_layer)
                .with(perf_layer)
                .init();

            info!("marquee-sdk-js Version {VERSION}");
        }

        let mut builder = MarqueeClient::builder()
            .set_store(Store::new(LocalStorageDriver::new()))
            .set_api_key(config.api_key.clone())
            .set_config(AppConfig::from(&config))
            .set_delegate(Some(Box::new(Delegate::new(delegate))));

        if let Some(base_url) = &config.base_url {
            builder = builder.set_base_url(Url::parse(base_url)?);
        }
        if let Some(image_base_url) = &config.image_base_url {
            builder = builder.set_image_base_url(Url::parse(image_base_url)?);
        }

        Ok(Client {
            client: builder.build().await,
        })
    }

    /// Returns the new session. Throws with the upstream message if TMDB rejected any step
    /// of the login exchange.
    pub async fn login(&self, username: &str, password: &str) -> Result<JsValue> {
        let session = self
            .client
            .login(username, SecretString::new(password.to_string()))
            .await?;
        to_js(&session)
    }

    pub async fn logout(&self) -> Result<()> {
        self.client.logout().await;
        Ok(())
    }

    #[wasm_bindgen(js_name = "currentSession")]
    pub fn current_session(&self) -> Result<JsValue> {
        match self.client.current_session() {
            Some(session) => to_js(&session),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = "loginError")]
    pub fn login_error(&self) -> Option<String> {
        self.client.session.login_error()
    }

    #[wasm_bindgen(js_name = "acknowledgeLoginError")]
    pub fn acknowledge_login_error(&self) {
        self.client.session.acknowledge_login_error()
    }

    #[wasm_bindgen(js_name = "loadCatalog")]
    pub async fn load_catalog(&self, query: JsValue) -> Result<JsValue> {
        let query: CatalogQuery = from_js(query)?;
        to_js(&self.client.catalog.load_catalog(&query).await)
    }

    #[wasm_bindgen(js_name = "loadList")]
    pub async fn load_list(&self, list: MovieListKind, page: u32) -> Result<JsValue> {
        to_js(&self.client.catalog.load_list(list.into(), page).await)
    }

    #[wasm_bindgen(js_name = "loadGenres")]
    pub async fn load_genres(&self) -> Result<JsValue> {
        to_js(&self.client.catalog.load_genres().await)
    }

    /// Starts a search-as-you-type session. `callback` receives the query and the resulting
    /// page once typing pauses.
    #[wasm_bindgen(js_name = "startSearch")]
    pub fn start_search(&self, callback: js_sys::Function) -> SearchInput {
        SearchInput::start(self.client.clone(), callback)
    }

    #[wasm_bindgen(js_name = "loadDetailPage")]
    pub async fn load_detail_page(&self, movie_id_value: f64) -> Result<JsValue> {
        let movie_id = movie_id(movie_id_value)?;
        match self.client.movie_details.load_detail_page(&movie_id).await {
            Some(page) => to_js(&page),
            None => Ok(JsValue::UNDEFINED),
        }
    }

    #[wasm_bindgen(js_name = "loadCredits")]
    pub async fn load_credits(&self, movie_id_value: f64) -> Result<JsValue> {
        let movie_id = movie_id(movie_id_value)?;
        to_js(&self.client.movie_details.load_credits(&movie_id).await)
    }

    #[wasm_bindgen(js_name = "loadVideos")]
    pub async fn load_videos(&self, movie_id_value: f64) -> Result<JsValue> {
        let movie_id = movie_id(movie_id_value)?;
        to_js(&self.client.movie_details.load_videos(&movie_id).await)
    }

    #[wasm_bindgen(js_name = "imageUrl")]
    pub fn image_url(&self, path: Option<String>, size: ImageSizeKind) -> Option<String> {
        self.client.catalog.image_url(path.as_deref(), size.into())
    }

    pub fn favorites(&self) -> Result<JsValue> {
        to_js(&self.client.favorites.favorites())
    }

    #[wasm_bindgen(js_name = "isFavorite")]
    pub fn is_favorite(&self, movie_id_value: f64) -> Result<bool> {
        Ok(self.client.favorites.is_favorite(&movie_id(movie_id_value)?))
    }

    #[wasm_bindgen(js_name = "refreshFavorites")]
    pub async fn refresh_favorites(&self) -> Result<JsValue> {
        to_js(&self.client.favorites.refresh().await?)
    }

    /// Returns whether the movie is a favorite after the toggle.
    #[wasm_bindgen(js_name = "toggleFavorite")]
    pub async fn toggle_favorite(&self, movie: JsValue) -> Result<bool> {
        let movie: MovieSummary = from_js(movie)?;
        Ok(self.client.favorites.toggle(&movie).await?)
    }

    /// Rates a movie with 0.5 to 5 stars. Returns the accepted star value.
    #[wasm_bindgen(js_name = "rateMovie")]
    pub async fn rate_movie(&self, movie_id_value: f64, stars: f32) -> Result<f32> {
        let movie_id = movie_id(movie_id_value)?;
        Ok(self.client.ratings.rate_movie(&movie_id, stars).await?.stars())
    }

    #[wasm_bindgen(js_name = "removeRating")]
    pub async fn remove_rating(&self, movie_id_value: f64) -> Result<()> {
        let movie_id = movie_id(movie_id_value)?;
        Ok(self.client.ratings.remove_rating(&movie_id).await?)
    }

    #[wasm_bindgen(js_name = "ratedMovies")]
    pub async fn rated_movies(&self, page: u32) -> Result<JsValue> {
        to_js(&self.client.ratings.rated_movies(page).await)
    }

    /// Passes `route` through the authentication gate.
    #[wasm_bindgen(js_name = "resolveRoute")]
    pub fn resolve_route(&self, route: JsValue) -> Result<JsValue> {
        let route: Route = from_js(route)?;
        to_js(&self.client.navigation.resolve(route))
    }

    #[wasm_bindgen(js_name = "routeAfterLogin")]
    pub fn route_after_login(&self) -> Result<JsValue> {
        to_js(&self.client.navigation.route_after_login())
    }
}

impl From<MarqueeClient> for Client {
    fn from(client: MarqueeClient) -> Self {
        Client { client }
    }
}
