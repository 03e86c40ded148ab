// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::{ClientEventDispatcherTrait, SessionObserver};
use crate::domain::favorites::repos::FavoritesRepository;
use crate::domain::favorites::services::{FavoritesDomainService, FavoritesService};
use crate::domain::movies::models::ImageUrlBuilder;
use crate::domain::movies::services::MovieCatalogService;
use crate::domain::ratings::services::RatingService;
use crate::domain::session::repos::SessionRepository;
use crate::domain::session::services::{AuthenticationService, SessionDomainService};

pub type DynAppContext = Arc<AppContext>;
pub type DynAuthenticationService = Arc<dyn AuthenticationService>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynFavoritesDomainService = Arc<dyn FavoritesDomainService>;
pub type DynFavoritesRepository = Arc<dyn FavoritesRepository>;
pub type DynFavoritesService = Arc<dyn FavoritesService>;
pub type DynImageUrlBuilder = Arc<ImageUrlBuilder>;
pub type DynMovieCatalogService = Arc<dyn MovieCatalogService>;
pub type DynRatingService = Arc<dyn RatingService>;
pub type DynSessionDomainService = Arc<dyn SessionDomainService>;
pub type DynSessionObserver = Arc<dyn SessionObserver>;
pub type DynSessionRepository = Arc<dyn SessionRepository>;

pub struct AppDependencies {
    pub authentication_service: DynAuthenticationService,
    pub catalog_service: DynMovieCatalogService,
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub ctx: DynAppContext,
    pub favorites_domain_service: DynFavoritesDomainService,
    pub favorites_repo: DynFavoritesRepository,
    pub favorites_service: DynFavoritesService,
    pub image_url_builder: DynImageUrlBuilder,
    pub rating_service: DynRatingService,
    pub session_domain_service: DynSessionDomainService,
    pub session_observer: DynSessionObserver,
    pub session_repo: DynSessionRepository,
}
