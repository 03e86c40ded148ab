// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use tracing::{error, info};

use marquee_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynRatingService};
use crate::domain::ratings::models::{RatedMovie, Rating};
use crate::domain::shared::models::{MovieId, MutationError, MutationKind, Page, RequestError};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct RatingsService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    rating_service: DynRatingService,
}

impl RatingsService {
    /// Rates a movie with 0.5 to 5 stars in steps of 0.5.
    pub async fn rate_movie(
        &self,
        movie_id: &MovieId,
        stars: f32,
    ) -> Result<Rating, MutationError> {
        let Some(session) = self.ctx.session() else {
            return Err(MutationError::NotSignedIn {
                mutation: MutationKind::Rating,
            });
        };
        let rating = Rating::from_stars(stars)?;

        let result = self
            .rating_service
            .rate_movie(&session, movie_id, rating)
            .await;
        self.finish_mutation(movie_id, Some(rating), result)?;

        Ok(rating)
    }

    pub async fn remove_rating(&self, movie_id: &MovieId) -> Result<(), MutationError> {
        let Some(session) = self.ctx.session() else {
            return Err(MutationError::NotSignedIn {
                mutation: MutationKind::Rating,
            });
        };

        let result = self.rating_service.delete_rating(&session, movie_id).await;
        self.finish_mutation(movie_id, None, result)
    }

    /// The movies the signed-in account has rated. Empty while signed out or if loading
    /// fails.
    pub async fn rated_movies(&self, page: u32) -> Page<RatedMovie> {
        let page = page.max(1);
        let Some(session) = self.ctx.session() else {
            return Page::empty(page);
        };

        match self.rating_service.load_rated_movies(&session, page).await {
            Ok(movies) => movies,
            Err(err) => {
                error!("Failed to load rated movies. {}", err.to_string());
                Page::empty(page)
            }
        }
    }

    /// Looks up the rating the signed-in account gave `movie_id` on the first page of rated
    /// movies.
    pub async fn rating_for_movie(&self, movie_id: &MovieId) -> Option<Rating> {
        self.rated_movies(1)
            .await
            .results
            .into_iter()
            .find(|rated| rated.movie.id == *movie_id)
            .map(|rated| rated.rating)
    }
}

impl RatingsService {
    fn finish_mutation(
        &self,
        movie_id: &MovieId,
        rating: Option<Rating>,
        result: Result<(), RequestError>,
    ) -> Result<(), MutationError> {
        match result {
            Ok(()) => {
                info!("Updated rating of movie {} to {:?}.", movie_id, rating);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::RatingChanged {
                        movie_id: *movie_id,
                        rating,
                    });
                Ok(())
            }
            Err(err) => {
                error!("Failed to update rating of movie {}. {}", movie_id, err);
                self.client_event_dispatcher
                    .dispatch_event(ClientEvent::MutationFailed {
                        mutation: MutationKind::Rating,
                        message: err.to_string(),
                    });
                Err(err.into())
            }
        }
    }
}
