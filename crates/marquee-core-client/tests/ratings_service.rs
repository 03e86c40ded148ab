// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use marquee_core_client::app::services::RatingsService;
use marquee_core_client::dtos::{
    MutationError, MutationKind, Page, RatedMovie, Rating, RatingError, RequestError,
};
use marquee_core_client::test::{mock_data, MockAppDependencies};
use marquee_core_client::{movie_id, ClientEvent};

#[tokio::test]
async fn test_rates_movie_with_doubled_star_value() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.rating_service
        .expect_rate_movie()
        .once()
        .with(
            predicate::eq(mock_data::session()),
            predicate::eq(movie_id!(550)),
            predicate::eq(Rating::from_value(7.0)?),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::RatingChanged {
            movie_id: movie_id!(550),
            rating: Some(Rating::from_value(7.0)?),
        }))
        .return_const(());

    let service = RatingsService::from(&deps.into_deps());
    let rating = service.rate_movie(&movie_id!(550), 3.5).await?;

    assert_eq!(rating.value(), 7.0);
    assert_eq!(rating.stars(), 3.5);

    Ok(())
}

#[tokio::test]
async fn test_rejects_invalid_stars_locally() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.rating_service.expect_rate_movie().never();
    deps.client_event_dispatcher.expect_dispatch_event().never();

    let service = RatingsService::from(&deps.into_deps());

    assert_eq!(
        service.rate_movie(&movie_id!(550), 3.7).await,
        Err(MutationError::InvalidRating(RatingError::InvalidStars {
            stars: 3.7
        }))
    );
    assert!(service.rate_movie(&movie_id!(550), 0.0).await.is_err());

    Ok(())
}

#[tokio::test]
async fn test_rating_requires_session() -> Result<()> {
    let mut deps = MockAppDependencies::signed_out();
    deps.rating_service.expect_rate_movie().never();
    deps.rating_service.expect_load_rated_movies().never();

    let service = RatingsService::from(&deps.into_deps());

    let err = service
        .rate_movie(&movie_id!(550), 4.0)
        .await
        .expect_err("Rating should fail");
    assert_eq!(
        err,
        MutationError::NotSignedIn {
            mutation: MutationKind::Rating
        }
    );
    assert_eq!(err.to_string(), "Must be logged in to rate movies");
    assert!(service.rated_movies(1).await.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_removal_is_reported() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.rating_service
        .expect_delete_rating()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                Err(RequestError::Status {
                    status: 401,
                    message: Some(
                        "Authentication failed: You do not have permissions to access the service."
                            .to_string(),
                    ),
                })
            })
        });
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::MutationFailed {
            mutation: MutationKind::Rating,
            message: "Request failed with status 401: Authentication failed: You do not have permissions to access the service.".to_string(),
        }))
        .return_const(());

    let service = RatingsService::from(&deps.into_deps());

    assert!(matches!(
        service.remove_rating(&movie_id!(550)).await,
        Err(MutationError::Request(RequestError::Status { status: 401, .. }))
    ));

    Ok(())
}

#[tokio::test]
async fn test_finds_rating_among_rated_movies() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let rated = Page {
        page: 1,
        results: vec![
            RatedMovie {
                movie: mock_data::movie(13),
                rating: Rating::from_value(9.5)?,
            },
            RatedMovie {
                movie: mock_data::movie(550),
                rating: Rating::from_value(6.0)?,
            },
        ],
        total_pages: 1,
        total_results: 2,
    };
    deps.rating_service
        .expect_load_rated_movies()
        .times(2)
        .with(predicate::eq(mock_data::session()), predicate::eq(1))
        .returning(move |_, _| {
            let rated = rated.clone();
            Box::pin(async move { Ok(rated) })
        });

    let service = RatingsService::from(&deps.into_deps());

    assert_eq!(
        service.rating_for_movie(&movie_id!(550)).await,
        Some(Rating::from_value(6.0)?)
    );
    assert_eq!(service.rating_for_movie(&movie_id!(680)).await, None);

    Ok(())
}
