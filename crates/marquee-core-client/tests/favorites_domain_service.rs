// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use mockall::{predicate, Sequence};
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use tokio::sync::{Barrier, Notify};

use marquee_core_client::app::deps::AppContext;
use marquee_core_client::domain::favorites::repos::FavoritesRepository as _;
use marquee_core_client::domain::favorites::services::impls::FavoritesDomainService;
use marquee_core_client::domain::favorites::services::FavoritesDomainService as _;
use marquee_core_client::dtos::{FetchError, MutationError, MutationKind, RequestError};
use marquee_core_client::test::{mock_data, MockFavoritesDomainServiceDependencies};
use marquee_core_client::{movie_id, AppConfig, ClientEvent, FavoriteTogglePolicy};

fn unguarded_context() -> Arc<AppContext> {
    let ctx = AppContext::new(AppConfig {
        favorite_toggle_policy: FavoriteTogglePolicy::Unguarded,
        ..Default::default()
    });
    ctx.replace_session(Some(mock_data::session()));
    Arc::new(ctx)
}

#[tokio::test]
async fn test_refresh_replaces_local_favorites() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    deps.favorites_repo.insert(mock_data::movie(99));

    deps.favorites_service
        .expect_load_favorites()
        .once()
        .with(predicate::eq(mock_data::session()), predicate::eq(1))
        .return_once(|_, _| Box::pin(async { Ok(mock_data::movie_page([3, 1, 2])) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::FavoritesChanged))
        .return_const(());

    let repo = deps.favorites_repo.clone();
    let service = FavoritesDomainService::from(deps.into_deps());

    let favorites = service.refresh().await?;

    assert_eq!(
        favorites.iter().map(|m| m.id).collect::<Vec<_>>(),
        vec![movie_id!(3), movie_id!(1), movie_id!(2)]
    );
    assert_eq!(repo.get_all(), favorites);
    assert!(!service.is_favorite(&movie_id!(99)));

    Ok(())
}

#[tokio::test]
async fn test_refresh_requires_session() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    deps.ctx.replace_session(None);
    deps.favorites_service.expect_load_favorites().never();

    let service = FavoritesDomainService::from(deps.into_deps());

    assert_eq!(service.refresh().await, Err(FetchError::NotSignedIn));

    Ok(())
}

#[tokio::test]
async fn test_discards_favorites_loaded_for_ended_session() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();

    let ctx = deps.ctx.clone();
    deps.favorites_service
        .expect_load_favorites()
        .once()
        .return_once(move |_, _| {
            ctx.replace_session(None);
            Box::pin(async { Ok(mock_data::movie_page([1, 2])) })
        });
    deps.client_event_dispatcher.expect_dispatch_event().never();

    let repo = deps.favorites_repo.clone();
    let service = FavoritesDomainService::from(deps.into_deps());

    assert_eq!(service.refresh().await, Ok(vec![]));
    assert!(repo.get_all().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_is_favorite_is_false_without_session() -> Result<()> {
    let deps = MockFavoritesDomainServiceDependencies::default();
    deps.favorites_repo.insert(mock_data::movie(1));

    let ctx = deps.ctx.clone();
    let service = FavoritesDomainService::from(deps.into_deps());

    assert!(service.is_favorite(&movie_id!(1)));
    assert_eq!(service.favorites(), vec![mock_data::movie(1)]);

    ctx.replace_session(None);

    assert!(!service.is_favorite(&movie_id!(1)));
    assert!(service.favorites().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_toggle_requires_session() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    deps.ctx.replace_session(None);
    deps.favorites_service.expect_set_favorite().never();
    deps.client_event_dispatcher.expect_dispatch_event().never();

    let service = FavoritesDomainService::from(deps.into_deps());

    let err = service
        .toggle(&mock_data::movie(1))
        .await
        .expect_err("Toggle should fail");

    assert_eq!(
        err,
        MutationError::NotSignedIn {
            mutation: MutationKind::Favorite
        }
    );
    assert_eq!(err.to_string(), "Must be logged in to manage favorites");

    Ok(())
}

#[tokio::test]
async fn test_sequential_toggles_add_then_remove() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    let mut seq = Sequence::new();

    deps.favorites_service
        .expect_set_favorite()
        .once()
        .in_sequence(&mut seq)
        .with(
            predicate::eq(mock_data::session()),
            predicate::eq(movie_id!(550)),
            predicate::eq(true),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.favorites_service
        .expect_set_favorite()
        .once()
        .in_sequence(&mut seq)
        .with(
            predicate::eq(mock_data::session()),
            predicate::eq(movie_id!(550)),
            predicate::eq(false),
        )
        .return_once(|_, _, _| Box::pin(async { Ok(()) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .with(predicate::eq(ClientEvent::FavoritesChanged))
        .return_const(());

    let service = FavoritesDomainService::from(deps.into_deps());
    let movie = mock_data::movie(550);

    assert_eq!(service.toggle(&movie).await, Ok(true));
    assert!(service.is_favorite(&movie.id));
    assert_eq!(service.favorites(), vec![movie.clone()]);

    assert_eq!(service.toggle(&movie).await, Ok(false));
    assert!(!service.is_favorite(&movie.id));
    assert!(service.favorites().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_failed_toggle_reports_and_reloads() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    let mut seq = Sequence::new();

    deps.favorites_service
        .expect_set_favorite()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _, _| {
            Box::pin(async {
                Err(RequestError::Status {
                    status: 500,
                    message: None,
                })
            })
        });
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(ClientEvent::MutationFailed {
            mutation: MutationKind::Favorite,
            message: "Request failed with status 500".to_string(),
        }))
        .return_const(());
    deps.favorites_service
        .expect_load_favorites()
        .once()
        .in_sequence(&mut seq)
        .return_once(|_, _| Box::pin(async { Ok(mock_data::movie_page([7])) }));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .in_sequence(&mut seq)
        .with(predicate::eq(ClientEvent::FavoritesChanged))
        .return_const(());

    let service = FavoritesDomainService::from(deps.into_deps());

    assert_eq!(
        service.toggle(&mock_data::movie(550)).await,
        Err(MutationError::Request(RequestError::Status {
            status: 500,
            message: None
        }))
    );
    assert!(!service.is_favorite(&movie_id!(550)));
    assert_eq!(service.favorites(), vec![mock_data::movie(7)]);

    Ok(())
}

#[tokio::test]
async fn test_overlapping_unguarded_toggles_send_same_direction() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    deps.ctx = unguarded_context();

    let barrier = Arc::new(Barrier::new(2));
    let sent_directions = Arc::new(Mutex::new(Vec::new()));

    {
        let sent_directions = sent_directions.clone();
        deps.favorites_service
            .expect_set_favorite()
            .times(2)
            .returning(move |_, _, is_favorite| {
                sent_directions.lock().push(is_favorite);
                let barrier = barrier.clone();
                Box::pin(async move {
                    barrier.wait().await;
                    Ok(())
                })
            });
    }
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .times(2)
        .return_const(());

    let service = FavoritesDomainService::from(deps.into_deps());
    let movie = mock_data::movie(550);

    let (first, second) = tokio::join!(service.toggle(&movie), service.toggle(&movie));

    assert_eq!(first, Ok(true));
    assert_eq!(second, Ok(true));
    assert_eq!(*sent_directions.lock(), vec![true, true]);
    assert_eq!(service.favorites(), vec![movie]);

    Ok(())
}

#[tokio::test]
async fn test_rejects_toggle_while_previous_is_pending() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();

    let notify = Arc::new(Notify::new());

    {
        let notify = notify.clone();
        deps.favorites_service
            .expect_set_favorite()
            .once()
            .with(
                predicate::always(),
                predicate::eq(movie_id!(550)),
                predicate::eq(true),
            )
            .return_once(move |_, _, _| {
                Box::pin(async move {
                    notify.notified().await;
                    Ok(())
                })
            });
    }
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::FavoritesChanged))
        .return_const(());

    let service = FavoritesDomainService::from(deps.into_deps());
    let movie = mock_data::movie(550);

    let (first, second) = tokio::join!(service.toggle(&movie), async {
        let result = service.toggle(&movie).await;
        notify.notify_one();
        result
    });

    assert_eq!(first, Ok(true));
    assert_eq!(
        second,
        Err(MutationError::ToggleInFlight {
            movie_id: movie_id!(550)
        })
    );
    assert!(service.is_favorite(&movie.id));

    Ok(())
}

#[tokio::test]
async fn test_clear_empties_favorites() -> Result<()> {
    let mut deps = MockFavoritesDomainServiceDependencies::default();
    deps.favorites_repo.insert(mock_data::movie(1));
    deps.client_event_dispatcher
        .expect_dispatch_event()
        .once()
        .with(predicate::eq(ClientEvent::FavoritesChanged))
        .return_const(());

    let service = FavoritesDomainService::from(deps.into_deps());
    service.clear();

    assert!(service.favorites().is_empty());

    Ok(())
}
