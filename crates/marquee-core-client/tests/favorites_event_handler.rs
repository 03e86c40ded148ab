// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::Sequence;

use marquee_core_client::app::event_handlers::{FavoritesEventHandler, SessionEventHandler};
use marquee_core_client::domain::session::models::{Session, SessionTransition};
use marquee_core_client::dtos::{AccountId, FetchError, RequestError, SessionId};
use marquee_core_client::test::{mock_data, MockAppDependencies};

#[tokio::test]
async fn test_loads_favorites_after_sign_in() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.favorites_domain_service
        .expect_refresh()
        .once()
        .return_once(|| Box::pin(async { Ok(vec![mock_data::movie(1)]) }));
    deps.favorites_domain_service.expect_clear().never();

    let handler = FavoritesEventHandler::from(&deps.into_deps());
    handler
        .handle_session_transition(&SessionTransition::SignedIn(mock_data::session()))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_failed_load_is_not_an_error() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.favorites_domain_service
        .expect_refresh()
        .once()
        .return_once(|| {
            Box::pin(async {
                Err(FetchError::Request(RequestError::Transport {
                    message: "offline".to_string(),
                }))
            })
        });

    let handler = FavoritesEventHandler::from(&deps.into_deps());
    handler
        .handle_session_transition(&SessionTransition::SignedIn(mock_data::session()))
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_clears_then_reloads_on_identity_change() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let mut seq = Sequence::new();

    deps.favorites_domain_service
        .expect_clear()
        .once()
        .in_sequence(&mut seq)
        .return_const(());
    deps.favorites_domain_service
        .expect_refresh()
        .once()
        .in_sequence(&mut seq)
        .return_once(|| Box::pin(async { Ok(vec![]) }));

    let handler = FavoritesEventHandler::from(&deps.into_deps());
    handler
        .handle_session_transition(&SessionTransition::IdentityChanged {
            previous: mock_data::session(),
            current: Session {
                session_id: SessionId::from("other-session"),
                account_id: AccountId::from(1),
                username: "john.doe".to_string(),
            },
        })
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_clears_favorites_on_sign_out() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    deps.favorites_domain_service
        .expect_clear()
        .once()
        .return_const(());
    deps.favorites_domain_service.expect_refresh().never();

    let handler = FavoritesEventHandler::from(&deps.into_deps());
    handler
        .handle_session_transition(&SessionTransition::SignedOut)
        .await?;

    Ok(())
}
