// marquee/marquee-core-client
//
// Copyright: 2024, Marquee Developers
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marquee_core_client::domain::favorites::services::FavoritesService;
use marquee_core_client::domain::movies::services::MovieCatalogService;
use marquee_core_client::domain::ratings::services::RatingService;
use marquee_core_client::domain::session::models::RequestToken;
use marquee_core_client::domain::session::services::AuthenticationService;
use marquee_core_client::dtos::{GenreId, MovieList, Rating, RequestError, SessionId, TimeWindow};
use marquee_core_client::infra::tmdb::TmdbClient;
use marquee_core_client::test::mock_data;
use marquee_core_client::{movie_id, TmdbConfig};

const API_KEY: &str = "test-api-key";

fn client(server: &MockServer) -> TmdbClient {
    TmdbClient::new(&TmdbConfig {
        base_url: server.uri(),
        api_key: SecretString::new(API_KEY.to_string()),
        ..Default::default()
    })
}

fn movie_json(id: u64, title: &str) -> serde_json::Value {
    json!({
        "adult": false,
        "backdrop_path": "/backdrop.jpg",
        "genre_ids": [18, 53],
        "id": id,
        "original_language": "en",
        "overview": "An overview.",
        "popularity": 61.416,
        "poster_path": "/poster.jpg",
        "release_date": "1999-10-15",
        "title": title,
        "vote_average": 8.4,
        "vote_count": 26280
    })
}

#[tokio::test]
async fn test_sends_api_key_and_decodes_page() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("api_key", API_KEY))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 2,
            "results": [movie_json(550, "Fight Club"), movie_json(680, "Pulp Fiction")],
            "total_pages": 43210,
            "total_results": 864200
        })))
        .expect(1)
        .mount(&server)
        .await;

    let page = client(&server).load_list(MovieList::Popular, 2).await?;

    assert_eq!(page.page, 2);
    assert_eq!(page.total_pages, 43210);
    assert_eq!(
        page.results.iter().map(|m| m.title.as_str()).collect::<Vec<_>>(),
        vec!["Fight Club", "Pulp Fiction"]
    );
    assert_eq!(page.results[0].release_year(), Some(1999));
    assert_eq!(
        page.results[0].genre_ids,
        vec![GenreId::from(18), GenreId::from(53)]
    );

    Ok(())
}

#[tokio::test]
async fn test_uses_search_discover_and_trending_endpoints() -> Result<()> {
    let server = MockServer::start().await;
    let empty_page = json!({ "page": 1, "results": [], "total_pages": 1, "total_results": 0 });

    Mock::given(method("GET"))
        .and(path("/search/movie"))
        .and(query_param("query", "the matrix"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/discover/movie"))
        .and(query_param("with_genres", "878"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page.clone()))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/trending/movie/week"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    assert!(client.search_movies("the matrix", 1).await?.is_empty());
    assert!(client
        .discover_by_genre(&GenreId::from(878), 1)
        .await?
        .is_empty());
    assert!(client
        .load_list(MovieList::Trending(TimeWindow::Week), 1)
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn test_passes_through_upstream_status_message() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/authentication/token/validate_with_login"))
        .and(body_json(json!({
            "username": "jane.doe",
            "password": "wrong",
            "request_token": "token-1"
        })))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "status_code": 30,
            "status_message": "Invalid username and/or password: You did not provide a valid login."
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .validate_with_login(
            "jane.doe",
            &SecretString::new("wrong".to_string()),
            &RequestToken::new("token-1"),
        )
        .await
        .expect_err("Validation should fail");

    assert_eq!(
        err,
        RequestError::Status {
            status: 401,
            message: Some(
                "Invalid username and/or password: You did not provide a valid login.".to_string()
            ),
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_error_without_status_body() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/genre/movie/list"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let err = client(&server)
        .load_genres()
        .await
        .expect_err("Request should fail");

    assert_eq!(
        err,
        RequestError::Status {
            status: 503,
            message: None
        }
    );
    assert_eq!(err.to_string(), "Request failed with status 503");

    Ok(())
}

#[tokio::test]
async fn test_malformed_body_is_a_schema_error() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/movie/550"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": "Fight Club" })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/authentication/token/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let client = client(&server);

    let err = client
        .load_movie_details(&movie_id!(550))
        .await
        .expect_err("Decoding should fail");
    assert!(matches!(err, RequestError::Schema(_)));

    let err = client
        .create_request_token()
        .await
        .expect_err("Decoding should fail");
    assert!(matches!(err, RequestError::Schema(_)));

    Ok(())
}

#[tokio::test]
async fn test_unreachable_server_is_a_transport_error() -> Result<()> {
    let client = TmdbClient::new(&TmdbConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        api_key: SecretString::new(API_KEY.to_string()),
        ..Default::default()
    });

    let err = client
        .create_request_token()
        .await
        .expect_err("Request should fail");
    assert!(matches!(err, RequestError::Transport { .. }));

    Ok(())
}

#[tokio::test]
async fn test_session_scoped_writes() -> Result<()> {
    let server = MockServer::start().await;
    let session = mock_data::session();
    let account_path = format!("/account/{}/favorite", session.account_id);

    Mock::given(method("POST"))
        .and(path(account_path.as_str()))
        .and(query_param("session_id", session.session_id.as_str()))
        .and(body_json(json!({
            "media_type": "movie",
            "media_id": 550,
            "favorite": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/movie/550/rating"))
        .and(query_param("session_id", session.session_id.as_str()))
        .and(body_json(json!({ "value": 8.5 })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "success": true,
            "status_code": 1,
            "status_message": "Success."
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/authentication/session"))
        .and(body_json(json!({ "session_id": session.session_id.as_str() })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);

    client
        .set_favorite(&session, &movie_id!(550), true)
        .await?;
    client
        .rate_movie(&session, &movie_id!(550), Rating::from_value(8.5)?)
        .await?;

    let err = client
        .delete_session(&SessionId::from(session.session_id.as_str()))
        .await
        .expect_err("Deletion should fail");
    assert_eq!(
        err,
        RequestError::Status {
            status: 200,
            message: None
        }
    );

    Ok(())
}

#[tokio::test]
async fn test_decodes_favorites_and_rated_movies() -> Result<()> {
    let server = MockServer::start().await;
    let session = mock_data::session();

    let mut rated = movie_json(13, "Forrest Gump");
    rated["rating"] = json!(9.5);

    Mock::given(method("GET"))
        .and(path(format!("/account/{}/favorite/movies", session.account_id).as_str()))
        .and(query_param("session_id", session.session_id.as_str()))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [movie_json(550, "Fight Club")],
            "total_pages": 1,
            "total_results": 1
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/account/{}/rated/movies", session.account_id).as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "page": 1,
            "results": [rated],
            "total_pages": 1,
            "total_results": 1
        })))
        .mount(&server)
        .await;

    let client = client(&server);

    let favorites = client.load_favorites(&session, 1).await?;
    assert_eq!(favorites.results[0].id, movie_id!(550));

    let rated = client.load_rated_movies(&session, 1).await?;
    assert_eq!(rated.results[0].movie.id, movie_id!(13));
    assert_eq!(rated.results[0].rating.stars(), 4.75);

    Ok(())
}
