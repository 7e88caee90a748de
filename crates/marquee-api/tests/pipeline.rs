//! Integration tests for the request pipeline against a local mock server:
//! bearer injection, the single-shot retry policy, and error propagation.

use std::time::{Duration, Instant};

use marquee_api::{ApiClient, SessionStore};
use marquee_bridge::config::ApiConfig;
use marquee_bridge::movie::CatalogSection;
use marquee_bridge::session::Session;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const RETRY_DELAY_MS: u64 = 200;

fn test_client(server: &MockServer, sessions: SessionStore) -> ApiClient {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_secs: 10,
        retry_delay_ms: RETRY_DELAY_MS,
    };
    ApiClient::new(&config, sessions).expect("failed to build test client")
}

fn signed_in_store() -> SessionStore {
    SessionStore::new(Some(Session {
        token: "secret-token".to_string(),
        username: "alice".to_string(),
    }))
}

#[tokio::test]
async fn bearer_token_is_attached_when_signed_in() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/watchlist/get-all"))
        .and(header("authorization", "Bearer secret-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, signed_in_store());
    let entries = client.watchlist_all().await.expect("request should succeed");
    assert!(entries.is_empty());
}

#[tokio::test]
async fn no_auth_header_is_sent_while_signed_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, SessionStore::default());
    client
        .catalog(CatalogSection::Popular, 1)
        .await
        .expect("request should succeed");

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn get_is_retried_once_after_a_server_error() {
    let server = MockServer::start().await;
    // First attempt fails with 503; the mock expires after one match so the
    // retry falls through to the success mock below.
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(503))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": 1,
            "title": "Inception",
            "overview": "Dreams within dreams.",
            "release_date": "2010-07-16",
            "vote_average": 8.4
        }])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, SessionStore::default());
    let start = Instant::now();
    let movies = client
        .catalog(CatalogSection::Popular, 1)
        .await
        .expect("retried request should succeed");

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].title, "Inception");
    // the retry strictly follows the failed attempt after the fixed delay
    assert!(start.elapsed() >= Duration::from_millis(RETRY_DELAY_MS));
}

#[tokio::test]
async fn second_failure_is_surfaced_after_exactly_one_retry() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/movie/popular"))
        .respond_with(ResponseTemplate::new(503))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server, SessionStore::default());
    let start = Instant::now();
    let err = client
        .catalog(CatalogSection::Popular, 1)
        .await
        .expect_err("both attempts fail");

    assert_eq!(err.status(), Some(503));
    assert!(start.elapsed() >= Duration::from_millis(RETRY_DELAY_MS));
    // the .expect(2) on the mock verifies no second retry happened
}

#[tokio::test]
async fn writes_are_not_retried_on_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/watchlist/7"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, signed_in_store());
    let err = client.watchlist_add(7).await.expect_err("the add fails");
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/watchlist/get-all"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Token expired"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, signed_in_store());
    let err = client.watchlist_all().await.expect_err("unauthorized");
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.user_message("Failed to load watchlist"), "Token expired");
}

#[tokio::test]
async fn login_sends_credentials_and_returns_the_session() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"username": "alice", "password": "hunter22"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "username": "alice"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, SessionStore::default());
    let session = client.login("alice", "hunter22").await.expect("login succeeds");
    assert_eq!(session.token, "fresh-token");
    assert_eq!(session.username, "alice");
}

#[tokio::test]
async fn register_failure_joins_the_server_error_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "errors": ["username is taken", "email is invalid"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server, SessionStore::default());
    let err = client
        .register("alice", "alice@example.com", "longenough", "longenough")
        .await
        .expect_err("registration fails");
    assert_eq!(
        err.user_message("Registration failed"),
        "username is taken, email is invalid"
    );
}
