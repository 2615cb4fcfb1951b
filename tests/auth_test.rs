use std::sync::Arc;

use reqwest::{Client, StatusCode};
use serde_json::json;
use spotwatch::api::ApiError;
use spotwatch::config::Config;
use spotwatch::spotify::TokenProvider;
use spotwatch::spotify::auth::{AUTH_SCOPE, basic_auth_header, encode_uri_component};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BASIC_TEST_CREDENTIALS: &str = "Basic dGVzdF9pZDp0ZXN0X3NlY3JldA==";

// Helper function to create a config pointing at a mock server
fn test_config(base: &str) -> Config {
    Config {
        client_id: "test_id".to_string(),
        client_secret: "test_secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        playlist_id: Some("pl123".to_string()),
        server_addr: "127.0.0.1:0".to_string(),
        accounts_url: base.to_string(),
        api_url: format!("{}/v1", base),
    }
}

fn provider(base: &str) -> TokenProvider {
    TokenProvider::new(Arc::new(test_config(base)), Client::new())
}

#[test]
fn test_basic_auth_header() {
    let header = basic_auth_header("test_id", "test_secret");
    assert_eq!(header, BASIC_TEST_CREDENTIALS);

    // Same inputs always give the same value
    assert_eq!(header, basic_auth_header("test_id", "test_secret"));

    // Standard alphabet with padding
    assert_eq!(basic_auth_header("a", "b"), "Basic YTpi");
    assert_eq!(basic_auth_header("", ""), "Basic Og==");
}

#[test]
fn test_authorization_url() {
    let url = provider("https://accounts.example.com").authorization_url();

    assert!(url.starts_with(
        "https://accounts.example.com/authorize?client_id=test_id&response_type=code"
    ));
    assert!(url.contains(
        "scope=playlist-modify-public%20playlist-read-private%20user-read-email%20user-read-private"
    ));
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback"));
    assert_eq!(
        AUTH_SCOPE,
        "playlist-modify-public playlist-read-private user-read-email user-read-private"
    );
}

#[test]
fn test_encode_uri_component() {
    assert_eq!(encode_uri_component("cb(x)"), "cb(x)");
    assert_eq!(encode_uri_component("a!b'c*d"), "a!b'c*d");
    assert_eq!(encode_uri_component("a b/c:d"), "a%20b%2Fc%3Ad");
    assert_eq!(encode_uri_component("-_.~"), "-_.~");
    assert_eq!(encode_uri_component("100%*"), "100%25*");
}

#[test]
fn test_authorization_url_keeps_client_id_and_subdelims() {
    let mut config = test_config("https://accounts.example.com");
    config.client_id = "id with space".to_string();
    config.redirect_uri = "http://localhost:3000/cb(x)!".to_string();
    let url = TokenProvider::new(Arc::new(config), Client::new()).authorization_url();

    assert!(url.contains("client_id=id with space&response_type=code"));
    assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcb(x)!&scope="));
}

#[tokio::test]
async fn test_service_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_TEST_CREDENTIALS))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=client_credentials"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "T",
            "token_type": "Bearer",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = provider(&server.uri()).service_token().await.unwrap();

    assert_eq!(token.access_token, "T");
    assert_eq!(token.token_type.as_deref(), Some("Bearer"));
    assert_eq!(token.expires_in, Some(3600));
    assert!(token.refresh_token.is_none());
}

#[tokio::test]
async fn test_service_token_rejected_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({ "error": "invalid_client" })),
        )
        .mount(&server)
        .await;

    let err = provider(&server.uri()).service_token().await.unwrap_err();

    assert!(matches!(err, ApiError::Upstream(s) if s == StatusCode::BAD_REQUEST));
    assert_eq!(err.to_string(), "Spotify API error: 400 Bad Request");
}

#[tokio::test]
async fn test_service_token_without_access_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token_type": "Bearer" })))
        .mount(&server)
        .await;

    let err = provider(&server.uri()).service_token().await.unwrap_err();

    assert!(matches!(err, ApiError::Http(_)));
}

#[tokio::test]
async fn test_exchange_authorization_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .and(header("authorization", BASIC_TEST_CREDENTIALS))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("code=abc"))
        .and(body_string_contains(
            "redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fcallback",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "refresh_token": "R",
            "scope": AUTH_SCOPE
        })))
        .expect(1)
        .mount(&server)
        .await;

    let payload = provider(&server.uri())
        .exchange_authorization_code("abc")
        .await
        .unwrap();

    assert_eq!(payload["access_token"], "A");
    assert_eq!(payload["refresh_token"], "R");
}

#[tokio::test]
async fn test_exchange_authorization_code_relays_error_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_grant",
            "error_description": "Invalid authorization code"
        })))
        .mount(&server)
        .await;

    let payload = provider(&server.uri())
        .exchange_authorization_code("expired")
        .await
        .unwrap();

    assert_eq!(payload["error"], "invalid_grant");
}

#[tokio::test]
async fn test_exchange_authorization_code_requires_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let err = provider(&server.uri())
        .exchange_authorization_code("")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::MissingCode));
}
