//! End-to-end tests for the v1 API as assembled by `app::build_router`.

mod common;

use axum::http::{Method, StatusCode};
use common::{TOKEN, body_string, get, header, request, test_config, test_state};
use token_guard::app::build_router;
use tower::ServiceExt;

fn app() -> axum::Router {
    let config = test_config(&[TOKEN, "another-token"]);
    build_router(test_state(&config), &config)
}

/// A valid token reaches the protected handler and the body is hashed with it.
#[tokio::test]
async fn foo_bar_with_valid_token_returns_hashed_json() {
    let response = app()
        .oneshot(get("/api/v1/foo/bar?token=secret123"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header(&response, "x-content-hash"),
        Some("6d862fed4a1ca20c72719d150d6cadb8b2732cd5")
    );
    assert_eq!(header(&response, "content-type"), Some("application/json"));
    assert_eq!(body_string(response).await, r#"["Hello World"]"#);
}

/// Every listed token is accepted, and each yields its own hash.
#[tokio::test]
async fn every_listed_token_is_accepted() {
    let first = app()
        .oneshot(get("/api/v1/foo/bar?token=secret123"))
        .await
        .expect("request execution");
    let second = app()
        .oneshot(get("/api/v1/foo/bar?token=another-token"))
        .await
        .expect("request execution");

    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(second.status(), StatusCode::OK);
    assert_ne!(
        header(&first, "x-content-hash"),
        header(&second, "x-content-hash")
    );
}

#[tokio::test]
async fn foo_bar_with_wrong_token_is_unauthorized() {
    let response = app()
        .oneshot(get("/api/v1/foo/bar?token=wrong"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(header(&response, "x-content-hash").is_none());
    assert_eq!(body_string(response).await, "This action needs a valid token!");
}

/// A missing token is handled exactly like an invalid one.
#[tokio::test]
async fn foo_bar_without_token_is_unauthorized() {
    for uri in ["/api/v1/foo/bar", "/api/v1/foo/bar?token=", "/api/v1/foo/bar?other=1"] {
        let response = app().oneshot(get(uri)).await.expect("request execution");

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{uri}");
        assert!(header(&response, "x-content-hash").is_none());
        assert_eq!(body_string(response).await, "This action needs a valid token!");
    }
}

/// Public routes ignore the query and never get a content hash.
#[tokio::test]
async fn health_is_public_and_unhashed() {
    for uri in ["/api/v1/health", "/api/v1/health?token=wrong", "/api/v1/health?token=secret123"] {
        let response = app().oneshot(get(uri)).await.expect("request execution");

        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert!(header(&response, "x-content-hash").is_none());

        let body: serde_json::Value =
            serde_json::from_str(&body_string(response).await).expect("json deserialization");
        assert_eq!(body["status"], "ok");
    }
}

#[tokio::test]
async fn request_id_is_generated_and_propagated() {
    let response = app()
        .oneshot(get("/api/v1/foo/bar?token=secret123"))
        .await
        .expect("request execution");

    assert!(header(&response, "x-request-id").is_some());
}

/// Unknown paths go through OnError like any other error, but are never hashed.
#[tokio::test]
async fn unknown_route_is_a_formatted_not_found() {
    let response = app()
        .oneshot(get("/api/v1/nope?token=secret123"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(header(&response, "x-content-hash").is_none());
    assert_eq!(
        body_string(response).await,
        r#"My Error says: No route found for "GET /api/v1/nope" with code: 0"#
    );
}

/// A known path with the wrong method is a formatted 405 with `Allow`, hashed like any
/// authenticated response.
#[tokio::test]
async fn wrong_method_is_a_formatted_method_not_allowed() {
    let response = app()
        .oneshot(request(Method::POST, "/api/v1/foo/bar?token=secret123"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(header(&response, "allow").is_some_and(|allow| allow.contains("GET")));
    assert_eq!(
        header(&response, "x-content-hash"),
        Some("32e434b1e647f3db196fb4736be079dafca13fa1")
    );
    assert_eq!(
        body_string(response).await,
        r#"My Error says: No route found for "POST /api/v1/foo/bar": Method Not Allowed with code: 0"#
    );
}

/// The token is still checked before the method is rejected on a protected path.
#[tokio::test]
async fn wrong_method_without_token_is_unauthorized() {
    let response = app()
        .oneshot(request(Method::POST, "/api/v1/foo/bar"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_string(response).await, "This action needs a valid token!");
}

#[tokio::test]
async fn wrong_method_on_public_route_is_unhashed() {
    let response = app()
        .oneshot(request(Method::DELETE, "/api/v1/health?token=secret123"))
        .await
        .expect("request execution");

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(header(&response, "x-content-hash").is_none());
    assert_eq!(
        body_string(response).await,
        r#"My Error says: No route found for "DELETE /api/v1/health": Method Not Allowed with code: 0"#
    );
}
