//! Shared helpers for router-level tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{Method, Request},
    response::Response,
};
use token_guard::config::{AppEnv, Config};
use token_guard::middleware;
use token_guard::state::AppState;

pub const TOKEN: &str = "secret123";

pub fn test_config(tokens: &[&str]) -> Config {
    Config {
        addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        app_env: AppEnv::Development,
        auth_tokens: tokens.iter().map(|t| t.to_string()).collect(),
        request_timeout: Duration::from_secs(30),
        body_limit_bytes: 1024 * 1024,
    }
}

pub fn test_state(config: &Config) -> AppState {
    AppState::from_config(config)
}

/// Wraps test routes in the same app-wide layers `app::build_router` uses.
pub fn wrap(routes: Router<AppState>, state: AppState, config: &Config) -> Router {
    let router = routes.with_state(state);
    let router = middleware::http::apply(router, config);
    middleware::error_boundary::apply(router)
}

pub fn get(uri: &str) -> Request<Body> {
    request(Method::GET, uri)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request build")
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body extraction");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn header<'a>(response: &'a Response, name: &str) -> Option<&'a str> {
    response.headers().get(name).and_then(|v| v.to_str().ok())
}
