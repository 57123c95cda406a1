/*
 * Responsibility
 * - routing で解決できなかったリクエストを AppError (404 / 405) として返す
 * - 整形は OnError (error::on_error) に任せる
 */
use axum::extract::OriginalUri;
use axum::http::{Method, StatusCode};

use crate::error::{AppError, HttpError};

/// Router fallback: no route matches the path.
pub async fn not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    HttpError::new(
        StatusCode::NOT_FOUND,
        format!("No route found for \"{} {}\"", method, uri.path()),
    )
    .into()
}

/// Method fallback: the path matches but the method is not registered. The router adds `Allow`.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    HttpError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        format!(
            "No route found for \"{} {}\": Method Not Allowed",
            method,
            uri.path()
        ),
    )
    .into()
}
