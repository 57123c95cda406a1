//! App-wide OnError.
//!
//! Guarded routes normalize their own errors. This layer catches what is produced outside of
//! them, e.g. the router fallback answering an unknown path with a 404 [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

use axum::{
    Router,
    extract::Request,
    middleware::{self, Next},
    response::Response,
};

use crate::error;

/// Apply the error boundary. It must wrap every other layer.
pub fn apply(router: Router) -> Router {
    router.layer(middleware::from_fn(normalize_errors))
}

async fn normalize_errors(req: Request, next: Next) -> Response {
    error::on_error(next.run(req).await)
}
