//! PreDispatch → handler → OnError → PostDispatch, as one axum middleware per route.
//!
//! Rejected requests never reach the handler. Errors, timeouts and unsupported methods are
//! normalized before the content hash is taken, so an authenticated request always gets the
//! header, error responses included.

use axum::{
    body::{Body, Bytes},
    extract::{Request, State},
    http::{HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::MethodRouter,
};
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use url::form_urlencoded;

use super::types::{AUTH_TOKEN_KEY, Capability, RequestContext, RequestGuard};
use crate::api::fallback;
use crate::error::{self, AppError, HttpError, NormalizedError};
use crate::services::content_hash::{self, CONTENT_HASH_HEADER};
use crate::state::AppState;

/// Query parameter PreDispatch reads the token from.
pub const TOKEN_PARAM: &str = "token";

/// Registers `route` with `capability`.
///
/// Methods the route does not handle fall back to a 405 `AppError` inside the guard.
///
/// 例：
/// ```ignore
/// Router::new().route(
///     "/foo/bar",
///     request_guard::apply(get(foo::bar), &state, Capability::RequiresToken),
/// )
/// ```
pub fn apply(
    route: MethodRouter<AppState>,
    state: &AppState,
    capability: Capability,
) -> MethodRouter<AppState> {
    let guard = RequestGuard::new(capability, state.tokens.clone(), state.request_timeout);

    route.fallback(fallback::method_not_allowed).layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn_with_state(guard, request_guard))
            .layer(CatchPanicLayer::custom(error::panic_response)),
    )
}

async fn request_guard(
    State(guard): State<RequestGuard>,
    mut req: Request,
    next: Next,
) -> Response {
    let mut ctx = RequestContext::new(guard.capability());

    if let Err(err) = pre_dispatch(&guard, &mut ctx, req.uri().query()) {
        return err.into_response();
    }

    // middleware → extractor への受け渡し
    req.extensions_mut().insert(ctx.clone());

    let res = match tokio::time::timeout(guard.timeout(), next.run(req)).await {
        Ok(res) => res,
        Err(_) => {
            tracing::warn!(timeout = ?guard.timeout(), "handler timed out");
            AppError::from(HttpError::new(StatusCode::REQUEST_TIMEOUT, "request timed out"))
                .into_response()
        }
    };
    let res = error::on_error(res);

    post_dispatch(&ctx, res).await
}

/// Validates the token for routes that need one and records it in `ctx`.
pub fn pre_dispatch(
    guard: &RequestGuard,
    ctx: &mut RequestContext,
    query: Option<&str>,
) -> Result<(), AppError> {
    if !guard.capability().requires_token() {
        return Ok(());
    }

    match token_param(query) {
        Some(token) if guard.tokens().contains(Some(token.as_str())) => {
            ctx.set_attribute(AUTH_TOKEN_KEY, token);
            Ok(())
        }
        token => {
            tracing::warn!(token_present = token.is_some(), "rejected request without a valid token");
            Err(AppError::Unauthorized)
        }
    }
}

/// Attaches `x-content-hash` when PreDispatch recorded a token. The body bytes are left as they are.
pub async fn post_dispatch(ctx: &RequestContext, res: Response) -> Response {
    let Some(token) = ctx.auth_token() else {
        return res;
    };

    let (parts, body) = res.into_parts();
    let (parts, bytes) = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => (parts, bytes),
        Err(err) => {
            let normalized = NormalizedError::from_error(&AppError::internal(format!(
                "failed to read response body: {err}"
            )));
            let bytes = Bytes::from(normalized.message.clone());
            let (parts, _) = normalized.into_response().into_parts();
            (parts, bytes)
        }
    };

    let hash = content_hash::compute(&bytes, token);
    let mut res = Response::from_parts(parts, Body::from(bytes));

    // hex digest is always a valid header value
    if let Ok(value) = HeaderValue::from_str(&hash) {
        res.headers_mut().insert(CONTENT_HASH_HEADER, value);
    }
    tracing::debug!(%hash, "content hash attached");

    res
}

/// Last `token` in the query string, form-decoded. Absent query or parameter → `None`.
fn token_param(query: Option<&str>) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .filter(|(key, _)| key == TOKEN_PARAM)
        .last()
        .map(|(_, value)| value.into_owned())
}
