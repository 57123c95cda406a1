/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - route ごとの Capability (Public / RequiresToken) は登録時にここで決める
 */
use axum::{Router, routing::get};

use crate::api::v1::handlers::{foo, health::health};
use crate::middleware::request_guard::{self, Capability};
use crate::state::AppState;

pub fn routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/health",
            request_guard::apply(get(health), state, Capability::Public),
        )
        .route(
            "/foo/bar",
            request_guard::apply(get(foo::bar), state, Capability::RequiresToken),
        )
}
