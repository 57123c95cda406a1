/*
 * Responsibility
 * - GET /foo/bar (RequiresToken)
 * - token 検証と x-content-hash は request_guard 側の責務。handler は本文を返すだけ
 */
use axum::Json;

use crate::api::v1::extractors::RequestCtx;

pub async fn bar(RequestCtx(ctx): RequestCtx) -> Json<[&'static str; 1]> {
    tracing::debug!(capability = ?ctx.capability(), "foo bar");
    Json(["Hello World"])
}
