use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::error::AppError;
use crate::middleware::request_guard::RequestContext;

/// Handler で RequestContext を受け取るための extractor
/// request_guard が request.extensions() に insert 済みである前提
/// 見つからない場合は route が guard なしで登録されている (設定ミス) ので 500
pub struct RequestCtx(pub RequestContext);

impl<S> FromRequestParts<S> for RequestCtx
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .map(RequestCtx)
            .ok_or_else(|| AppError::internal("request context missing: route is not guarded"))
    }
}
