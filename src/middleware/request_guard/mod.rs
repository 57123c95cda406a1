/*!
 * Request guard
 *
 * Responsibility:
 * - Capability 付き route の登録 (apply)
 * - PreDispatch: token allow-list 照合 → RequestContext に記録 / 401
 * - OnError: handler のエラーを正規化
 * - PostDispatch: 認証済みリクエストの response に x-content-hash を付与
 *
 * Public API:
 * - apply, pre_dispatch, post_dispatch
 * - Capability, RequestContext, RequestGuard
 */

mod core;
mod types;

pub use self::core::{TOKEN_PARAM, apply, post_dispatch, pre_dispatch};
pub use self::types::{AUTH_TOKEN_KEY, Capability, RequestContext, RequestGuard};
