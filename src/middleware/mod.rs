/*
 * Responsibility
 * - middleware の公開インターフェース
 * - error_boundary: app 全体の OnError
 * - http: request-id / trace / limit / timeout
 * - request_guard: route 単位の token 認証 + content hash
 */
pub mod error_boundary;
pub mod http;
pub mod request_guard;
