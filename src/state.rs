/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (内部は Arc で cheap clone)
 * - allow-list は起動時に一度だけ構築し、以後 read-only
 */
use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::services::TokenAllowList;

#[derive(Clone, Debug)]
pub struct AppState {
    pub tokens: Arc<TokenAllowList>,
    // guarded handler の時間上限 (超過は 408)
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(tokens: Arc<TokenAllowList>, request_timeout: Duration) -> Self {
        Self {
            tokens,
            request_timeout,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            Arc::new(TokenAllowList::new(config.auth_tokens.iter().cloned())),
            config.request_timeout,
        )
    }
}
