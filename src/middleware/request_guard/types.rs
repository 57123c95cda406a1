/*
 * Responsibility
 * - route 登録時に付与する Capability (Public / RequiresToken)
 * - リクエスト単位のコンテキスト (RequestContext): middleware が書き、後段 (handler / PostDispatch) が読む
 *
 * Notes
 * - RequestContext はリクエストごとに生成・破棄され、リクエスト間で共有しない
 */
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::services::TokenAllowList;

/// Attribute key under which PreDispatch records the validated token.
pub const AUTH_TOKEN_KEY: &str = "auth_token";

/// Policy a route is registered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Capability {
    #[default]
    Public,
    RequiresToken,
}

impl Capability {
    pub fn requires_token(self) -> bool {
        matches!(self, Self::RequiresToken)
    }
}

/// Per-request bag shared between guard stages and handlers.
///
/// - `capability` は解決済み route の Capability
/// - `attributes` は middleware が後段のために置く任意の値 (`auth_token` など)
#[derive(Debug, Clone)]
pub struct RequestContext {
    capability: Capability,
    attributes: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(capability: Capability) -> Self {
        Self {
            capability,
            attributes: HashMap::new(),
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// The token validated by PreDispatch, if any.
    pub fn auth_token(&self) -> Option<&str> {
        self.attribute(AUTH_TOKEN_KEY)
    }
}

/// Guard state bound to a single route: its capability, the shared allow-list and the handler
/// time budget.
#[derive(Debug, Clone)]
pub struct RequestGuard {
    capability: Capability,
    tokens: Arc<TokenAllowList>,
    timeout: Duration,
}

impl RequestGuard {
    pub fn new(capability: Capability, tokens: Arc<TokenAllowList>, timeout: Duration) -> Self {
        Self {
            capability,
            tokens,
            timeout,
        }
    }

    pub fn capability(&self) -> Capability {
        self.capability
    }

    pub(super) fn tokens(&self) -> &TokenAllowList {
        &self.tokens
    }

    pub(super) fn timeout(&self) -> Duration {
        self.timeout
    }
}
