/*
 * Responsibility
 * - 起動時に一度だけ読み込む静的な token allow-list
 * - 照合は完全一致のみ (正規化・大文字小文字の無視はしない)
 */
use std::collections::HashSet;

/// Immutable set of accepted tokens.
///
/// Built once from [`Config`](crate::config::Config) and shared through `AppState` behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct TokenAllowList {
    tokens: HashSet<String>,
}

impl TokenAllowList {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact-match membership. An absent token never matches.
    pub fn contains(&self, token: Option<&str>) -> bool {
        token.is_some_and(|t| self.tokens.contains(t))
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

impl<S: Into<String>> FromIterator<S> for TokenAllowList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
