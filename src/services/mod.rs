/*
 * Responsibility
 * - HTTP に依存しないドメインロジック (allow-list 照合, content hash 計算)
 */
pub mod content_hash;
pub mod token_allow_list;

pub use token_allow_list::TokenAllowList;
