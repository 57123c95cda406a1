//! Response integrity hash.
//!
//! `hex(sha1(body ++ token))`: anyone who knows the token can recompute it and check that the body
//! was produced for that token.

use sha1::{Digest, Sha1};

/// Response header carrying the hash.
pub const CONTENT_HASH_HEADER: &str = "x-content-hash";

/// Lowercase hex SHA-1 of the body followed by the raw token bytes.
pub fn compute(body: &[u8], token: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(body);
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
