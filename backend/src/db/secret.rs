//! Fingerprinting of school secrets before they are stored.
//!
//! The digest is unsalted and fast: it keeps clear-text secrets out of
//! storage and logs, but it is not password storage and must not be used to
//! authenticate anyone. A login flow would need a salted, slow KDF instead.

use sha2::{Digest, Sha256};

/// Minimum number of characters accepted for a school secret.
pub const MIN_SECRET_LEN: usize = 6;

/// Unsalted SHA-256 fingerprint of `secret`, hex encoded.
pub fn hash_secret(secret: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(secret.as_bytes());
    hex::encode(hasher.finalize())
}
