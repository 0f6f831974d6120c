//! Dataset fingerprinting.

use sha2::{Digest, Sha256};

/// Calculate the SHA-256 checksum of raw file content.
///
/// Reported by the health endpoint so operators can tell which dataset a
/// running server has loaded.
pub fn calculate_checksum(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    hex::encode(hasher.finalize())
}
