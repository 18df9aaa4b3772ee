//! SHA-256 Strategy

use sha2::{Digest, Sha256};

use super::{digest_prefix_le, HashStrategy};

/// SHA-256 hash strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Strategy;

impl HashStrategy for Sha256Strategy {
    fn hash(&self, identifier: &str) -> u64 {
        let mut hasher = Sha256::new();
        hasher.update(identifier.as_bytes());
        digest_prefix_le(&hasher.finalize())
    }

    fn name(&self) -> &'static str {
        "sha256"
    }
}
