//! BLAKE3 Strategy

use blake3::Hasher;

use super::{digest_prefix_le, HashStrategy};

/// BLAKE3 hash strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Blake3Strategy;

impl HashStrategy for Blake3Strategy {
    fn hash(&self, identifier: &str) -> u64 {
        let mut hasher = Hasher::new();
        hasher.update(identifier.as_bytes());
        digest_prefix_le(hasher.finalize().as_bytes())
    }

    fn name(&self) -> &'static str {
        "blake3"
    }
}
