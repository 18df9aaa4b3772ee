//! MD5 Strategy
//!
//! Uses the first 8 bytes of the digest, big-endian.

use super::HashStrategy;

/// MD5 hash strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5Strategy;

impl HashStrategy for Md5Strategy {
    fn hash(&self, identifier: &str) -> u64 {
        let digest = md5::compute(identifier.as_bytes());
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest.0[..8]);
        u64::from_be_bytes(prefix)
    }

    fn name(&self) -> &'static str {
        "md5"
    }
}
