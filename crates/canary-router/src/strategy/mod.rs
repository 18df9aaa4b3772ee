//! Hash Strategies
//!
//! This module contains the interchangeable hash providers used by the router:
//!
//! - `XxHashStrategy`: XXH64, fast non-cryptographic hash for short keys (default)
//! - `Md5Strategy`: MD5, cryptographic hash with high dispersion
//! - `Blake3Strategy`: BLAKE3, cryptographic and fast
//! - `Sha256Strategy`: SHA-256
//!
//! All of them are fixed algorithms with no per-process seed, so a given
//! identifier hashes to the same value across restarts and hosts.
//!
//! # Strategy Selection
//!
//! ```text
//! SplitConfig.hash ──► HashAlgorithm ──► &'static dyn HashStrategy
//!                                               │
//!                                               ▼
//!                                     route(id, weights, strategy)
//! ```

mod blake3_hash;
mod md5_hash;
mod sha256_hash;
mod xxhash;

pub use blake3_hash::Blake3Strategy;
pub use md5_hash::Md5Strategy;
pub use sha256_hash::Sha256Strategy;
pub use xxhash::XxHashStrategy;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RouterError;

/// Trait for identifier hash providers
pub trait HashStrategy: Send + Sync {
    /// Map an identifier to a 64-bit value. Must be pure and total.
    fn hash(&self, identifier: &str) -> u64;

    /// Strategy name for logging
    fn name(&self) -> &'static str;
}

/// Hash algorithm selected by configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Xxhash,
    Md5,
    Blake3,
    Sha256,
}

impl HashAlgorithm {
    /// Every supported algorithm
    pub const ALL: [HashAlgorithm; 4] = [
        HashAlgorithm::Xxhash,
        HashAlgorithm::Md5,
        HashAlgorithm::Blake3,
        HashAlgorithm::Sha256,
    ];

    /// Strategy implementing this algorithm
    pub fn strategy(&self) -> &'static dyn HashStrategy {
        match self {
            HashAlgorithm::Xxhash => &XxHashStrategy,
            HashAlgorithm::Md5 => &Md5Strategy,
            HashAlgorithm::Blake3 => &Blake3Strategy,
            HashAlgorithm::Sha256 => &Sha256Strategy,
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.strategy().name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "xxhash" | "xxh64" => Ok(HashAlgorithm::Xxhash),
            "md5" => Ok(HashAlgorithm::Md5),
            "blake3" => Ok(HashAlgorithm::Blake3),
            "sha256" | "sha-256" => Ok(HashAlgorithm::Sha256),
            other => Err(RouterError::UnknownHashAlgorithm(other.to_string())),
        }
    }
}

/// Take the first 8 digest bytes as a little-endian u64
pub(crate) fn digest_prefix_le(digest: &[u8]) -> u64 {
    let mut prefix = [0u8; 8];
    prefix.copy_from_slice(&digest[..8]);
    u64::from_le_bytes(prefix)
}
