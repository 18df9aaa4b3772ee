//! XXH64 Strategy
//!
//! Non-cryptographic hash tuned for throughput on short keys. Seeded with 0
//! so results are stable across processes.

use xxhash_rust::xxh64::xxh64;

use super::HashStrategy;

const SEED: u64 = 0;

/// XXH64 hash strategy
#[derive(Debug, Clone, Copy, Default)]
pub struct XxHashStrategy;

impl HashStrategy for XxHashStrategy {
    fn hash(&self, identifier: &str) -> u64 {
        xxh64(identifier.as_bytes(), SEED)
    }

    fn name(&self) -> &'static str {
        "xxhash"
    }
}
