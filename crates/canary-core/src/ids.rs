//! Test identifier generation
//!
//! Produces identifiers in the shapes real traffic tends to carry: small
//! integers, large integers, prefixed tool names and random strings.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Shape of generated identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdKind {
    /// Decimal in [0, 100)
    ShortInt,
    /// Decimal in [0, 10^12)
    LongInt,
    /// `Tool-<n>` with n in [0, 1000)
    Tool,
    /// `ID-` followed by 8 letters
    String,
    /// `ID-<n>` with n in [0, 10^6)
    Default,
}

impl IdKind {
    /// Kinds exercised by the id-variation scenario
    pub const ALL_VARIANTS: [IdKind; 4] = [IdKind::ShortInt, IdKind::LongInt, IdKind::Tool, IdKind::String];

    /// Generate one identifier of this kind
    pub fn generate<R: Rng>(&self, rng: &mut R) -> String {
        match self {
            IdKind::ShortInt => rng.gen_range(0..100u32).to_string(),
            IdKind::LongInt => rng.gen_range(0..1_000_000_000_000u64).to_string(),
            IdKind::Tool => format!("Tool-{}", rng.gen_range(0..1000u32)),
            IdKind::String => format!("ID-{}", random_string(rng, 8)),
            IdKind::Default => format!("ID-{}", rng.gen_range(0..1_000_000u32)),
        }
    }
}

impl std::fmt::Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            IdKind::ShortInt => "short_int",
            IdKind::LongInt => "long_int",
            IdKind::Tool => "tool",
            IdKind::String => "string",
            IdKind::Default => "default",
        };
        f.write_str(name)
    }
}

impl FromStr for IdKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short_int" => Ok(IdKind::ShortInt),
            "long_int" => Ok(IdKind::LongInt),
            "tool" => Ok(IdKind::Tool),
            "string" => Ok(IdKind::String),
            "default" => Ok(IdKind::Default),
            other => Err(ConfigError::UnknownIdKind(other.to_string())),
        }
    }
}

/// Generate `count` identifiers of the given kind. Duplicates are possible.
pub fn generate_ids<R: Rng>(rng: &mut R, count: usize, kind: IdKind) -> Vec<String> {
    (0..count).map(|_| kind.generate(rng)).collect()
}

/// Random ASCII-letter string of `len` characters
pub fn random_string<R: Rng>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| LETTERS[rng.gen_range(0..LETTERS.len())] as char)
        .collect()
}
