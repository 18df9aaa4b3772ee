//! Configuration error types

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown id kind: {0}")]
    UnknownIdKind(String),

    #[error("Invalid distribution: {0}")]
    InvalidDistribution(String),
}
