//! Error types for the router module
//!
//! Routing itself never fails. These errors only come out of the opt-in
//! configuration layer (`SplitConfig`, `HashAlgorithm` parsing).

use thiserror::Error;

use crate::types::Weight;

/// Router error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    /// No groups configured
    #[error("Weight list is empty")]
    EmptyWeights,

    /// A group was given a negative share
    #[error("Negative weight {weight} for group {}", .index + 1)]
    NegativeWeight { index: usize, weight: Weight },

    /// Weights do not partition the 0-99 percentage range
    #[error("Weights must sum to 100, got {0}")]
    WeightSum(i64),

    /// Hash algorithm name not recognised
    #[error("Unknown hash algorithm: {0}")]
    UnknownHashAlgorithm(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
