//! Split Configuration
//!
//! Explicit configuration on top of the `route` primitive. The primitive never
//! validates; callers that want misconfiguration to fail fast construct a
//! `TrafficSplitter` through `try_new` instead of `new`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RouterError;
use crate::router::route;
use crate::strategy::{HashAlgorithm, HashStrategy};
use crate::types::{RoutingDecision, Weight, PERCENT_RANGE};

/// Weights and hash algorithm for one traffic split
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Share per group, in group order
    pub weights: Vec<Weight>,

    /// Hash algorithm used to place identifiers
    #[serde(default)]
    pub hash: HashAlgorithm,
}

impl SplitConfig {
    pub fn new(weights: Vec<Weight>, hash: HashAlgorithm) -> Self {
        Self { weights, hash }
    }

    /// Parse from JSON, e.g. `{"weights": [90, 10], "hash": "md5"}`
    pub fn from_json(json: &str) -> Result<Self, RouterError> {
        serde_json::from_str(json).map_err(|e| RouterError::InvalidConfig(e.to_string()))
    }

    /// Sum of all weights
    pub fn total_weight(&self) -> i64 {
        self.weights.iter().fold(0, |acc: i64, w| acc.saturating_add(*w))
    }

    /// Check that the weights partition the percentage range exactly
    pub fn validate(&self) -> Result<(), RouterError> {
        if self.weights.is_empty() {
            return Err(RouterError::EmptyWeights);
        }

        if let Some((index, weight)) = self.weights.iter().enumerate().find(|(_, w)| **w < 0) {
            return Err(RouterError::NegativeWeight { index, weight: *weight });
        }

        let total = self.total_weight();
        if total != PERCENT_RANGE as i64 {
            return Err(RouterError::WeightSum(total));
        }

        Ok(())
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            weights: vec![50, 50],
            hash: HashAlgorithm::default(),
        }
    }
}

/// Configured router for a fixed set of weighted groups
pub struct TrafficSplitter {
    weights: Vec<Weight>,
    strategy: &'static dyn HashStrategy,
}

impl TrafficSplitter {
    /// Create without validation (same behaviour as calling `route` directly)
    pub fn new(config: SplitConfig) -> Self {
        Self {
            weights: config.weights,
            strategy: config.hash.strategy(),
        }
    }

    /// Create after checking the weights sum to 100 with no negatives
    pub fn try_new(config: SplitConfig) -> Result<Self, RouterError> {
        config.validate()?;
        debug!(
            weights = ?config.weights,
            hash = %config.hash,
            "Traffic splitter configured"
        );
        Ok(Self::new(config))
    }

    /// Create with an explicit strategy
    pub fn with_strategy(weights: Vec<Weight>, strategy: &'static dyn HashStrategy) -> Self {
        Self { weights, strategy }
    }

    /// Route an identifier
    pub fn route(&self, identifier: &str) -> RoutingDecision {
        route(identifier, &self.weights, self.strategy)
    }

    pub fn weights(&self) -> &[Weight] {
        &self.weights
    }

    pub fn group_count(&self) -> usize {
        self.weights.len()
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }
}

impl Default for TrafficSplitter {
    fn default() -> Self {
        Self::new(SplitConfig::default())
    }
}

impl std::fmt::Debug for TrafficSplitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrafficSplitter")
            .field("weights", &self.weights)
            .field("strategy", &self.strategy.name())
            .finish()
    }
}
