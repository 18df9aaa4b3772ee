//! Configuration module for the canary simulator

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;

/// Simulator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Identifiers generated per scenario
    pub id_count: usize,

    /// Times each identifier is routed (stickiness check)
    pub iterations: usize,

    /// Passes over the identifier set when timing
    pub benchmark_rounds: usize,

    /// Weight lists to exercise, one scenario each
    pub distributions: Vec<Vec<i64>>,

    /// Hash algorithm name, resolved by the router
    pub hash: String,

    /// Directory receiving per-identifier output files
    pub output_dir: String,

    /// Fixed RNG seed (None = seed from entropy)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            id_count: 1000,
            iterations: 10,
            benchmark_rounds: 1000,
            distributions: vec![vec![50, 50], vec![70, 30]],
            hash: "xxhash".to_string(),
            output_dir: ".".to_string(),
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mut config = SimConfig::default();

        if let Ok(count) = std::env::var("CANARY_ID_COUNT") {
            if let Ok(count) = count.parse() {
                config.id_count = count;
            }
        }

        if let Ok(iterations) = std::env::var("CANARY_ITERATIONS") {
            if let Ok(iterations) = iterations.parse() {
                config.iterations = iterations;
            }
        }

        if let Ok(rounds) = std::env::var("CANARY_BENCH_ROUNDS") {
            if let Ok(rounds) = rounds.parse() {
                config.benchmark_rounds = rounds;
            }
        }

        if let Ok(distributions) = std::env::var("CANARY_DISTRIBUTIONS") {
            match parse_distributions(&distributions) {
                Ok(parsed) if !parsed.is_empty() => config.distributions = parsed,
                Ok(_) => {}
                Err(e) => warn!(error = %e, "Ignoring CANARY_DISTRIBUTIONS"),
            }
        }

        if let Ok(hash) = std::env::var("CANARY_HASH") {
            if !hash.trim().is_empty() {
                config.hash = hash.trim().to_string();
            }
        }

        if let Ok(dir) = std::env::var("CANARY_OUTPUT_DIR") {
            config.output_dir = dir;
        }

        if let Ok(seed) = std::env::var("CANARY_SEED") {
            if let Ok(seed) = seed.parse() {
                config.seed = Some(seed);
            }
        }

        config
    }

    /// RNG for identifier generation
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse `"50:50,70:30"` into `[[50, 50], [70, 30]]`
pub fn parse_distributions(s: &str) -> Result<Vec<Vec<i64>>, ConfigError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.split(':')
                .map(|w| {
                    w.trim()
                        .parse::<i64>()
                        .map_err(|_| ConfigError::InvalidDistribution(part.to_string()))
                })
                .collect::<Result<Vec<i64>, _>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_default_config() {
        let config = SimConfig::default();
        assert_eq!(config.id_count, 1000);
        assert_eq!(config.iterations, 10);
        assert_eq!(config.distributions, vec![vec![50, 50], vec![70, 30]]);
        assert_eq!(config.hash, "xxhash");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_parse_distributions() {
        assert_eq!(
            parse_distributions("50:50, 70:30").unwrap(),
            vec![vec![50, 50], vec![70, 30]]
        );
        assert_eq!(
            parse_distributions("20:30:50").unwrap(),
            vec![vec![20, 30, 50]]
        );
        assert_eq!(parse_distributions("").unwrap(), Vec::<Vec<i64>>::new());
    }

    #[test]
    fn test_parse_distributions_invalid() {
        assert_eq!(
            parse_distributions("50:50,70:abc"),
            Err(ConfigError::InvalidDistribution("70:abc".to_string()))
        );
    }

    #[test]
    fn test_seeded_rng_repeatable() {
        let config = SimConfig { seed: Some(9), ..SimConfig::default() };
        let a: u64 = config.rng().gen();
        let b: u64 = config.rng().gen();
        assert_eq!(a, b);
    }

    #[test]
    fn test_config_json() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
