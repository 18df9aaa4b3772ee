//! Canary Core - Shared library for the simulator
//!
//! This crate provides the pieces that sit around the router:
//! harness configuration and test identifier generation.

pub mod config;
pub mod error;
pub mod ids;

pub use config::{parse_distributions, SimConfig};
pub use error::ConfigError;
pub use ids::{generate_ids, random_string, IdKind};
