//! Canary Sim - Main entry point

use canary_core::SimConfig;
use canary_sim::Simulator;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration from environment
    let config = SimConfig::from_env();

    let simulator = Simulator::new(config)?;
    simulator.run().await
}
