//! Canary Sim - Routing distribution simulator
//!
//! Drives the router with generated identifiers and reports:
//! - Whether every identifier stuck to a single group
//! - How the calls spread over the groups
//! - How long a routing call takes
//!
//! Per-identifier details are written to `*.output` files in the configured
//! output directory. The simulator only reads routing results.

mod benchmark;
mod distribution;

pub use benchmark::{benchmark, BenchmarkReport};
pub use distribution::{run_distribution, DistributionReport};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use canary_core::{generate_ids, IdKind, SimConfig};
use canary_router::{HashAlgorithm, SplitConfig, TrafficSplitter, Weight};
use tracing::{info, warn};

/// Simulation driver
pub struct Simulator {
    config: SimConfig,
    hash: HashAlgorithm,
}

impl Simulator {
    /// Create a simulator, resolving the configured hash algorithm
    pub fn new(config: SimConfig) -> anyhow::Result<Self> {
        let hash = config
            .hash
            .parse::<HashAlgorithm>()
            .with_context(|| format!("invalid CANARY_HASH '{}'", config.hash))?;

        info!(
            hash = %hash,
            id_count = config.id_count,
            iterations = config.iterations,
            output_dir = %config.output_dir,
            "Creating simulator"
        );

        Ok(Self { config, hash })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Splitter for one scenario. Invalid weights are reported, not rejected.
    pub fn splitter(&self, weights: &[Weight]) -> TrafficSplitter {
        let config = SplitConfig::new(weights.to_vec(), self.hash);
        if let Err(e) = config.validate() {
            warn!(weights = ?weights, error = %e, "Misconfigured weights, expect Unknown Group results");
        }
        TrafficSplitter::new(config)
    }

    /// Route `id_count` default-shaped identifiers `iterations` times each
    pub fn simple_distribution(&self, weights: &[Weight]) -> anyhow::Result<DistributionReport> {
        let ids = generate_ids(&mut self.config.rng(), self.config.id_count, IdKind::Default);
        let splitter = self.splitter(weights);
        let path = self.output_path(&format!("simple_distribution_{}", weights_tag(weights)));

        info!(weights = ?weights, "Testing distribution");
        let report = distribution_to_file(&ids, &splitter, self.config.iterations, &path)?;
        log_summary(&format!("{} distribution", weights_tag(weights)), &report);

        Ok(report)
    }

    /// Same as `simple_distribution`, once per identifier shape, in parallel
    pub async fn id_variations(&self, weights: &[Weight]) -> anyhow::Result<Vec<(IdKind, DistributionReport)>> {
        let splitter = Arc::new(self.splitter(weights));
        let mut rng = self.config.rng();
        let mut handles = Vec::with_capacity(IdKind::ALL_VARIANTS.len());

        for kind in IdKind::ALL_VARIANTS {
            let ids = generate_ids(&mut rng, self.config.id_count, kind);
            let splitter = Arc::clone(&splitter);
            let iterations = self.config.iterations;
            let path = self.output_path(&format!("id_variations_{}_{}", weights_tag(weights), kind));

            let handle = tokio::task::spawn_blocking(move || {
                distribution_to_file(&ids, &splitter, iterations, &path)
            });
            handles.push((kind, handle));
        }

        let mut reports = Vec::with_capacity(handles.len());
        for (kind, handle) in handles {
            let report = handle.await.context("id variation task panicked")??;
            log_summary(&format!("id type {}", kind), &report);
            reports.push((kind, report));
        }

        Ok(reports)
    }

    /// Time `benchmark_rounds` passes over each identifier shape
    pub fn benchmark_timing(&self, weights: &[Weight]) -> Vec<(IdKind, BenchmarkReport)> {
        let splitter = self.splitter(weights);
        let mut rng = self.config.rng();

        IdKind::ALL_VARIANTS
            .into_iter()
            .map(|kind| {
                let ids = generate_ids(&mut rng, self.config.id_count, kind);
                let report = benchmark(&ids, &splitter, self.config.benchmark_rounds);
                info!(
                    id_type = %kind,
                    total = ?report.total,
                    average = ?report.per_call,
                    computations = report.computations,
                    "Benchmark"
                );
                (kind, report)
            })
            .collect()
    }

    /// Run every scenario for every configured distribution
    pub async fn run(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.config.output_dir)
            .with_context(|| format!("creating output directory {}", self.config.output_dir))?;

        for weights in &self.config.distributions {
            self.simple_distribution(weights)?;
        }

        for weights in &self.config.distributions {
            self.id_variations(weights).await?;
        }

        if let Some(weights) = self.config.distributions.first() {
            self.benchmark_timing(weights);
        }

        info!(output_dir = %self.config.output_dir, "Simulation complete");
        Ok(())
    }

    fn output_path(&self, name: &str) -> PathBuf {
        Path::new(&self.config.output_dir).join(format!("{}.output", name))
    }
}

fn distribution_to_file(
    ids: &[String],
    splitter: &TrafficSplitter,
    iterations: usize,
    path: &Path,
) -> anyhow::Result<DistributionReport> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    let report = run_distribution(ids, splitter, iterations, &mut out)
        .with_context(|| format!("writing {}", path.display()))?;
    out.flush()?;
    Ok(report)
}

fn weights_tag(weights: &[Weight]) -> String {
    weights.iter().map(|w| w.to_string()).collect::<Vec<_>>().join("_")
}

fn log_summary(scenario: &str, report: &DistributionReport) {
    for (group, count) in &report.counts {
        info!(
            scenario,
            group = %group,
            count,
            share = %format!("{:.2}%", report.share(group)),
            "Summary"
        );
    }

    if report.multiple_groups {
        warn!(scenario, "Identifier routed to more than one group");
    }
    if report.unknown_count() > 0 {
        warn!(scenario, unknown = report.unknown_count(), "Calls fell outside every group");
    }
}
