//! Routing throughput timing

use std::hint::black_box;
use std::time::{Duration, Instant};

use canary_router::TrafficSplitter;

/// Timing of repeated routing passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub total: Duration,
    pub computations: usize,
    pub per_call: Duration,
}

/// Route every identifier `rounds` times and measure the elapsed time
pub fn benchmark(ids: &[String], splitter: &TrafficSplitter, rounds: usize) -> BenchmarkReport {
    let start = Instant::now();
    for _ in 0..rounds {
        for id in ids {
            black_box(splitter.route(black_box(id)));
        }
    }
    let total = start.elapsed();

    let computations = rounds * ids.len();
    let per_call = u32::try_from(computations)
        .ok()
        .filter(|n| *n > 0)
        .map(|n| total / n)
        .unwrap_or_default();

    BenchmarkReport { total, computations, per_call }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_computations() {
        let ids: Vec<String> = (0..20).map(|i| format!("ID-{}", i)).collect();
        let report = benchmark(&ids, &TrafficSplitter::default(), 5);
        assert_eq!(report.computations, 100);
        assert!(report.per_call <= report.total);
    }

    #[test]
    fn test_empty_input() {
        let report = benchmark(&[], &TrafficSplitter::default(), 10);
        assert_eq!(report.computations, 0);
        assert_eq!(report.per_call, Duration::ZERO);
    }
}
