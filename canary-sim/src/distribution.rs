//! Distribution and stickiness report
//!
//! Routes each identifier repeatedly and records where it landed. One line per
//! identifier goes to the output writer:
//!
//! ```text
//! ID: Tool-123 [ccc987c816908c9a] -> (Group 2: 10 times)
//! ```

use std::collections::BTreeMap;
use std::io::{self, Write};

use canary_router::{GroupLabel, TrafficSplitter};

/// Aggregate result of a distribution run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistributionReport {
    /// Routing calls per group over all identifiers and iterations
    pub counts: BTreeMap<GroupLabel, usize>,

    /// Total routing calls
    pub total: usize,

    /// True if any identifier landed in more than one group
    pub multiple_groups: bool,
}

impl DistributionReport {
    /// Share of calls routed to `group`, in percent
    pub fn share(&self, group: &GroupLabel) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let count = self.counts.get(group).copied().unwrap_or(0);
        count as f64 * 100.0 / self.total as f64
    }

    pub fn unknown_count(&self) -> usize {
        self.counts.get(&GroupLabel::Unknown).copied().unwrap_or(0)
    }
}

/// Route every identifier `iterations` times and write a per-identifier line
pub fn run_distribution<W: Write>(
    ids: &[String],
    splitter: &TrafficSplitter,
    iterations: usize,
    out: &mut W,
) -> io::Result<DistributionReport> {
    let mut report = DistributionReport::default();

    for id in ids {
        let mut group_counts: BTreeMap<GroupLabel, usize> = BTreeMap::new();
        let mut hash = String::new();

        for _ in 0..iterations {
            let decision = splitter.route(id);
            hash = decision.diagnostic_hash();
            *group_counts.entry(decision.group).or_insert(0) += 1;
            *report.counts.entry(decision.group).or_insert(0) += 1;
            report.total += 1;
        }

        if group_counts.len() > 1 {
            report.multiple_groups = true;
        }

        write!(out, "ID: {} [{}] ->", id, hash)?;
        for (group, count) in &group_counts {
            write!(out, " ({}: {} times)", group, count)?;
        }
        writeln!(out)?;
    }

    Ok(report)
}
