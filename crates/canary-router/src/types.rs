//! Common types for the router module
//!
//! Centralizes the value types produced and consumed by a routing call.

use serde::{Deserialize, Serialize};

/// Relative share of one group on the 0-100 scale.
///
/// Signed so that misconfigured (negative) weights stay representable; the
/// router treats them as shrinking the cumulative boundary.
pub type Weight = i64;

/// Size of the percentage space the hash is reduced into
pub const PERCENT_RANGE: u64 = 100;

/// Display form of the sentinel group
pub const UNKNOWN_GROUP_LABEL: &str = "Unknown Group";

/// Group a routing decision landed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GroupLabel {
    /// One-based group number (`index + 1` in the weight list)
    Group(usize),
    /// Percentage fell outside every configured boundary
    Unknown,
}

impl GroupLabel {
    /// Zero-based position in the weight list, `None` for the sentinel
    pub fn index(&self) -> Option<usize> {
        match self {
            GroupLabel::Group(n) => n.checked_sub(1),
            GroupLabel::Unknown => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, GroupLabel::Unknown)
    }
}

impl std::fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupLabel::Group(n) => write!(f, "Group {}", n),
            GroupLabel::Unknown => f.write_str(UNKNOWN_GROUP_LABEL),
        }
    }
}

/// Result of routing one identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingDecision {
    /// Selected group, or the sentinel
    pub group: GroupLabel,

    /// Raw strategy output, kept for audit only
    pub hash: u64,

    /// Hash reduced into `[0, PERCENT_RANGE)`
    pub percentage: u8,
}

impl RoutingDecision {
    /// External label: `"Group <n>"` or `"Unknown Group"`
    pub fn label(&self) -> String {
        self.group.to_string()
    }

    /// Hex rendering of the raw hash. Not part of the decision.
    pub fn diagnostic_hash(&self) -> String {
        format!("{:x}", self.hash)
    }

    /// Zero-based group index, `None` when no boundary matched
    pub fn group_index(&self) -> Option<usize> {
        self.group.index()
    }

    /// Map the sentinel onto a caller-chosen safe group index
    pub fn group_or(&self, default_index: usize) -> usize {
        self.group_index().unwrap_or(default_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_label_display() {
        assert_eq!(GroupLabel::Group(1).to_string(), "Group 1");
        assert_eq!(GroupLabel::Group(12).to_string(), "Group 12");
        assert_eq!(GroupLabel::Unknown.to_string(), "Unknown Group");
    }

    #[test]
    fn test_group_label_ordering() {
        let mut labels = vec![GroupLabel::Unknown, GroupLabel::Group(2), GroupLabel::Group(1)];
        labels.sort();
        assert_eq!(labels, vec![GroupLabel::Group(1), GroupLabel::Group(2), GroupLabel::Unknown]);
    }

    #[test]
    fn test_decision_accessors() {
        let decision = RoutingDecision {
            group: GroupLabel::Group(2),
            hash: 0xccc9_87c8_1690_8c9a,
            percentage: 90,
        };
        assert_eq!(decision.label(), "Group 2");
        assert_eq!(decision.diagnostic_hash(), "ccc987c816908c9a");
        assert_eq!(decision.group_index(), Some(1));
        assert_eq!(decision.group_or(0), 1);

        let unmatched = RoutingDecision { group: GroupLabel::Unknown, hash: 7, percentage: 7 };
        assert_eq!(unmatched.diagnostic_hash(), "7");
        assert_eq!(unmatched.group_index(), None);
        assert_eq!(unmatched.group_or(0), 0);
    }
}
