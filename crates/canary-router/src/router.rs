//! Weighted Percentage Router
//!
//! Reduces an identifier's hash into `[0, 100)` and walks the cumulative
//! weight boundaries to pick a group. No per-identifier state is kept: the
//! same identifier re-derives the same boundary crossing on every call.
//!
//! # Boundary Scan
//!
//! ```text
//! weights = [70, 30]
//!
//!   p:  0 ............ 69 | 70 ...... 99
//!       └── Group 1 ──────┘└─ Group 2 ─┘
//!
//! first index where p < cumulative wins
//! ```
//!
//! The comparison is strict: with `[50, 50]`, `p = 49` lands in Group 1 and
//! `p = 50` in Group 2. When the weights sum below 100 (or the list is empty)
//! the leftover percentages resolve to `GroupLabel::Unknown`.

use tracing::trace;

use crate::strategy::HashStrategy;
use crate::types::{GroupLabel, RoutingDecision, Weight, PERCENT_RANGE};

/// Route an identifier to a weighted group.
///
/// Never fails. Misconfigured weights only show up as a higher rate of
/// `GroupLabel::Unknown`.
pub fn route<S>(identifier: &str, weights: &[Weight], strategy: &S) -> RoutingDecision
where
    S: HashStrategy + ?Sized,
{
    let hash = strategy.hash(identifier);
    let percentage = percentage_of(hash);
    let group = select_group(percentage, weights);

    trace!(
        identifier = %identifier,
        strategy = strategy.name(),
        percentage,
        group = %group,
        "Routed identifier"
    );

    RoutingDecision { group, hash, percentage }
}

/// Reduce a raw hash into the percentage space
pub fn percentage_of(hash: u64) -> u8 {
    // Always < 100, fits in u8
    (hash % PERCENT_RANGE) as u8
}

/// Find the first group whose cumulative boundary lies above `percentage`
pub fn select_group(percentage: u8, weights: &[Weight]) -> GroupLabel {
    let percentage = Weight::from(percentage);
    let mut cumulative: Weight = 0;

    for (index, weight) in weights.iter().enumerate() {
        cumulative = cumulative.saturating_add(*weight);
        if percentage < cumulative {
            return GroupLabel::Group(index + 1);
        }
    }

    GroupLabel::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::{HashAlgorithm, Md5Strategy, XxHashStrategy};

    /// Returns a fixed hash regardless of input
    struct FixedHash(u64);

    impl HashStrategy for FixedHash {
        fn hash(&self, _identifier: &str) -> u64 {
            self.0
        }

        fn name(&self) -> &'static str {
            "fixed"
        }
    }

    #[test]
    fn test_boundary_is_strict_less_than() {
        let weights = [50, 50];

        let below = route("any", &weights, &FixedHash(49));
        assert_eq!(below.group, GroupLabel::Group(1));

        let at = route("any", &weights, &FixedHash(50));
        assert_eq!(at.group, GroupLabel::Group(2));
    }

    #[test]
    fn test_percentage_reduction_uses_modulo() {
        // 1049 % 100 = 49, 12350 % 100 = 50
        assert_eq!(route("x", &[50, 50], &FixedHash(1049)).group, GroupLabel::Group(1));
        assert_eq!(route("x", &[50, 50], &FixedHash(12350)).group, GroupLabel::Group(2));
        assert_eq!(percentage_of(u64::MAX), 15);
        assert_eq!(percentage_of(0), 0);
        assert_eq!(percentage_of(99), 99);
        assert_eq!(percentage_of(100), 0);
    }

    #[test]
    fn test_full_range_covered_by_valid_weights() {
        let weights = [70, 30];
        for p in 0..100u64 {
            let expected = if p < 70 { GroupLabel::Group(1) } else { GroupLabel::Group(2) };
            assert_eq!(route("x", &weights, &FixedHash(p)).group, expected, "p={}", p);
        }
    }

    #[test]
    fn test_short_weights_fall_through_to_unknown() {
        let weights = [30, 30];

        assert_eq!(route("x", &weights, &FixedHash(29)).group, GroupLabel::Group(1));
        assert_eq!(route("x", &weights, &FixedHash(59)).group, GroupLabel::Group(2));
        for p in 60..100u64 {
            assert_eq!(route("x", &weights, &FixedHash(p)).group, GroupLabel::Unknown, "p={}", p);
        }
    }

    #[test]
    fn test_empty_weights_always_unknown() {
        for p in [0u64, 1, 50, 99] {
            assert_eq!(route("x", &[], &FixedHash(p)).group, GroupLabel::Unknown);
        }
        for i in 0..100 {
            let decision = route(&format!("id-{}", i), &[], &XxHashStrategy);
            assert_eq!(decision.label(), "Unknown Group");
        }
    }

    #[test]
    fn test_zero_weight_group_never_selected() {
        let weights = [0, 100];
        for p in 0..100u64 {
            assert_eq!(route("x", &weights, &FixedHash(p)).group, GroupLabel::Group(2));
        }
    }

    #[test]
    fn test_negative_weight_shrinks_boundary() {
        // cumulative: 50, 30, 80
        let weights = [50, -20, 50];
        assert_eq!(select_group(49, &weights), GroupLabel::Group(1));
        assert_eq!(select_group(50, &weights), GroupLabel::Group(3));
        assert_eq!(select_group(79, &weights), GroupLabel::Group(3));
        assert_eq!(select_group(80, &weights), GroupLabel::Unknown);
    }

    #[test]
    fn test_extreme_weights_do_not_overflow() {
        let weights = [Weight::MAX, Weight::MAX];
        assert_eq!(select_group(99, &weights), GroupLabel::Group(1));

        let weights = [Weight::MIN, Weight::MIN, 10];
        assert_eq!(select_group(0, &weights), GroupLabel::Unknown);
    }

    #[test]
    fn test_scenario_tool_123_xxhash() {
        let decision = route("Tool-123", &[50, 50], &XxHashStrategy);
        assert_eq!(decision.hash, 0xccc9_87c8_1690_8c9a);
        assert_eq!(decision.percentage, 90);
        assert_eq!(decision.label(), "Group 2");
        assert_eq!(decision.diagnostic_hash(), "ccc987c816908c9a");

        // Same pair on every call
        for _ in 0..100 {
            assert_eq!(route("Tool-123", &[50, 50], &XxHashStrategy), decision);
        }
    }

    #[test]
    fn test_scenario_tool_123_md5() {
        let decision = route("Tool-123", &[50, 50], &Md5Strategy);
        assert_eq!(decision.percentage, 42);
        assert_eq!(decision.label(), "Group 1");
        assert_eq!(decision.diagnostic_hash(), "d8a2a9ccad7d5f4e");
    }

    #[test]
    fn test_works_through_trait_object() {
        let strategy: &dyn HashStrategy = HashAlgorithm::Xxhash.strategy();
        let via_dyn = route("Tool-123", &[50, 50], strategy);
        let via_static = route("Tool-123", &[50, 50], &XxHashStrategy);
        assert_eq!(via_dyn, via_static);
    }

    #[test]
    fn test_sticky_under_repetition() {
        let weights = [20, 30, 50];
        for algorithm in HashAlgorithm::ALL {
            for i in 0..200 {
                let id = format!("session-{}", i);
                let first = route(&id, &weights, algorithm.strategy()).group;
                for _ in 0..10 {
                    assert_eq!(route(&id, &weights, algorithm.strategy()).group, first);
                }
            }
        }
    }
}
