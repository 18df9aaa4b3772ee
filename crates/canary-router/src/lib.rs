//! Canary Router - Deterministic Weighted Traffic Splitting
//!
//! Assigns opaque identifiers to weighted groups. Every occurrence of an
//! identifier lands in the same group, while the whole population spreads
//! over the groups in proportion to their weights. Nothing is stored: the
//! assignment is recomputed from the identifier's hash on every call.
//!
//! # Architecture
//!
//! ```text
//! identifier
//!     │
//!     ▼
//! ┌─────────────────────────┐
//! │     HashStrategy        │  identifier → u64
//! │ (xxhash/md5/blake3/sha) │
//! └───────────┬─────────────┘
//!             │ hash % 100
//!             ▼
//! ┌─────────────────────────┐
//! │   Cumulative scan       │  first index where p < Σ weights
//! │   (Which group?)        │
//! └───────────┬─────────────┘
//!             ▼
//!      RoutingDecision
//! ```
//!
//! # Example
//!
//! ```rust
//! use canary_router::{route, GroupLabel, XxHashStrategy};
//!
//! let decision = route("Tool-123", &[50, 50], &XxHashStrategy);
//! assert_eq!(decision.group, GroupLabel::Group(2));
//! assert_eq!(decision.diagnostic_hash(), "ccc987c816908c9a");
//! ```
//!
//! Callers wanting configuration checks go through [`TrafficSplitter::try_new`].

// Core modules
mod error;
mod types;

// Hash providers
mod strategy;

// Routing
mod router;
mod split;

// Re-exports: Error types
pub use error::RouterError;

// Re-exports: Core types
pub use types::{GroupLabel, RoutingDecision, Weight, PERCENT_RANGE, UNKNOWN_GROUP_LABEL};

// Re-exports: Strategy trait and implementations
pub use strategy::{
    Blake3Strategy, HashAlgorithm, HashStrategy, Md5Strategy, Sha256Strategy, XxHashStrategy,
};

// Re-exports: Routing
pub use router::{percentage_of, route, select_group};
pub use split::{SplitConfig, TrafficSplitter};
