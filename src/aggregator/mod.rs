//! Aggregation of transaction rows into per-transaction statistics.
//!
//! This module transforms concatenated node logs into:
//! - Min/max time bounds per transaction
//! - Processing spans and the slowest/fastest transactions
//! - The empirical percentile curve of spans

pub mod bounds;
pub mod percentile;
pub mod spans;

// Re-export main types and functions
pub use bounds::{group_bounds, TimeBounds, Timestamp};
pub use percentile::{percentile_curve, PercentileCurve, SpanSummary};
pub use spans::{group_spans, largest_spans, smallest_spans, TransactionSpan};
