//! Empirical latency distribution.
//!
//! Spans are sorted ascending into `x[0..n]`; rank `i` (1-based) gets
//! percentile `100 * i / n`. No interpolation or binning, so the last point is
//! always exactly 100.

use super::bounds::Timestamp;
use super::spans::TransactionSpan;
use log::debug;
use serde::{Deserialize, Serialize};

/// Paired (latency, percentile) sequence ready for plotting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PercentileCurve {
    /// Span values, ascending
    pub latencies: Vec<f64>,

    /// Percentile rank for each latency, in (0, 100]
    pub percentiles: Vec<f64>,
}

impl PercentileCurve {
    pub fn len(&self) -> usize {
        self.latencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latencies.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.latencies
            .iter()
            .copied()
            .zip(self.percentiles.iter().copied())
    }

    /// Nearest-rank lookup: smallest latency whose percentile reaches `p`
    pub fn value_at(&self, p: f64) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let idx = self.percentiles.partition_point(|&y| y < p);
        Some(self.latencies[idx.min(self.len() - 1)])
    }
}

/// Build the empirical CDF of span values
pub fn percentile_curve<T: Timestamp>(spans: &[TransactionSpan<T>]) -> PercentileCurve {
    let mut latencies: Vec<f64> = spans.iter().map(|s| s.span.as_f64()).collect();
    latencies.sort_by(f64::total_cmp);

    let n = latencies.len();
    let percentiles = (1..=n).map(|i| 100.0 * i as f64 / n as f64).collect();

    debug!("Built percentile curve with {} points", n);

    PercentileCurve {
        latencies,
        percentiles,
    }
}

/// Headline statistics of a span distribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpanSummary {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub p50: f64,
    pub p90: f64,
    pub p99: f64,
}

impl SpanSummary {
    pub fn from_curve(curve: &PercentileCurve) -> Self {
        if curve.is_empty() {
            return Self::default();
        }

        let total: f64 = curve.latencies.iter().sum();
        let at = |p: f64| curve.value_at(p).unwrap_or_default();

        Self {
            count: curve.len(),
            min: curve.latencies[0],
            max: curve.latencies[curve.len() - 1],
            mean: total / curve.len() as f64,
            p50: at(50.0),
            p90: at(90.0),
            p99: at(99.0),
        }
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Transactions: {} | Min: {:.3} | Mean: {:.3} | P50: {:.3} | P90: {:.3} | P99: {:.3} | Max: {:.3}",
            self.count, self.min, self.mean, self.p50, self.p90, self.p99, self.max
        )
    }
}
