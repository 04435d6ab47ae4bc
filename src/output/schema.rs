//! Output JSON schema for latency reports.
//!
//! Schema is versioned to allow future evolution.

use crate::aggregator::{largest_spans, smallest_spans, SpanSummary, TransactionSpan};
use crate::loader::TransactionLog;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use serde::{Deserialize, Serialize};

/// Top-level report structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Node logs the report was computed from
    pub source_files: Vec<String>,

    /// Rows across all logs
    pub record_count: usize,

    /// Distinct transaction ids
    pub transaction_count: usize,

    /// Unit of every span value in the report
    pub unit: String,

    pub summary: SpanSummary,

    /// Largest spans, slowest first
    pub slowest: Vec<SpanEntry>,

    /// Smallest spans, fastest first
    pub fastest: Vec<SpanEntry>,

    /// Timestamp when report was generated
    pub generated_at: String,
}

/// One transaction and its processing span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpanEntry {
    pub transaction_id: String,
    pub span: f64,
}

impl From<TransactionSpan<f64>> for SpanEntry {
    fn from(span: TransactionSpan<f64>) -> Self {
        Self {
            transaction_id: span.transaction_id,
            span: span.span,
        }
    }
}

/// Assemble a report from millisecond spans
pub fn to_report(
    log: &TransactionLog,
    spans: &[TransactionSpan<f64>],
    summary: SpanSummary,
    top_n: usize,
) -> LatencyReport {
    let entries = |list: Vec<TransactionSpan<f64>>| -> Vec<SpanEntry> {
        list.into_iter().map(SpanEntry::from).collect()
    };

    LatencyReport {
        version: REPORT_SCHEMA_VERSION.to_string(),
        source_files: log.files.iter().map(|p| p.display().to_string()).collect(),
        record_count: log.len(),
        transaction_count: spans.len(),
        unit: "ms".to_string(),
        summary,
        slowest: entries(largest_spans(spans, top_n)),
        fastest: entries(smallest_spans(spans, top_n)),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }
}
