//! Console tables for times, bounds and spans.
//!
//! Each formatter returns a `String` so callers decide where it goes.

use crate::aggregator::{TimeBounds, Timestamp, TransactionSpan};
use crate::loader::TransactionLog;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Width used for the transaction id column
const ID_WIDTH: usize = 24;

/// Every row of the concatenated log: index, transaction id and raw time
pub fn format_time_table(log: &TransactionLog) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>8}  {:<ID_WIDTH$}  {:>20}", "row", "transaction_id", "time");

    for (row, record) in log.records.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>8}  {:<ID_WIDTH$}  {:>20}",
            row, record.transaction_id, record.time
        );
    }

    let _ = write!(out, "Rows: {}", log.len());
    out
}

/// Grouped min/max table, one line per transaction in id order
pub fn format_bounds_table<T: Timestamp>(bounds: &BTreeMap<String, TimeBounds<T>>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<ID_WIDTH$}  {:>20}  {:>20}", "transaction_id", "min", "max");

    for (id, b) in bounds {
        let _ = writeln!(out, "{:<ID_WIDTH$}  {:>20}  {:>20}", id, b.min, b.max);
    }

    let _ = write!(out, "Transactions: {}", bounds.len());
    out
}

/// Ranked span table with a heading
pub fn format_span_table(title: &str, spans: &[TransactionSpan<f64>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{:>5}  {:<ID_WIDTH$}  {:>14}", "#", "transaction_id", "span (ms)");

    for (rank, span) in spans.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>5}  {:<ID_WIDTH$}  {:>14.3}",
            rank + 1,
            span.transaction_id,
            span.span
        );
    }

    out.truncate(out.trim_end().len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::group_bounds;
    use crate::loader::TransactionRecord;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn test_format_time_table() {
        let mut log = TransactionLog::default();
        log.extend(PathBuf::from("a.csv"), vec![TransactionRecord::new("T1", 100)]);

        let table = format_time_table(&log);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[1].contains("T1"));
        assert!(lines[1].trim_end().ends_with("100"));
        assert_eq!(lines[2], "Rows: 1");
    }

    #[test]
    fn test_format_bounds_table() {
        let bounds = group_bounds(vec![("T2", 5i64), ("T1", 100), ("T1", 300)]);
        let table = format_bounds_table(&bounds);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("T1"));
        assert!(lines[1].ends_with("300"));
        assert!(lines[2].starts_with("T2"));
        assert_eq!(lines[3], "Transactions: 2");
    }

    #[test]
    fn test_format_span_table() {
        let spans = vec![TransactionSpan::new("T1", 2.5f64)];
        let table = format_span_table("Slowest", &spans);

        assert_eq!(
            table,
            format!(
                "Slowest\n{:>5}  {:<24}  {:>14}\n{:>5}  {:<24}  {:>14}",
                "#", "transaction_id", "span (ms)", 1, "T1", "2.500"
            )
        );
    }
}
