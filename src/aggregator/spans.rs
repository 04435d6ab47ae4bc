//! Per-transaction processing spans and slowest/fastest extraction.

use super::bounds::{group_bounds, Timestamp};
use std::cmp::Ordering;

/// Elapsed time between the first and last record of a transaction
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionSpan<T> {
    pub transaction_id: String,
    pub span: T,
}

impl<T> TransactionSpan<T> {
    pub fn new(transaction_id: impl Into<String>, span: T) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            span,
        }
    }
}

/// Span (max - min) per transaction id, ordered by id
pub fn group_spans<'a, T, I>(rows: I) -> Vec<TransactionSpan<T>>
where
    T: Timestamp,
    I: IntoIterator<Item = (&'a str, T)>,
{
    group_bounds(rows)
        .into_iter()
        .map(|(transaction_id, bounds)| TransactionSpan {
            transaction_id,
            span: bounds.span(),
        })
        .collect()
}

/// The `k` slowest transactions, largest span first
///
/// Sort is stable: equal spans keep their incoming (id) order.
pub fn largest_spans<T: Timestamp>(
    spans: &[TransactionSpan<T>],
    k: usize,
) -> Vec<TransactionSpan<T>> {
    let mut sorted = spans.to_vec();
    sorted.sort_by(|a, b| compare(b.span, a.span));
    sorted.truncate(k);
    sorted
}

/// The `k` fastest transactions, smallest span first
pub fn smallest_spans<T: Timestamp>(
    spans: &[TransactionSpan<T>],
    k: usize,
) -> Vec<TransactionSpan<T>> {
    let mut sorted = spans.to_vec();
    sorted.sort_by(|a, b| compare(a.span, b.span));
    sorted.truncate(k);
    sorted
}

fn compare<T: Timestamp>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<TransactionSpan<i64>> {
        vec![
            TransactionSpan::new("a", 5),
            TransactionSpan::new("b", 9),
            TransactionSpan::new("c", 1),
            TransactionSpan::new("d", 9),
        ]
    }

    #[test]
    fn test_group_spans() {
        let rows = vec![("T1", 100i64), ("T1", 300), ("T2", 50), ("T2", 50)];
        let spans = group_spans(rows);

        assert_eq!(
            spans,
            vec![TransactionSpan::new("T1", 200), TransactionSpan::new("T2", 0)]
        );
    }

    #[test]
    fn test_extreme_nanos_span_is_not_negative() {
        let spans = group_spans(vec![("T", i64::MIN), ("T", i64::MAX)]);
        assert_eq!(spans, vec![TransactionSpan::new("T", i64::MAX)]);
    }

    #[test]
    fn test_single_record_has_zero_span() {
        let spans = group_spans(vec![("only", 7.25f64)]);
        assert_eq!(spans[0].span, 0.0);
    }

    #[test]
    fn test_largest_spans_stable_ties() {
        let top = largest_spans(&sample(), 3);
        let ids: Vec<&str> = top.iter().map(|s| s.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "d", "a"]);
    }

    #[test]
    fn test_smallest_spans() {
        let bottom = smallest_spans(&sample(), 2);
        let ids: Vec<&str> = bottom.iter().map(|s| s.transaction_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn test_k_larger_than_input() {
        assert_eq!(largest_spans(&sample(), 60).len(), 4);
        assert!(smallest_spans::<i64>(&[], 60).is_empty());
    }
}
