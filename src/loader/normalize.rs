//! Nanosecond to millisecond conversion.

use super::record::TransactionLog;
use crate::utils::config::NANOS_PER_MILLI;

/// Convert a nanosecond timestamp to fractional milliseconds
pub fn nanos_to_millis(nanos: i64) -> f64 {
    nanos as f64 / NANOS_PER_MILLI
}

/// (transaction id, milliseconds) pairs in log order
pub fn normalize_log(log: &TransactionLog) -> impl Iterator<Item = (&str, f64)> + '_ {
    log.timings().map(|(id, nanos)| (id, nanos_to_millis(nanos)))
}
