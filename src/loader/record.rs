//! Row types for node transaction logs.

use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// One CSV row: a transaction seen by a node at a point in time
///
/// The same `transaction_id` appears once per node that handled it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,

    /// Nanoseconds since the Unix epoch
    pub time: i64,
}

impl TransactionRecord {
    pub fn new(transaction_id: impl Into<String>, time: i64) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            time,
        }
    }
}

/// All rows from every loaded node log, in file order then row order
#[derive(Debug, Clone, Default)]
pub struct TransactionLog {
    /// Files that contributed rows
    pub files: Vec<PathBuf>,

    pub records: Vec<TransactionRecord>,
}

impl TransactionLog {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append the rows of one file
    pub fn extend(&mut self, file: PathBuf, records: Vec<TransactionRecord>) {
        self.files.push(file);
        self.records.extend(records);
    }

    /// (transaction id, nanoseconds) pairs for aggregation
    pub fn timings(&self) -> impl Iterator<Item = (&str, i64)> + '_ {
        self.records
            .iter()
            .map(|r| (r.transaction_id.as_str(), r.time))
    }

    /// Number of distinct transaction ids
    pub fn transaction_count(&self) -> usize {
        self.records
            .iter()
            .map(|r| r.transaction_id.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}
