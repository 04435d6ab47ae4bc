//! Loading of per-node transaction logs.
//!
//! This module handles:
//! - Locating `node{i}_transactions_log.csv` files
//! - Reading and validating CSV rows
//! - Concatenating all node logs into one table
//! - Converting nanosecond timestamps to milliseconds

pub mod csv_log;
pub mod normalize;
pub mod record;

// Re-export main types
pub use csv_log::{load_node_logs, log_file_paths, parse_log, read_log_file};
pub use normalize::{nanos_to_millis, normalize_log};
pub use record::{TransactionLog, TransactionRecord};
