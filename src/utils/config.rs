//! Configuration and constants for the CLI.

/// Number of node log files produced by a default cluster run
pub const DEFAULT_NODE_COUNT: usize = 3;

/// File name template for per-node logs; `{}` is the 1-based node index
pub const LOG_FILE_TEMPLATE: &str = "node{}_transactions_log.csv";

/// Number of rows shown in the slowest/fastest span tables
pub const DEFAULT_TOP_N: usize = 60;

/// Current JSON report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Node clocks record nanoseconds; reports are in milliseconds
pub const NANOS_PER_MILLI: f64 = 1_000_000.0;

// Required CSV columns
pub const ID_COLUMN: &str = "transaction_id";
pub const TIME_COLUMN: &str = "time";

/// Upper bound accepted for `--top`
pub const MAX_TOP_N: usize = 10_000;

/// Build the log file name for a node index
pub fn log_file_name(node: usize) -> String {
    LOG_FILE_TEMPLATE.replace("{}", &node.to_string())
}
