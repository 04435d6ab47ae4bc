//! CSV reader for node transaction logs.
//!
//! Expected format (one file per node):
//!
//! ```text
//! transaction_id,time
//! node1_0_T,1675812345123456789
//! ```
//!
//! Any malformed row fails the whole load; partial results are never returned.

use super::record::{TransactionLog, TransactionRecord};
use crate::utils::config::{log_file_name, ID_COLUMN, TIME_COLUMN};
use crate::utils::error::LoadError;
use log::{debug, info};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Paths of the `count` node logs inside `dir`
///
/// Nodes are numbered from 1, matching the node identifiers in the cluster config.
pub fn log_file_paths(dir: impl AsRef<Path>, count: usize) -> Vec<PathBuf> {
    let dir = dir.as_ref();
    (1..=count).map(|node| dir.join(log_file_name(node))).collect()
}

/// Read every log in order and concatenate the rows
///
/// # Errors
/// * `LoadError::NoFiles` - `paths` is empty
/// * any error from [`read_log_file`] for the first file that fails
pub fn load_node_logs(paths: &[PathBuf]) -> Result<TransactionLog, LoadError> {
    if paths.is_empty() {
        return Err(LoadError::NoFiles);
    }

    let mut log = TransactionLog::default();

    for path in paths {
        let records = read_log_file(path)?;
        info!("Loaded {} rows from {}", records.len(), path.display());
        log.extend(path.clone(), records);
    }

    debug!(
        "Concatenated {} rows across {} files",
        log.len(),
        log.files.len()
    );

    Ok(log)
}

/// Read a single node log
///
/// # Errors
/// * `LoadError::Io` - file missing or unreadable
/// * `LoadError::MissingColumn` - header lacks `transaction_id` or `time`
/// * `LoadError::Csv` - malformed row or non-numeric time
pub fn read_log_file(path: impl AsRef<Path>) -> Result<Vec<TransactionRecord>, LoadError> {
    let path = path.as_ref();

    debug!("Reading node log: {}", path.display());

    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_log(file, path)
}

/// Parse CSV rows from any reader
///
/// `origin` is only used in error messages.
pub fn parse_log<R: Read>(input: R, origin: &Path) -> Result<Vec<TransactionRecord>, LoadError> {
    let csv_error = |source| LoadError::Csv {
        path: origin.to_path_buf(),
        source,
    };

    // Trim so that "transaction_id, time" headers written by hand still match
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_error)?;
    for column in [ID_COLUMN, TIME_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn {
                path: origin.to_path_buf(),
                column: column.to_string(),
            });
        }
    }

    reader
        .deserialize::<TransactionRecord>()
        .map(|row| row.map_err(csv_error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<TransactionRecord>, LoadError> {
        parse_log(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_parse_basic_rows() {
        let rows = parse("transaction_id,time\nnode1_0_T,100\nnode1_0_T,300\n").unwrap();
        assert_eq!(
            rows,
            vec![
                TransactionRecord::new("node1_0_T", 100),
                TransactionRecord::new("node1_0_T", 300),
            ]
        );
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let rows = parse("transaction_id, time\n T1 , 42\n").unwrap();
        assert_eq!(rows, vec![TransactionRecord::new("T1", 42)]);
    }

    #[test]
    fn test_parse_ignores_extra_columns() {
        let rows = parse("node,transaction_id,time\n1,T1,5\n").unwrap();
        assert_eq!(rows, vec![TransactionRecord::new("T1", 5)]);
    }

    #[test]
    fn test_parse_header_only() {
        let rows = parse("transaction_id,time\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_time_column() {
        let err = parse("transaction_id,timestamp\nT1,5\n").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { ref column, .. } if column == "time"));
    }

    #[test]
    fn test_empty_input_is_missing_columns() {
        let err = parse("").unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn { .. }));
    }

    #[test]
    fn test_non_numeric_time_fails() {
        let err = parse("transaction_id,time\nT1,soon\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn test_short_row_fails() {
        let err = parse("transaction_id,time\nT1\n").unwrap_err();
        assert!(matches!(err, LoadError::Csv { .. }));
    }

    #[test]
    fn test_log_file_paths() {
        let paths = log_file_paths("logs", 3);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("logs/node1_transactions_log.csv"),
                PathBuf::from("logs/node2_transactions_log.csv"),
                PathBuf::from("logs/node3_transactions_log.csv"),
            ]
        );
    }

    #[test]
    fn test_load_no_files() {
        assert!(matches!(load_node_logs(&[]), Err(LoadError::NoFiles)));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_log_file(dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
