//! Bounds command implementation.
//!
//! The bounds command:
//! 1. Loads every node log
//! 2. Prints the raw time column
//! 3. Groups by transaction and prints min/max time

use super::models::BoundsArgs;
use crate::aggregator::{group_bounds, TimeBounds};
use crate::loader::{load_node_logs, log_file_paths};
use crate::output::{format_bounds_table, format_time_table};
use anyhow::{Context, Result};
use log::info;
use std::collections::BTreeMap;

/// Execute the bounds command
///
/// Returns the grouped bounds (nanoseconds) after printing them.
///
/// # Errors
/// * Missing or malformed node log
pub fn execute_bounds(args: &BoundsArgs) -> Result<BTreeMap<String, TimeBounds<i64>>> {
    validate_bounds_args(args)?;

    let paths = log_file_paths(&args.log_dir, args.node_count);
    info!("Loading {} node logs from {}", paths.len(), args.log_dir.display());

    let log = load_node_logs(&paths).context("Failed to load node logs")?;

    if args.print_times {
        println!("{}", format_time_table(&log));
        println!();
    }

    let bounds = group_bounds(log.timings());
    println!("{}", format_bounds_table(&bounds));

    info!(
        "Grouped {} rows into {} transactions",
        log.len(),
        bounds.len()
    );

    Ok(bounds)
}

/// Validate bounds arguments
pub fn validate_bounds_args(args: &BoundsArgs) -> Result<()> {
    if args.node_count == 0 {
        anyhow::bail!("node count must be greater than 0");
    }
    Ok(())
}
