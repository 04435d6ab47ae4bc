use crate::output::read_report;
use crate::utils::config::REPORT_SCHEMA_VERSION;
use anyhow::{Context, Result};
use std::path::Path;

/// Validate a latency report JSON file
pub fn validate_report_file(file_path: &Path) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(file_path)
        .with_context(|| format!("Failed to read report {}", file_path.display()))?;

    if report.version != REPORT_SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            REPORT_SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  Source files: {}", report.source_files.join(", "));
    println!("  Records: {}", report.record_count);
    println!("  Transactions: {}", report.transaction_count);
    println!("  {}", report.summary.summary());

    Ok(())
}
