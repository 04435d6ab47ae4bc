//! Spans command implementation.
//!
//! The spans command:
//! 1. Loads every node log
//! 2. Converts nanoseconds to milliseconds
//! 3. Computes per-transaction processing spans
//! 4. Prints the slowest and fastest transactions
//! 5. Renders the percentile plot
//! 6. Writes the JSON report

use super::models::SpansArgs;
use crate::aggregator::{
    group_spans, largest_spans, percentile_curve, smallest_spans, SpanSummary,
};
use crate::loader::{load_node_logs, log_file_paths, normalize_log};
use crate::output::{format_span_table, to_report, write_report, write_svg, LatencyReport};
use crate::plot::generate_percentile_plot;
use crate::utils::config::MAX_TOP_N;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

const MIN_PLOT_WIDTH: usize = 200;
const MIN_PLOT_HEIGHT: usize = 150;

/// Execute the spans command
///
/// Returns the assembled report whether or not it was written to disk.
///
/// # Errors
/// * Missing or malformed node log
/// * Plot or report write failures
pub fn execute_spans(args: &SpansArgs) -> Result<LatencyReport> {
    let start_time = Instant::now();

    validate_args(args)?;

    // Step 1: Load
    let paths = log_file_paths(&args.log_dir, args.node_count);
    info!(
        "Step 1/5: Loading {} node logs from {}...",
        paths.len(),
        args.log_dir.display()
    );
    let log = load_node_logs(&paths).context("Failed to load node logs")?;

    // Step 2: Spans in milliseconds
    info!("Step 2/5: Computing transaction spans...");
    let spans = group_spans(normalize_log(&log));
    debug!("{} rows -> {} transactions", log.len(), spans.len());

    // Step 3: Distribution
    info!("Step 3/5: Building percentile curve...");
    let curve = percentile_curve(&spans);
    let summary = SpanSummary::from_curve(&curve);
    info!("Span distribution: {}", summary.summary());

    if args.print_tables {
        println!(
            "{}",
            format_span_table(
                &format!("Slowest {} transactions", args.top_n),
                &largest_spans(&spans, args.top_n)
            )
        );
        println!();
        println!(
            "{}",
            format_span_table(
                &format!("Fastest {} transactions", args.top_n),
                &smallest_spans(&spans, args.top_n)
            )
        );
        println!();
        println!("{}", summary.summary());
    }

    // Step 4: Plot
    match &args.output_svg {
        Some(svg_path) if curve.is_empty() => {
            warn!("Step 4/5: No transactions, skipping plot {}", svg_path.display());
        }
        Some(svg_path) => {
            info!("Step 4/5: Rendering percentile plot...");
            let svg = generate_percentile_plot(&curve, args.plot_config.as_ref())
                .context("Failed to generate percentile plot")?;
            write_svg(&svg, svg_path).context("Failed to write percentile plot")?;
            info!("✓ Plot written to: {}", svg_path.display());
        }
        None => info!("Step 4/5: Skipping plot (not requested)"),
    }

    // Step 5: Report
    let report = to_report(&log, &spans, summary, args.top_n);
    if let Some(json_path) = &args.output_json {
        info!("Step 5/5: Writing report...");
        write_report(&report, json_path).context("Failed to write latency report")?;
        info!("✓ Report written to: {}", json_path.display());
    } else {
        info!("Step 5/5: Skipping report (not requested)");
    }

    info!("Analysis completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(report)
}

/// Validate spans arguments
///
/// **Public** - can be called before execute_spans for early validation
pub fn validate_args(args: &SpansArgs) -> Result<()> {
    if args.node_count == 0 {
        anyhow::bail!("node count must be greater than 0");
    }

    if args.top_n == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top_n > MAX_TOP_N {
        anyhow::bail!("top is too large (max {})", MAX_TOP_N);
    }

    if let Some(config) = &args.plot_config {
        if config.width < MIN_PLOT_WIDTH || config.height < MIN_PLOT_HEIGHT {
            anyhow::bail!(
                "plot must be at least {}x{} pixels",
                MIN_PLOT_WIDTH,
                MIN_PLOT_HEIGHT
            );
        }
    }

    Ok(())
}
