//! Transaction latency CLI
//!
//! Analyses per-node transaction logs: min/max timestamps per transaction,
//! processing spans, slowest/fastest transactions and the percentile curve.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use txn_latency::commands::{
    execute_bounds, execute_spans, validate_report_file, BoundsArgs, SpansArgs,
};
use txn_latency::plot::PlotConfig;
use txn_latency::utils::config::{DEFAULT_NODE_COUNT, DEFAULT_TOP_N};

/// Transaction latency analysis for multicast node logs
#[derive(Parser, Debug)]
#[command(name = "txn-latency")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every timestamp and the min/max time per transaction
    Bounds {
        /// Directory holding node{i}_transactions_log.csv files
        #[arg(short, long, env = "TXN_LATENCY_DIR", default_value = ".")]
        dir: PathBuf,

        /// Number of node logs to read
        #[arg(short, long, env = "TXN_LATENCY_FILES", default_value_t = DEFAULT_NODE_COUNT)]
        files: usize,

        /// Skip the full time table
        #[arg(long)]
        hide_times: bool,
    },

    /// Compute processing spans, slowest/fastest tables and the percentile plot
    Spans {
        /// Directory holding node{i}_transactions_log.csv files
        #[arg(short, long, env = "TXN_LATENCY_DIR", default_value = ".")]
        dir: PathBuf,

        /// Number of node logs to read
        #[arg(short, long, env = "TXN_LATENCY_FILES", default_value_t = DEFAULT_NODE_COUNT)]
        files: usize,

        /// Rows in the slowest/fastest tables
        #[arg(short, long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Output path for SVG percentile plot
        #[arg(short, long, default_value = "latency_percentiles.svg")]
        plot: PathBuf,

        /// Do not render the plot
        #[arg(long)]
        no_plot: bool,

        /// Output path for JSON report (optional)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Plot title
        #[arg(long)]
        title: Option<String>,

        /// Plot width in pixels
        #[arg(long, default_value = "960")]
        width: usize,

        /// Plot height in pixels
        #[arg(long, default_value = "540")]
        height: usize,

        /// Skip the span tables on stdout
        #[arg(long)]
        quiet: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Bounds {
            dir,
            files,
            hide_times,
        } => {
            let args = BoundsArgs {
                log_dir: dir,
                node_count: files,
                print_times: !hide_times,
            };
            execute_bounds(&args)?;
        }

        Commands::Spans {
            dir,
            files,
            top,
            plot,
            no_plot,
            output,
            title,
            width,
            height,
            quiet,
        } => {
            let mut plot_config = PlotConfig::new().with_size(width, height);
            if let Some(title_str) = title {
                plot_config = plot_config.with_title(title_str);
            }

            let args = SpansArgs {
                log_dir: dir,
                node_count: files,
                top_n: top,
                output_json: output,
                output_svg: (!no_plot).then_some(plot),
                plot_config: Some(plot_config),
                print_tables: !quiet,
            };
            execute_spans(&args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(&file)?;
        }
    }

    Ok(())
}
