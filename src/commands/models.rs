use crate::plot::PlotConfig;
use crate::utils::config::{DEFAULT_NODE_COUNT, DEFAULT_TOP_N};
use std::path::PathBuf;

/// Arguments for the bounds command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BoundsArgs {
    /// Directory holding the node logs
    pub log_dir: PathBuf,

    /// Number of node logs to read
    pub node_count: usize,

    /// Print every row before the grouped table
    pub print_times: bool,
}

impl Default for BoundsArgs {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            node_count: DEFAULT_NODE_COUNT,
            print_times: true,
        }
    }
}

/// Arguments for the spans command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SpansArgs {
    /// Directory holding the node logs
    pub log_dir: PathBuf,

    /// Number of node logs to read
    pub node_count: usize,

    /// Rows in the slowest/fastest tables
    pub top_n: usize,

    /// Output path for JSON report (optional)
    pub output_json: Option<PathBuf>,

    /// Output path for SVG percentile plot (optional)
    pub output_svg: Option<PathBuf>,

    /// Plot configuration
    pub plot_config: Option<PlotConfig>,

    /// Print span tables to stdout
    pub print_tables: bool,
}

impl Default for SpansArgs {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            node_count: DEFAULT_NODE_COUNT,
            top_n: DEFAULT_TOP_N,
            output_json: None,
            output_svg: Some(PathBuf::from("latency_percentiles.svg")),
            plot_config: None,
            print_tables: true,
        }
    }
}
