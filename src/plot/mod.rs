//! Percentile plot rendering.
//!
//! Turns a percentile curve into a standalone SVG line chart
//! (processing time on x, percentile on y).

pub mod generator;

// Re-export main types
pub use generator::{generate_percentile_plot, PlotConfig};
