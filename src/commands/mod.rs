//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod bounds;
pub mod models;
pub mod spans;
pub mod utils;

// Re-export main command functions
pub use bounds::{execute_bounds, validate_bounds_args};
pub use models::{BoundsArgs, SpansArgs};
pub use spans::{execute_spans, validate_args};
pub use utils::validate_report_file;
