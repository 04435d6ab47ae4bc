//! Transaction latency analysis
//!
//! Loads per-node transaction logs written by the multicast banking
//! nodes, groups rows by transaction id and reports how long each
//! transaction took to reach every node.
//!
//! This crate provides the core implementation for the
//! `txn-latency` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! txn-latency bounds --dir logs
//! txn-latency spans --dir logs --plot percentiles.svg --output report.json
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod plot;
pub mod utils;
