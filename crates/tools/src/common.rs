//! Common utilities for tools

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Output format for simulation reports
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    /// Step-by-step human readable report
    #[default]
    Text,
    /// The full pipeline trace as JSON
    Json,
}

/// Pick the log level from the global flags
pub fn log_level(verbose: bool, debug: bool) -> tracing::Level {
    if debug {
        tracing::Level::DEBUG
    } else if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    }
}

/// Initialize logging on stderr so reports on stdout stay clean
pub fn init_logging(verbose: bool, debug: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, debug))
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
