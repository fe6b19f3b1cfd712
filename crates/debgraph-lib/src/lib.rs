//! # debgraph Library
//!
//! Transitive dependency graphs for Debian packages.
//!
//! ## Core Modules
//!
//! - [`primitives`] - Foundation types and errors
//! - [`logger`] - Structured logging with progress spinners
//! - [`deb`] - Package index and adjacency list parsing, graph configuration
//! - [`graph`] - Full graph, closure construction, load order and reports
//! - [`networking`] - Index retrieval from HTTP repositories and local mirrors
//! - [`application`] - CLI interface, configuration loading and commands
//!
//! ## Quick Start
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! debgraph_lib::main().await?;
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod deb;
pub mod graph;
pub mod logger;
pub mod networking;
pub mod primitives;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export commonly used types for convenience
pub use application::{AppConfig, Cli, CliConfig, execute_command};
pub use deb::{GraphConfig, RunMode};
pub use graph::{ClosureGraph, CycleError, Exclusion, PackageGraph, Report};
pub use logger::Logger;
pub use networking::{AccessError, IndexClient, NetworkingConfig};
pub use primitives::{
    ColorIntent, ConfigError, DebgraphError, LogFormat, LogLevel, LogOutput, LoggerError,
    ReportFormat,
};

use anyhow::{Context, Result};

pub async fn main() -> Result<()> {
    // Load CLI configuration
    let config = CliConfig::load().context("Failed to load configuration")?;

    let logger_config = config.app_config.to_logger_config();
    console::set_colors_enabled_stderr(logger_config.ansi);
    Logger::init(logger_config).context("Failed to initialize logging")?;

    // Execute the command
    execute_command(config).await
}
