//! Application layer modules
//!
//! CLI interface, configuration management and command execution.

pub mod cli;
pub mod commands;
pub mod config;
pub mod env;
pub mod loader;

// Re-export main types for convenience
pub use cli::{Cli, CliConfig};
pub use commands::{analyze, execute_command, load_graph, run};
pub use config::AppConfig;
pub use env::EnvironmentConfig;
