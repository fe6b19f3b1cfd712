use crate::primitives::{ConfigError, ReportFormat};
use clap::Parser;

use super::config::AppConfig;
use super::env::EnvironmentConfig;

/// debgraph - transitive dependency graphs for Debian packages
#[derive(Debug, Clone, Parser)]
#[command(name = "debgraph")]
#[command(about = "Show what a Debian package pulls in transitively")]
#[command(version)]
pub struct Cli {
    /// Global configuration options
    #[command(flatten)]
    pub config: AppConfig,

    /// Print the load order even if the graph configuration does not ask for it
    #[arg(long, env = "DEBGRAPH_SHOW_LOAD_ORDER")]
    pub show_load_order: bool,

    /// Report format, overriding `output_format` (text, json, dot)
    #[arg(short, long, env = "DEBGRAPH_FORMAT")]
    pub format: Option<ReportFormat>,
}

/// Resolved command line: application settings plus graph config overrides
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub app_config: AppConfig,
    pub show_load_order: bool,
    pub format: Option<ReportFormat>,
}

impl CliConfig {
    /// Load configuration: defaults -> .env -> env vars -> CLI
    pub fn load() -> Result<Self, ConfigError> {
        AppConfig::load_env_files()?;
        let cli = Cli::parse();
        let env = EnvironmentConfig::load()?;
        Self::from_cli(cli, &env)
    }

    pub fn from_cli(cli: Cli, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            app_config: AppConfig::resolve(cli.config, env)?,
            show_load_order: cli.show_load_order,
            format: cli.format,
        })
    }
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            config: AppConfig::default(),
            show_load_order: false,
            format: None,
        }
    }
}

#[cfg(test)]
mod tests {
    include!("cli.test.rs");
}
