//! Application configuration management
//!
//! Process-level settings (logging, color, network timeout, where the graph
//! configuration lives) resolved with the precedence
//! defaults -> .env -> env vars -> CLI args.

use crate::networking::NetworkingConfig;
use crate::primitives::*;
use clap::Parser;
use serde::Deserialize;
use std::path::PathBuf;

/// Default configuration values
pub mod defaults {
    pub const CONFIG_PATH: &str = "config.toml";
    pub const LOG_LEVEL: &str = "0"; // Error-only logging by default
    pub const LOG_FORMAT: &str = "text";
    pub const LOG_OUTPUT: &str = "stderr";
    pub const COLOR: &str = "auto";
    pub const NET_TIMEOUT: &str = "30";
}

/// Default value functions for configuration fields
mod default_fns {
    use crate::primitives::{ColorIntent, LogFormat, LogOutput};
    use std::path::PathBuf;

    pub fn config() -> PathBuf {
        PathBuf::from(super::defaults::CONFIG_PATH)
    }

    pub fn log_level() -> u8 {
        0
    }

    pub fn log_format() -> LogFormat {
        LogFormat::Text
    }

    pub fn log_output() -> LogOutput {
        LogOutput::Stderr
    }

    pub fn color() -> ColorIntent {
        ColorIntent::Auto
    }

    pub fn net_timeout() -> u64 {
        30
    }
}

/// Application configuration structure
#[derive(Debug, Clone, Parser, Deserialize)]
pub struct AppConfig {
    /// Graph configuration file (TOML)
    #[arg(short, long, env = "DEBGRAPH_CONFIG", default_value = defaults::CONFIG_PATH)]
    #[serde(default = "default_fns::config")]
    pub config: PathBuf,

    /// Verbosity level (0=error, 1=warn, 2=info, 3=debug, 4=trace)
    #[arg(long, env = "DEBGRAPH_LOG_LEVEL", default_value = defaults::LOG_LEVEL)]
    #[serde(default = "default_fns::log_level")]
    pub log_level: u8,

    /// Log format (text, json, yaml)
    #[arg(long, env = "DEBGRAPH_LOG_FORMAT", default_value = defaults::LOG_FORMAT)]
    #[serde(default = "default_fns::log_format")]
    pub log_format: LogFormat,

    /// Log output stream (stderr, stdout)
    #[arg(long, env = "DEBGRAPH_LOG_OUTPUT", default_value = defaults::LOG_OUTPUT)]
    #[serde(default = "default_fns::log_output")]
    pub log_output: LogOutput,

    /// Color output control (auto, always, never)
    #[arg(long, env = "DEBGRAPH_COLOR", default_value = defaults::COLOR)]
    #[serde(default = "default_fns::color")]
    pub color: ColorIntent,

    /// Index download timeout in seconds
    #[arg(short, long, env = "DEBGRAPH_NET_TIMEOUT", default_value = defaults::NET_TIMEOUT)]
    #[serde(default = "default_fns::net_timeout")]
    pub net_timeout: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config: default_fns::config(),
            log_level: default_fns::log_level(),
            log_format: default_fns::log_format(),
            log_output: default_fns::log_output(),
            color: default_fns::color(),
            net_timeout: default_fns::net_timeout(),
        }
    }
}

impl AppConfig {
    /// Logger settings; `auto` color follows whether the log stream is a terminal
    pub fn to_logger_config(&self) -> LoggerConfig {
        let ansi = match self.color {
            ColorIntent::Always => true,
            ColorIntent::Never => false,
            ColorIntent::Auto => match self.log_output {
                LogOutput::Stderr => console::Term::stderr().is_term(),
                LogOutput::Stdout => console::Term::stdout().is_term(),
            },
        };

        LoggerConfig {
            level: LogLevel::from_verbosity(self.log_level),
            format: self.log_format,
            output: self.log_output,
            ansi,
        }
    }

    pub fn to_networking_config(&self) -> NetworkingConfig {
        NetworkingConfig {
            timeout_seconds: self.net_timeout,
        }
    }

    /// Merge this config with another, taking non-default values from other
    pub fn merge_with(mut self, other: Self) -> Self {
        if other.config != default_fns::config() {
            self.config = other.config;
        }

        // For primitive fields, take other if it's not the default
        if other.log_level != default_fns::log_level() {
            self.log_level = other.log_level;
        }
        if other.net_timeout != default_fns::net_timeout() {
            self.net_timeout = other.net_timeout;
        }

        // For enums, detect if it's non-default
        if !matches!(other.log_format, LogFormat::Text) {
            self.log_format = other.log_format;
        }
        if !matches!(other.log_output, LogOutput::Stderr) {
            self.log_output = other.log_output;
        }
        if !matches!(other.color, ColorIntent::Auto) {
            self.color = other.color;
        }

        self
    }

    /// Validate the final configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.config.as_os_str().is_empty() {
            return Err(ConfigError::EmptyKey { key: "config" });
        }
        if self.net_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                key: "net_timeout",
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
