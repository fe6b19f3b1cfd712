//! Structured logging on top of `tracing`
//!
//! A registry with an `EnvFilter`, one formatting layer picked by output
//! stream and format, and an indicatif layer that renders spans opened with
//! [`progress_span!`](crate::progress_span) as spinners.

use crate::primitives::*;
use std::sync::OnceLock;
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Global logger instance, set once
static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Crates whose logs are capped at warn unless `RUST_LOG` says otherwise
const QUIET_CRATES: &[&str] = &["hyper", "hyper_util", "reqwest", "h2", "tokio", "mio", "want"];

#[derive(Debug)]
pub struct Logger {
    config: LoggerConfig,
}

impl Logger {
    /// Install the global subscriber
    pub fn init(config: LoggerConfig) -> Result<&'static Self, LoggerError> {
        if GLOBAL_LOGGER.get().is_some() {
            return Err(LoggerError::AlreadyInitialized);
        }

        let indicatif_layer = IndicatifLayer::new();

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(filter_directives(config.level)));

        let ansi = config.ansi;
        let fmt_layer = match (config.output, config.format) {
            (LogOutput::Stderr, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stderr, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stderr_writer())
                .with_ansi(ansi)
                .pretty()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Text) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(ansi)
                .compact()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Json) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(false)
                .json()
                .boxed(),
            (LogOutput::Stdout, LogFormat::Yaml) => fmt::layer()
                .with_writer(indicatif_layer.get_stdout_writer())
                .with_ansi(ansi)
                .pretty()
                .boxed(),
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(indicatif_layer)
            .try_init()
            .map_err(|e| LoggerError::InitializationFailed {
                reason: e.to_string(),
            })?;

        let logger = GLOBAL_LOGGER.get_or_init(|| Logger {
            config: config.clone(),
        });

        tracing::debug!(
            level = ?config.level,
            format = ?config.format,
            output = ?config.output,
            ansi = config.ansi,
            "Logger initialized"
        );

        Ok(logger)
    }

    pub fn global() -> Option<&'static Self> {
        GLOBAL_LOGGER.get()
    }

    pub fn is_initialized() -> bool {
        GLOBAL_LOGGER.get().is_some()
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }
}

/// Default filter when `RUST_LOG` is unset: debgraph at `level`, HTTP plumbing at warn
pub fn filter_directives(level: LogLevel) -> String {
    let level = level.as_directive();
    let mut directives = vec![format!("debgraph={level}"), format!("debgraph_lib={level}")];
    directives.extend(QUIET_CRATES.iter().map(|krate| format!("{krate}=warn")));
    directives.push(level.to_string());
    directives.join(",")
}

/// Create a span rendered as a progress spinner
#[macro_export]
macro_rules! progress_span {
    ($operation:expr) => {
        tracing::info_span!("progress", operation = $operation)
    };
    ($operation:expr, $($fields:tt)+) => {
        tracing::info_span!("progress", operation = $operation, $($fields)+)
    };
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
