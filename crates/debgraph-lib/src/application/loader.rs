//! Configuration loading
//!
//! Coordinates `.env` files, standard environment variables and parsed CLI
//! arguments into one validated [`AppConfig`].

use crate::primitives::ConfigError;
use tracing::trace;

use super::{config::AppConfig, env::EnvironmentConfig};

/// Env files read in order; variables already set are never overwritten
const ENV_FILES: [&str; 2] = [".env.local", ".env"];

impl AppConfig {
    /// Load `.env.local` and `.env` into the process environment if present
    pub fn load_env_files() -> Result<(), ConfigError> {
        for env_file in ENV_FILES {
            match dotenvy::from_filename(env_file) {
                Ok(path) => trace!(path = %path.display(), "Loaded env file"),
                Err(e) if e.not_found() => {}
                Err(e) => {
                    return Err(ConfigError::EnvFileError {
                        file: env_file.to_string(),
                        source: e,
                    });
                }
            }
        }

        Ok(())
    }

    /// Resolve parsed CLI settings against defaults and the environment
    ///
    /// Standard color variables adjust the default intent, explicit CLI (or
    /// `DEBGRAPH_*`) values then take precedence.
    pub fn resolve(cli: AppConfig, env: &EnvironmentConfig) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        config.color = env.apply_color_config(config.color);

        config = config.merge_with(cli);

        config.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    include!("loader.test.rs");
}
