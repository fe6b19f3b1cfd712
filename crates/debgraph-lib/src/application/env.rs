//! Standard environment variables for color and CI detection

use crate::primitives::{ColorIntent, ConfigError};
use serde::Deserialize;

/// Environment variables that affect application behavior
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentConfig {
    /// NO_COLOR environment variable (any value = disable color)
    pub no_color: Option<String>,
    /// FORCE_COLOR environment variable (0/false = disable, 1/2/3/true = enable)
    pub force_color: Option<String>,
    /// CLICOLOR environment variable (0 = disable color)
    pub clicolor: Option<String>,
    /// CI environment variable (any value = CI mode)
    pub ci: Option<String>,
}

impl EnvironmentConfig {
    /// Load environment configuration from the current process environment
    pub fn load() -> Result<Self, ConfigError> {
        envy::from_env().map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Load from explicit `(NAME, value)` pairs
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        envy::from_iter(vars).map_err(|e| ConfigError::EnvironmentParsingFailed { source: e })
    }

    /// Apply environment variables to color configuration
    ///
    /// Precedence: CI > FORCE_COLOR > NO_COLOR > CLICOLOR
    pub fn apply_color_config(&self, mut color: ColorIntent) -> ColorIntent {
        if self.ci.is_some() {
            return ColorIntent::Never;
        }

        if self.clicolor.as_deref() == Some("0") {
            color = ColorIntent::Never;
        }

        if self.no_color.as_deref().is_some_and(|v| !v.is_empty()) {
            color = ColorIntent::Never;
        }

        if let Some(force_color) = &self.force_color {
            match force_color.as_str() {
                "0" | "false" => color = ColorIntent::Never,
                "1" | "2" | "3" | "true" => color = ColorIntent::Always,
                _ => {} // Invalid values ignored
            }
        }

        color
    }
}

#[cfg(test)]
mod tests {
    include!("env.test.rs");
}
