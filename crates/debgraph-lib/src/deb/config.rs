//! Graph configuration file
//!
//! A TOML document naming the root package, where its graph comes from and
//! which identifiers to prune. Raw keys are deserialized leniently and then
//! validated into a [`GraphConfig`] with a typed [`RunMode`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::graph::Exclusion;
use crate::primitives::{ConfigError, ReportFormat};

/// Default repository coordinates
pub mod defaults {
    pub const DISTRIBUTION: &str = "noble";
    pub const COMPONENT: &str = "main";
    pub const ARCHITECTURE: &str = "amd64";
}

/// Boolean written either as a TOML bool or as a string
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum BoolLike {
    Bool(bool),
    Text(String),
}

impl BoolLike {
    fn resolve(self, key: &'static str) -> Result<bool, ConfigError> {
        match self {
            BoolLike::Bool(value) => Ok(value),
            BoolLike::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ConfigError::InvalidBool { key, value: text }),
            },
        }
    }
}

/// Keys as they appear in the file, before validation
#[derive(Debug, Default, Deserialize)]
struct RawGraphConfig {
    package: Option<String>,
    url_or_path: Option<String>,
    test_mode: Option<BoolLike>,
    version: Option<String>,
    filter_substring: Option<String>,
    show_load_order: Option<BoolLike>,
    distribution: Option<String>,
    component: Option<String>,
    architecture: Option<String>,
    output_format: Option<String>,
}

/// Where the full graph is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Adjacency list file, node identifiers are bare names
    TestGraph { path: PathBuf },
    /// Debian repository, node identifiers are `name-version`
    Repository {
        base: String,
        version: String,
        distribution: String,
        component: String,
        architecture: String,
    },
}

impl RunMode {
    /// Index path relative to the repository base, `None` in test mode
    pub fn index_path(&self) -> Option<String> {
        match self {
            RunMode::TestGraph { .. } => None,
            RunMode::Repository {
                distribution,
                component,
                architecture,
                ..
            } => Some(format!(
                "dists/{distribution}/{component}/binary-{architecture}/Packages.gz"
            )),
        }
    }
}

/// Validated graph configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphConfig {
    pub package: String,
    pub mode: RunMode,
    pub exclusion: Exclusion,
    pub show_load_order: bool,
    pub output_format: ReportFormat,
}

impl GraphConfig {
    /// Read and validate a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let origin = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: origin.clone(),
            source,
        })?;

        Self::from_toml_str(&text, &origin)
    }

    /// Parse and validate configuration text; `origin` names it in errors
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, ConfigError> {
        let raw: RawGraphConfig =
            toml::from_str(text).map_err(|source| ConfigError::TomlParseFailed {
                path: origin.to_string(),
                source,
            })?;

        let config = Self::validate(raw)?;
        debug!(
            package = %config.package,
            mode = ?config.mode,
            exclude = config.exclusion.as_str(),
            "Graph configuration loaded"
        );
        Ok(config)
    }

    fn validate(raw: RawGraphConfig) -> Result<Self, ConfigError> {
        let package = required(raw.package, "package")?;
        let url_or_path = required(raw.url_or_path, "url_or_path")?;
        let test_mode = raw
            .test_mode
            .ok_or(ConfigError::MissingKey { key: "test_mode" })?
            .resolve("test_mode")?;
        let filter_substring = raw.filter_substring.ok_or(ConfigError::MissingKey {
            key: "filter_substring",
        })?;
        let show_load_order = match raw.show_load_order {
            Some(value) => value.resolve("show_load_order")?,
            None => false,
        };
        let output_format = match raw.output_format {
            Some(format) => format.parse::<ReportFormat>()?,
            None => ReportFormat::Text,
        };

        let mode = if test_mode {
            RunMode::TestGraph {
                path: PathBuf::from(url_or_path),
            }
        } else {
            let version = raw
                .version
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::MissingVersion)?;

            RunMode::Repository {
                base: url_or_path.trim_end_matches('/').to_string(),
                version,
                distribution: coordinate(raw.distribution, defaults::DISTRIBUTION),
                component: coordinate(raw.component, defaults::COMPONENT),
                architecture: coordinate(raw.architecture, defaults::ARCHITECTURE),
            }
        };

        Ok(Self {
            package,
            mode,
            exclusion: Exclusion::new(filter_substring),
            show_load_order,
            output_format,
        })
    }

    /// Root node identifier: the bare package in test mode, `package-version` otherwise
    pub fn root(&self) -> String {
        match &self.mode {
            RunMode::TestGraph { .. } => self.package.clone(),
            RunMode::Repository { version, .. } => format!("{}-{}", self.package, version),
        }
    }

    pub fn is_test_mode(&self) -> bool {
        matches!(self.mode, RunMode::TestGraph { .. })
    }
}

fn required(value: Option<String>, key: &'static str) -> Result<String, ConfigError> {
    let value = value.ok_or(ConfigError::MissingKey { key })?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyKey { key });
    }
    Ok(trimmed.to_string())
}

fn coordinate(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    include!("config.test.rs");
}
