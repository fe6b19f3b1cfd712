//! Hermetic test environment for end-to-end runs
//!
//! Every [`TestEnvironment`] owns a temporary directory holding graph
//! configurations, adjacency files and gzipped repository mirrors, so runs
//! never touch the working directory or the network.

use anyhow::{Context, Result};
use debgraph_lib::application::run;
use debgraph_lib::deb::GraphConfig;
use debgraph_lib::graph::Report;
use debgraph_lib::networking::NetworkingConfig;
use debgraph_lib::primitives::DebgraphError;
use debgraph_lib::testing::gzip;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated directory with helpers to lay out debgraph inputs
pub struct TestEnvironment {
    /// Temporary directory (removed on drop)
    pub temp_dir: TempDir,
    /// Path to the environment root
    pub root_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let root_path = temp_dir.path().to_path_buf();
        Ok(Self {
            temp_dir,
            root_path,
        })
    }

    pub fn path(&self) -> &Path {
        &self.root_path
    }

    /// Write an adjacency list file and return its path
    pub fn write_graph(&self, name: &str, adjacency: &str) -> Result<PathBuf> {
        let path = self.root_path.join("graphs").join(name);
        write(&path, adjacency.as_bytes())?;
        Ok(path)
    }

    /// Lay out `<mirror>/dists/<dist>/<component>/binary-<arch>/Packages.gz`
    ///
    /// Returns the mirror root.
    pub fn write_mirror(
        &self,
        mirror: &str,
        distribution: &str,
        component: &str,
        architecture: &str,
        index: &str,
    ) -> Result<PathBuf> {
        let root = self.root_path.join(mirror);
        let path = root
            .join("dists")
            .join(distribution)
            .join(component)
            .join(format!("binary-{architecture}"))
            .join("Packages.gz");
        write(&path, &gzip(index)?)?;
        Ok(root)
    }

    /// Mirror using the default noble/main/amd64 coordinates
    pub fn write_noble_mirror(&self, index: &str) -> Result<PathBuf> {
        self.write_mirror("mirror", "noble", "main", "amd64", index)
    }

    /// Write a graph configuration file and return its path
    pub fn write_config(&self, name: &str, config: &GraphConfigBuilder) -> Result<PathBuf> {
        let path = self.root_path.join(name);
        write(&path, config.to_toml().as_bytes())?;
        Ok(path)
    }

    /// Write, load and validate a graph configuration
    pub fn load_config(&self, config: &GraphConfigBuilder) -> Result<GraphConfig> {
        let path = self.write_config("config.toml", config)?;
        GraphConfig::load(&path).with_context(|| format!("loading {}", path.display()))
    }

    /// Load a configuration and run it with a short network timeout
    pub async fn run(&self, config: &GraphConfigBuilder) -> Result<Result<Report, DebgraphError>> {
        let config = self.load_config(config)?;
        Ok(run(&config, &NetworkingConfig { timeout_seconds: 5 }).await)
    }
}

fn write(path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content).with_context(|| format!("writing {}", path.display()))
}

/// Graph configuration file contents, built key by key
#[derive(Debug, Clone, Default)]
pub struct GraphConfigBuilder {
    entries: Vec<(String, String)>,
}

impl GraphConfigBuilder {
    /// Test mode over an adjacency file, empty filter
    pub fn test_mode(package: &str, graph: &Path) -> Self {
        Self::default()
            .string("package", package)
            .string("url_or_path", &graph.display().to_string())
            .raw("test_mode", "true")
            .string("filter_substring", "")
    }

    /// Repository mode over an HTTP base or a mirror directory, empty filter
    pub fn repository(package: &str, version: &str, base: &str) -> Self {
        Self::default()
            .string("package", package)
            .string("version", version)
            .string("url_or_path", base)
            .raw("test_mode", "false")
            .string("filter_substring", "")
    }

    pub fn filter(self, substring: &str) -> Self {
        self.string("filter_substring", substring)
    }

    pub fn show_load_order(self) -> Self {
        self.raw("show_load_order", "true")
    }

    /// Set a key to a TOML string value
    pub fn string(self, key: &str, value: &str) -> Self {
        let quoted = serde_json::Value::String(value.to_string()).to_string();
        self.raw(key, &quoted)
    }

    /// Set a key to a literal TOML value, replacing any earlier value
    pub fn raw(mut self, key: &str, value: &str) -> Self {
        self.entries.retain(|(k, _)| k != key);
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    /// Drop a key entirely
    pub fn without(mut self, key: &str) -> Self {
        self.entries.retain(|(k, _)| k != key);
        self
    }

    pub fn to_toml(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| format!("{key} = {value}\n"))
            .collect()
    }
}
