//! Package dependency graphs
//!
//! [`PackageGraph`] is the full graph parsed from an index or an adjacency
//! file. [`closure::build_closure`] walks it from a root into a
//! [`ClosureGraph`], and [`load_order::compute_load_order`] orders that
//! closure dependencies-first.

pub mod closure;
pub mod load_order;
pub mod report;

pub use closure::{ClosureEntry, ClosureGraph, build_closure};
pub use load_order::compute_load_order;
pub use report::Report;

use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// A dependency cycle, identified by one of its edges
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Dependency cycle detected: {from} -> {to}")]
pub struct CycleError {
    pub from: String,
    pub to: String,
}

/// Literal substring used to prune nodes and edges
///
/// An empty substring excludes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Exclusion(String);

impl Exclusion {
    pub fn new(substring: impl Into<String>) -> Self {
        Self(substring.into())
    }

    /// Exclusion that never matches
    pub fn none() -> Self {
        Self::default()
    }

    pub fn matches(&self, id: &str) -> bool {
        !self.0.is_empty() && id.contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Full dependency graph: node identifier to declared dependency identifiers
///
/// Dependencies are not required to exist as nodes. Once built the graph is
/// only read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageGraph {
    nodes: HashMap<String, Vec<String>>,
}

impl PackageGraph {
    /// Create a new empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a node and its dependencies; a repeated identifier replaces the earlier entry
    pub fn insert(&mut self, node: String, dependencies: Vec<String>) {
        if let Some(previous) = self.nodes.insert(node, dependencies) {
            debug!(
                replaced_dependencies = previous.len(),
                "Duplicate node identifier, keeping the later entry"
            );
        }
    }

    /// Declared dependencies of a node, `None` if the node is unknown
    pub fn dependencies(&self, node: &str) -> Option<&[String]> {
        self.nodes.get(node).map(Vec::as_slice)
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for PackageGraph {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (node, dependencies) in iter {
            graph.insert(node, dependencies);
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
