//! Plain adjacency list format used for test graphs
//!
//! Each line reads `node: dep1 dep2`. Lines without a colon are ignored and
//! an empty right-hand side declares a leaf. No exclusion is applied here,
//! pruning happens while the closure is built.

use tracing::{debug, trace};

use crate::graph::PackageGraph;

pub fn parse_adjacency(text: &str) -> PackageGraph {
    let mut graph = PackageGraph::new();

    for (number, line) in text.lines().enumerate() {
        let Some((node, deps)) = line.split_once(':') else {
            if !line.trim().is_empty() {
                trace!(line = number + 1, "Ignoring line without ':'");
            }
            continue;
        };

        let dependencies = deps.split_whitespace().map(String::from).collect();
        graph.insert(node.trim().to_string(), dependencies);
    }

    debug!(nodes = graph.len(), "Parsed adjacency list");
    graph
}

#[cfg(test)]
mod tests {
    include!("adjacency.test.rs");
}
