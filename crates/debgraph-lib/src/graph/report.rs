//! Printable renderings of a closure and its load order

use petgraph::dot::{Config, Dot};
use petgraph::graph::{DiGraph, NodeIndex};
use serde_json::json;
use std::collections::HashMap;

use super::ClosureGraph;
use crate::primitives::ReportFormat;

/// Result of one run, ready to be rendered
#[derive(Debug, Clone)]
pub struct Report {
    pub root: String,
    pub closure: ClosureGraph,
    pub load_order: Option<Vec<String>>,
}

impl Report {
    pub fn render(&self, format: ReportFormat) -> String {
        match format {
            ReportFormat::Text => self.render_text(),
            ReportFormat::Json => self.render_json(),
            ReportFormat::Dot => self.render_dot(),
        }
    }

    /// `node -> [deps]` lines in discovery order, then a 1-indexed load order
    pub fn render_text(&self) -> String {
        let mut out = format!("Transitive dependency graph for {}:\n", self.root);
        for entry in self.closure.entries() {
            out.push_str(&format!(
                "{} -> [{}]\n",
                entry.node,
                entry.dependencies.join(", ")
            ));
        }

        if let Some(order) = &self.load_order {
            out.push_str("\nLoad order:\n");
            for (i, node) in order.iter().enumerate() {
                out.push_str(&format!("{}. {}\n", i + 1, node));
            }
        }

        out
    }

    pub fn render_json(&self) -> String {
        let closure: Vec<_> = self
            .closure
            .entries()
            .iter()
            .map(|entry| {
                json!({
                    "node": entry.node,
                    "dependencies": entry.dependencies,
                    "unresolved": !entry.resolved,
                })
            })
            .collect();

        let document = json!({
            "root": self.root,
            "closure": closure,
            "load_order": self.load_order,
        });

        format!("{document:#}\n")
    }

    /// Graphviz digraph with edges pointing from dependent to dependency
    pub fn render_dot(&self) -> String {
        let mut graph: DiGraph<&str, &str> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for entry in self.closure.entries() {
            let idx = graph.add_node(entry.node.as_str());
            indices.insert(entry.node.as_str(), idx);
        }
        for entry in self.closure.entries() {
            for dep in &entry.dependencies {
                if let Some(&to) = indices.get(dep.as_str()) {
                    graph.add_edge(indices[entry.node.as_str()], to, "");
                }
            }
        }

        format!("{}", Dot::with_config(&graph, &[Config::EdgeNoLabel]))
    }
}

#[cfg(test)]
mod tests {
    include!("report.test.rs");
}
