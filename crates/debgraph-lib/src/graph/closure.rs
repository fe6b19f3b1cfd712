//! Transitive closure construction with cycle detection
//!
//! The closure is built breadth-first from a root. Nodes missing from the
//! full graph become unresolved leaves, nodes matching the exclusion are
//! pruned, and every edge that lands on an already discovered node is kept
//! aside. Once the worklist drains, each of those edges `u -> v` closes a
//! cycle exactly when `u` and `v` share a strongly connected component of
//! the closure.

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::{HashMap, HashSet, VecDeque};
use tracing::{debug, trace};

use super::{CycleError, Exclusion, PackageGraph};

/// One node of a closure and its filtered direct dependencies
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClosureEntry {
    pub node: String,
    pub dependencies: Vec<String>,
    /// `false` when the node was referenced but never defined
    pub resolved: bool,
}

/// Subgraph reachable from a root, in breadth-first discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClosureGraph {
    entries: Vec<ClosureEntry>,
    index: HashMap<String, usize>,
}

impl ClosureGraph {
    fn push(&mut self, node: String, dependencies: Vec<String>, resolved: bool) {
        self.index.insert(node.clone(), self.entries.len());
        self.entries.push(ClosureEntry {
            node,
            dependencies,
            resolved,
        });
    }

    pub fn entries(&self) -> &[ClosureEntry] {
        &self.entries
    }

    pub fn get(&self, node: &str) -> Option<&ClosureEntry> {
        self.index.get(node).map(|&i| &self.entries[i])
    }

    pub fn dependencies(&self, node: &str) -> Option<&[String]> {
        self.get(node).map(|entry| entry.dependencies.as_slice())
    }

    pub fn contains(&self, node: &str) -> bool {
        self.index.contains_key(node)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.entries.iter().map(|e| e.dependencies.len()).sum()
    }

    /// Number of referenced-but-undefined nodes
    pub fn unresolved_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.resolved).count()
    }
}

impl FromIterator<ClosureEntry> for ClosureGraph {
    fn from_iter<I: IntoIterator<Item = ClosureEntry>>(iter: I) -> Self {
        let mut closure = Self::default();
        for entry in iter {
            closure.push(entry.node, entry.dependencies, entry.resolved);
        }
        closure
    }
}

/// Build the closure of `root` over `graph`, pruning identifiers matched by `exclusion`
///
/// A root absent from `graph` yields `{root: []}`. Callers are expected to
/// have checked root membership beforehand.
pub fn build_closure(
    root: &str,
    graph: &PackageGraph,
    exclusion: &Exclusion,
) -> Result<ClosureGraph, CycleError> {
    debug!(root, exclude = exclusion.as_str(), "Building transitive closure");

    let mut closure = ClosureGraph::default();
    let mut visited: HashSet<String> = HashSet::new();
    let mut queued: HashSet<String> = HashSet::from([root.to_string()]);
    let mut worklist: VecDeque<String> = VecDeque::from([root.to_string()]);
    let mut reencounters: Vec<(String, String)> = Vec::new();

    while let Some(current) = worklist.pop_front() {
        if visited.contains(&current) {
            continue;
        }
        queued.remove(&current);
        visited.insert(current.clone());

        let Some(declared) = graph.dependencies(&current) else {
            trace!(node = %current, "Unresolved dependency recorded as leaf");
            closure.push(current, Vec::new(), false);
            continue;
        };

        if exclusion.matches(&current) {
            debug!(node = %current, "Node matches exclusion, not expanding");
            continue;
        }

        let filtered: Vec<String> = declared
            .iter()
            .filter(|dep| !exclusion.matches(dep))
            .cloned()
            .collect();

        for dep in &filtered {
            if visited.contains(dep) || queued.contains(dep) {
                reencounters.push((current.clone(), dep.clone()));
            } else {
                queued.insert(dep.clone());
                worklist.push_back(dep.clone());
            }
        }

        trace!(node = %current, dependencies = filtered.len(), "Expanded node");
        closure.push(current, filtered, true);
    }

    if let Some((from, to)) = cyclic_edge(&closure, reencounters) {
        debug!(%from, %to, "Re-encountered edge closes a cycle");
        return Err(CycleError { from, to });
    }

    debug!(
        nodes = closure.len(),
        edges = closure.edge_count(),
        "Closure complete"
    );
    Ok(closure)
}

/// First of `candidates` whose endpoints share a strongly connected component
fn cyclic_edge(
    closure: &ClosureGraph,
    candidates: Vec<(String, String)>,
) -> Option<(String, String)> {
    if candidates.is_empty() {
        return None;
    }

    let mut graph: DiGraph<&str, ()> = DiGraph::with_capacity(closure.len(), closure.edge_count());
    let nodes: Vec<NodeIndex> = closure
        .entries()
        .iter()
        .map(|entry| graph.add_node(entry.node.as_str()))
        .collect();
    for (i, entry) in closure.entries().iter().enumerate() {
        for dep in &entry.dependencies {
            if let Some(&j) = closure.index.get(dep) {
                graph.add_edge(nodes[i], nodes[j], ());
            }
        }
    }

    let mut component: HashMap<&str, usize> = HashMap::with_capacity(closure.len());
    for (id, scc) in tarjan_scc(&graph).into_iter().enumerate() {
        for node in scc {
            component.insert(graph[node], id);
        }
    }

    candidates.into_iter().find(|(from, to)| {
        match (component.get(from.as_str()), component.get(to.as_str())) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    include!("closure.test.rs");
}
