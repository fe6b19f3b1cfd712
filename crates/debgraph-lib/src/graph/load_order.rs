//! Dependencies-first load order over a closure

use std::collections::HashMap;
use tracing::{debug, trace};

use super::{ClosureGraph, CycleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Order the closure so every dependency precedes its dependents
///
/// Index 0 is a leaf and the root comes last. Cycles are detected here
/// independently of [`super::build_closure`]. A root that is not part of
/// the closure (pruned by the exclusion) yields an empty order.
pub fn compute_load_order(root: &str, closure: &ClosureGraph) -> Result<Vec<String>, CycleError> {
    if !closure.contains(root) {
        debug!(root, "Root not in closure, load order is empty");
        return Ok(Vec::new());
    }

    let mut marks: HashMap<String, Mark> = HashMap::with_capacity(closure.len());
    let mut order = Vec::with_capacity(closure.len());
    visit(root, closure, &mut marks, &mut order)?;

    debug!(nodes = order.len(), "Load order computed");
    Ok(order)
}

fn visit(
    node: &str,
    closure: &ClosureGraph,
    marks: &mut HashMap<String, Mark>,
    order: &mut Vec<String>,
) -> Result<(), CycleError> {
    marks.insert(node.to_string(), Mark::InProgress);

    for dep in closure.dependencies(node).unwrap_or_default() {
        match marks.get(dep) {
            Some(Mark::InProgress) => {
                return Err(CycleError {
                    from: node.to_string(),
                    to: dep.clone(),
                });
            }
            Some(Mark::Done) => continue,
            None => visit(dep, closure, marks, order)?,
        }
    }

    marks.insert(node.to_string(), Mark::Done);
    trace!(node, position = order.len(), "Appended to load order");
    order.push(node.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    include!("load_order.test.rs");
}
