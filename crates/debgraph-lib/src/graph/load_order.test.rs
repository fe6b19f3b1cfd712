// Tests for load order computation

use super::*;
use crate::graph::{ClosureEntry, Exclusion, PackageGraph, build_closure};

fn closure_of(edges: &[(&str, &[&str])]) -> ClosureGraph {
    edges
        .iter()
        .map(|(node, deps)| ClosureEntry {
            node: node.to_string(),
            dependencies: deps.iter().map(|d| d.to_string()).collect(),
            resolved: true,
        })
        .collect()
}

fn position(order: &[String], node: &str) -> usize {
    order
        .iter()
        .position(|n| n == node)
        .unwrap_or_else(|| panic!("{node} missing from load order"))
}

/// Every edge A -> B must place B before A
fn assert_dependencies_first(closure: &ClosureGraph, order: &[String]) {
    for entry in closure.entries() {
        for dep in &entry.dependencies {
            assert!(
                position(order, dep) < position(order, &entry.node),
                "{dep} should load before {}",
                entry.node
            );
        }
    }
}

#[test]
fn test_diamond_loads_shared_leaf_first() {
    let closure = closure_of(&[("a", &["b", "c"]), ("b", &[]), ("c", &["b"])]);

    let order = compute_load_order("a", &closure).unwrap();

    assert_eq!(order, vec!["b", "c", "a"]);
}

#[test]
fn test_root_is_last_and_every_node_appears_once() {
    let closure = closure_of(&[
        ("app", &["net", "ui"]),
        ("net", &["core", "tls"]),
        ("ui", &["core"]),
        ("core", &[]),
        ("tls", &["core"]),
    ]);

    let order = compute_load_order("app", &closure).unwrap();

    assert_eq!(order.len(), closure.len());
    assert_eq!(order.last().map(String::as_str), Some("app"));
    assert_dependencies_first(&closure, &order);
}

#[test]
fn test_order_over_built_closure() {
    let full: PackageGraph = [
        ("a", vec!["b", "c", "missing"]),
        ("b", vec!["d"]),
        ("c", vec!["d", "b"]),
        ("d", vec![]),
    ]
    .into_iter()
    .map(|(n, d)| (n.to_string(), d.into_iter().map(String::from).collect()))
    .collect();

    let closure = build_closure("a", &full, &Exclusion::none()).unwrap();
    let order = compute_load_order("a", &closure).unwrap();

    assert_eq!(order.len(), 5);
    assert_dependencies_first(&closure, &order);
}

#[test]
fn test_two_node_cycle_is_rejected() {
    let closure = closure_of(&[("a", &["b"]), ("b", &["a"])]);

    let err = compute_load_order("a", &closure).unwrap_err();

    assert_eq!(err.from, "b");
    assert_eq!(err.to, "a");
}

#[test]
fn test_self_loop_is_rejected() {
    let closure = closure_of(&[("a", &["a"])]);

    let err = compute_load_order("a", &closure).unwrap_err();

    assert_eq!((err.from.as_str(), err.to.as_str()), ("a", "a"));
}

#[test]
fn test_cycle_below_root_names_back_edge() {
    let closure = closure_of(&[
        ("root", &["x"]),
        ("x", &["y"]),
        ("y", &["z"]),
        ("z", &["x"]),
    ]);

    let err = compute_load_order("root", &closure).unwrap_err();

    assert_eq!(err.from, "z");
    assert_eq!(err.to, "x");
}

#[test]
fn test_pruned_root_gives_empty_order() {
    let closure = ClosureGraph::default();

    assert!(compute_load_order("anything", &closure).unwrap().is_empty());
}

#[test]
fn test_single_leaf_root() {
    let closure = closure_of(&[("solo", &[])]);

    assert_eq!(compute_load_order("solo", &closure).unwrap(), vec!["solo"]);
}
