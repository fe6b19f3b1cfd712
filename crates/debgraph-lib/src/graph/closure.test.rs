// Tests for transitive closure construction

use super::*;

// ============================================================================
// Test Utilities
// ============================================================================

fn graph(edges: &[(&str, &[&str])]) -> PackageGraph {
    edges
        .iter()
        .map(|(node, deps)| {
            (
                node.to_string(),
                deps.iter().map(|d| d.to_string()).collect(),
            )
        })
        .collect()
}

fn reachable_from(closure: &ClosureGraph, root: &str) -> HashSet<String> {
    let mut seen = HashSet::from([root.to_string()]);
    let mut queue = VecDeque::from([root.to_string()]);
    while let Some(node) = queue.pop_front() {
        for dep in closure.dependencies(&node).unwrap_or_default() {
            if seen.insert(dep.clone()) {
                queue.push_back(dep.clone());
            }
        }
    }
    seen
}

fn deps(closure: &ClosureGraph, node: &str) -> Vec<String> {
    closure
        .dependencies(node)
        .unwrap_or_else(|| panic!("{node} should be in the closure"))
        .to_vec()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Basic Closure Shapes
// ============================================================================

#[test]
fn test_closure_of_diamond() {
    let full = graph(&[("a", &["b", "c"]), ("b", &[]), ("c", &["b"])]);

    let closure = build_closure("a", &full, &Exclusion::none()).unwrap();

    assert_eq!(closure.len(), 3);
    assert_eq!(deps(&closure, "a"), strings(&["b", "c"]));
    assert!(deps(&closure, "b").is_empty());
    assert_eq!(deps(&closure, "c"), strings(&["b"]));
    assert_eq!(closure.edge_count(), 3);
}

#[test]
fn test_entries_follow_breadth_first_discovery() {
    let full = graph(&[
        ("root", &["x", "y"]),
        ("x", &["z"]),
        ("y", &[]),
        ("z", &[]),
    ]);

    let closure = build_closure("root", &full, &Exclusion::none()).unwrap();
    let order: Vec<&str> = closure.entries().iter().map(|e| e.node.as_str()).collect();

    assert_eq!(order, vec!["root", "x", "y", "z"]);
}

#[test]
fn test_unreachable_nodes_are_left_out() {
    let full = graph(&[("a", &["b"]), ("b", &[]), ("island", &["a"])]);

    let closure = build_closure("a", &full, &Exclusion::none()).unwrap();

    assert!(!closure.contains("island"));
    assert_eq!(closure.len(), 2);
}

// ============================================================================
// Unresolved Leaves
// ============================================================================

#[test]
fn test_undefined_dependency_becomes_unresolved_leaf() {
    let full = graph(&[("a", &["libmissing", "b"]), ("b", &[])]);

    let closure = build_closure("a", &full, &Exclusion::none()).unwrap();

    let entry = closure.get("libmissing").unwrap();
    assert!(entry.dependencies.is_empty());
    assert!(!entry.resolved);
    assert!(closure.get("b").unwrap().resolved);
    assert_eq!(closure.unresolved_count(), 1);
}

#[test]
fn test_root_absent_from_graph_is_single_leaf() {
    let full = graph(&[("a", &[])]);

    let closure = build_closure("ghost", &full, &Exclusion::none()).unwrap();

    assert_eq!(closure.len(), 1);
    assert!(deps(&closure, "ghost").is_empty());
    assert!(!closure.get("ghost").unwrap().resolved);
}

// ============================================================================
// Exclusion Filtering
// ============================================================================

#[test]
fn test_excluded_dependency_is_dropped_with_its_subtree() {
    let full = graph(&[("a", &["b", "c"]), ("b", &[]), ("c", &["d"]), ("d", &[])]);

    let closure = build_closure("a", &full, &Exclusion::new("c")).unwrap();

    assert_eq!(deps(&closure, "a"), strings(&["b"]));
    assert!(closure.contains("b"));
    assert!(!closure.contains("c"));
    assert!(!closure.contains("d"), "d is only reachable through c");
}

#[test]
fn test_excluded_node_never_has_outgoing_edges() {
    let full = graph(&[
        ("app", &["libx-dev", "liby"]),
        ("libx-dev", &["liby", "libz"]),
        ("liby", &["libx-dev"]),
        ("libz", &[]),
    ]);

    let closure = build_closure("app", &full, &Exclusion::new("dev")).unwrap();

    for entry in closure.entries() {
        assert!(!entry.node.contains("dev"));
        assert!(entry.dependencies.iter().all(|d| !d.contains("dev")));
    }
    assert!(!closure.contains("libz"));
}

#[test]
fn test_excluded_root_is_pruned() {
    let full = graph(&[("tool-dbg", &["a"]), ("a", &[])]);

    let closure = build_closure("tool-dbg", &full, &Exclusion::new("dbg")).unwrap();

    assert!(closure.is_empty());
}

#[test]
fn test_exclusion_breaks_cycle() {
    let full = graph(&[("a", &["b"]), ("b", &["a-helper", "c"]), ("a-helper", &["a"]), ("c", &[])]);

    let closure = build_closure("a", &full, &Exclusion::new("helper")).unwrap();

    assert_eq!(deps(&closure, "b"), strings(&["c"]));
}

// ============================================================================
// Cycle Detection
// ============================================================================

#[test]
fn test_two_node_cycle_is_rejected() {
    let full = graph(&[("a", &["b"]), ("b", &["a"])]);

    let err = build_closure("a", &full, &Exclusion::none()).unwrap_err();

    let edge = (err.from.as_str(), err.to.as_str());
    assert!(
        edge == ("a", "b") || edge == ("b", "a"),
        "unexpected edge {edge:?}"
    );
}

#[test]
fn test_self_loop_is_rejected() {
    let full = graph(&[("a", &["a"])]);

    let err = build_closure("a", &full, &Exclusion::none()).unwrap_err();

    assert_eq!(err.from, "a");
    assert_eq!(err.to, "a");
}

#[test]
fn test_deep_cycle_reports_closing_edge() {
    let full = graph(&[
        ("a", &["b"]),
        ("b", &["c"]),
        ("c", &["d"]),
        ("d", &["b"]),
    ]);

    let err = build_closure("a", &full, &Exclusion::none()).unwrap_err();

    assert_eq!(err.from, "d");
    assert_eq!(err.to, "b");
}

#[test]
fn test_shared_dependency_is_not_a_cycle() {
    // Several parents pointing at the same leaves, reached at different depths
    let full = graph(&[
        ("a", &["b", "c", "d"]),
        ("b", &["d"]),
        ("c", &["b", "d"]),
        ("d", &[]),
    ]);

    assert!(build_closure("a", &full, &Exclusion::none()).is_ok());
}

#[test]
fn test_cycle_outside_reach_is_ignored() {
    let full = graph(&[("a", &["b"]), ("b", &[]), ("x", &["y"]), ("y", &["x"])]);

    assert!(build_closure("a", &full, &Exclusion::none()).is_ok());
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_every_node_is_reachable_from_root() {
    let full = graph(&[
        ("a", &["b", "c", "gone"]),
        ("b", &["e"]),
        ("c", &["e", "f"]),
        ("e", &[]),
        ("f", &["b"]),
        ("unrelated", &["a"]),
    ]);

    let closure = build_closure("a", &full, &Exclusion::none()).unwrap();
    let reachable = reachable_from(&closure, "a");

    for entry in closure.entries() {
        assert!(
            reachable.contains(&entry.node),
            "{} not reachable from root",
            entry.node
        );
    }
}

#[test]
fn test_rebuilding_is_idempotent() {
    let full = graph(&[("a", &["b", "c"]), ("b", &["c", "x"]), ("c", &[])]);
    let exclusion = Exclusion::new("x");

    let first = build_closure("a", &full, &exclusion).unwrap();
    let second = build_closure("a", &full, &exclusion).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_dense_dag_closure_scales_linearly() {
    // n{i} depends on every n{j} with j > i
    let size = 400;
    let full: PackageGraph = (0..size)
        .map(|i| {
            let deps = ((i + 1)..size).map(|j| format!("n{j}")).collect();
            (format!("n{i}"), deps)
        })
        .collect();

    let started = std::time::Instant::now();
    let closure = build_closure("n0", &full, &Exclusion::none()).unwrap();
    let elapsed = started.elapsed();

    assert_eq!(closure.len(), size);
    assert_eq!(closure.edge_count(), size * (size - 1) / 2);
    assert!(
        elapsed < std::time::Duration::from_secs(5),
        "closure over a dense DAG took {elapsed:?}"
    );
}

#[test]
fn test_back_edge_in_dense_graph_is_reported() {
    let size = 200;
    let mut full: PackageGraph = (0..size)
        .map(|i| {
            let deps = ((i + 1)..size).map(|j| format!("n{j}")).collect();
            (format!("n{i}"), deps)
        })
        .collect();
    full.insert(format!("n{}", size - 1), vec!["n100".to_string()]);

    let err = build_closure("n0", &full, &Exclusion::none()).unwrap_err();

    let index = |id: &str| id[1..].parse::<usize>().unwrap();
    assert!(index(&err.from) >= 100 && index(&err.to) >= 100, "{err:?}");
}
