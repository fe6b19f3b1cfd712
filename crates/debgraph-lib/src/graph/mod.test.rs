use super::*;

fn node(id: &str, deps: &[&str]) -> (String, Vec<String>) {
    (
        id.to_string(),
        deps.iter().map(|d| d.to_string()).collect(),
    )
}

#[test]
fn test_new_graph_is_empty() {
    let graph = PackageGraph::new();
    assert!(graph.is_empty());
    assert_eq!(graph.len(), 0);
    assert!(!graph.contains("anything"));
}

#[test]
fn test_lookup_returns_declared_order() {
    let graph: PackageGraph = [node("a", &["c", "b"])].into_iter().collect();
    assert_eq!(
        graph.dependencies("a"),
        Some(["c".to_string(), "b".to_string()].as_slice())
    );
    assert_eq!(graph.dependencies("b"), None);
}

#[test]
fn test_duplicate_node_last_entry_wins() {
    let graph: PackageGraph = [node("a-1", &["x"]), node("a-1", &["y", "z"])]
        .into_iter()
        .collect();
    assert_eq!(graph.len(), 1);
    assert_eq!(graph.dependencies("a-1").unwrap().len(), 2);
}

#[test]
fn test_empty_dependency_list_is_still_a_node() {
    let graph: PackageGraph = [node("leaf", &[])].into_iter().collect();
    assert!(graph.contains("leaf"));
    assert!(graph.dependencies("leaf").unwrap().is_empty());
}

#[test]
fn test_exclusion_is_literal_substring() {
    let exclusion = Exclusion::new("dev");
    assert!(exclusion.matches("libfoo-dev"));
    assert!(exclusion.matches("devscripts"));
    assert!(!exclusion.matches("libfoo"));

    // Regex metacharacters have no special meaning
    let exclusion = Exclusion::new("lib.*");
    assert!(!exclusion.matches("libfoo"));
    assert!(exclusion.matches("weird-lib.*-name"));
}

#[test]
fn test_empty_exclusion_matches_nothing() {
    let exclusion = Exclusion::none();
    assert!(!exclusion.matches("a"));
    assert!(!exclusion.matches(""));
    assert_eq!(exclusion, Exclusion::new(""));
}
