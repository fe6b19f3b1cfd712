use super::*;
use crate::graph::ClosureEntry;

fn sample_report(load_order: Option<Vec<String>>) -> Report {
    let closure: ClosureGraph = [
        ("a", vec!["b", "c"], true),
        ("b", vec![], true),
        ("c", vec!["b", "libgone"], true),
        ("libgone", vec![], false),
    ]
    .into_iter()
    .map(|(node, deps, resolved)| ClosureEntry {
        node: node.to_string(),
        dependencies: deps.into_iter().map(String::from).collect(),
        resolved,
    })
    .collect();

    Report {
        root: "a".to_string(),
        closure,
        load_order,
    }
}

#[test]
fn test_text_lists_closure_in_discovery_order() {
    let text = sample_report(None).render(ReportFormat::Text);

    assert_eq!(
        text,
        "Transitive dependency graph for a:\n\
         a -> [b, c]\n\
         b -> []\n\
         c -> [b, libgone]\n\
         libgone -> []\n"
    );
}

#[test]
fn test_text_numbers_load_order_from_one() {
    let order = vec!["b", "libgone", "c", "a"]
        .into_iter()
        .map(String::from)
        .collect();
    let text = sample_report(Some(order)).render_text();

    assert!(text.contains("\nLoad order:\n1. b\n2. libgone\n3. c\n4. a\n"));
}

#[test]
fn test_text_with_load_order_is_exact() {
    let order = vec!["b", "a"].into_iter().map(String::from).collect();
    let mut report = sample_report(Some(order));
    report.closure = report
        .closure
        .entries()
        .iter()
        .filter(|entry| entry.node == "a" || entry.node == "b")
        .cloned()
        .collect();

    assert_eq!(
        report.render_text(),
        "Transitive dependency graph for a:\n\
         a -> [b, c]\n\
         b -> []\n\
         \n\
         Load order:\n\
         1. b\n\
         2. a\n"
    );
}

#[test]
fn test_json_document_shape() {
    let json = sample_report(Some(vec!["b".into(), "a".into()])).render(ReportFormat::Json);
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["root"], "a");
    assert_eq!(value["closure"].as_array().unwrap().len(), 4);
    assert_eq!(value["closure"][0]["node"], "a");
    assert_eq!(value["closure"][0]["dependencies"][1], "c");
    assert_eq!(value["closure"][3]["unresolved"], true);
    assert_eq!(value["load_order"][0], "b");
}

#[test]
fn test_json_without_load_order_is_null() {
    let json = sample_report(None).render_json();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert!(value["load_order"].is_null());
}

#[test]
fn test_dot_contains_nodes_and_edges() {
    let dot = sample_report(None).render(ReportFormat::Dot);

    assert!(dot.starts_with("digraph"));
    assert!(dot.contains("label = \"libgone\""));
    // a is node 0, b is node 1
    assert!(dot.contains("0 -> 1"));
    assert_eq!(dot.matches("->").count(), 4);
}
