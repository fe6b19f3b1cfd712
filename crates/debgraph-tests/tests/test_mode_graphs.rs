//! End-to-end runs over adjacency list files

use anyhow::Result;
use debgraph_lib::graph::{ClosureGraph, build_closure, compute_load_order};
use debgraph_lib::primitives::{DebgraphError, ReportFormat};
use debgraph_lib::{Exclusion, deb::parse_adjacency};
use debgraph_tests::fixtures::{DEEP_CYCLE, DIAMOND, LAYERED, TWO_CYCLE};
use debgraph_tests::{GraphConfigBuilder, TestEnvironment};
use std::collections::{HashSet, VecDeque};

fn nodes(closure: &ClosureGraph) -> Vec<&str> {
    closure.entries().iter().map(|e| e.node.as_str()).collect()
}

fn deps<'a>(closure: &'a ClosureGraph, node: &str) -> Vec<&'a str> {
    closure
        .dependencies(node)
        .unwrap_or_default()
        .iter()
        .map(String::as_str)
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

#[tokio::test]
async fn diamond_closure_and_load_order() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("a", &graph).show_load_order())
        .await??;

    assert_eq!(nodes(&report.closure), vec!["a", "b", "c"]);
    assert_eq!(deps(&report.closure, "a"), vec!["b", "c"]);
    assert_eq!(deps(&report.closure, "b"), Vec::<&str>::new());
    assert_eq!(deps(&report.closure, "c"), vec!["b"]);
    assert_eq!(report.load_order.unwrap(), vec!["b", "c", "a"]);
    Ok(())
}

#[tokio::test]
async fn filter_prunes_node_and_edges() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("a", &graph).filter("c").show_load_order())
        .await??;

    assert_eq!(nodes(&report.closure), vec!["a", "b"]);
    assert_eq!(deps(&report.closure, "a"), vec!["b"]);
    assert_eq!(report.load_order.unwrap(), vec!["b", "a"]);
    Ok(())
}

#[tokio::test]
async fn two_cycle_is_fatal() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("cycle.txt", TWO_CYCLE)?;

    let err = env
        .run(&GraphConfigBuilder::test_mode("a", &graph))
        .await?
        .unwrap_err();

    let DebgraphError::Cycle(cycle) = err else {
        panic!("expected a cycle error, got {err:?}");
    };
    let edge = (cycle.from.as_str(), cycle.to.as_str());
    assert!(edge == ("a", "b") || edge == ("b", "a"), "unexpected edge {edge:?}");
    Ok(())
}

#[test]
fn both_builders_reject_two_cycle_independently() {
    let graph = parse_adjacency(TWO_CYCLE);

    assert!(build_closure("a", &graph, &Exclusion::none()).is_err());

    let cyclic: ClosureGraph = [("a", "b"), ("b", "a")]
        .into_iter()
        .map(|(node, dep)| debgraph_lib::graph::ClosureEntry {
            node: node.to_string(),
            dependencies: vec![dep.to_string()],
            resolved: true,
        })
        .collect();
    assert!(compute_load_order("a", &cyclic).is_err());
}

#[tokio::test]
async fn cycle_below_root_is_found() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("deep.txt", DEEP_CYCLE)?;

    let err = env
        .run(&GraphConfigBuilder::test_mode("root", &graph))
        .await?
        .unwrap_err();

    assert!(matches!(err, DebgraphError::Cycle(ref c) if c.from == "z" && c.to == "x"));
    Ok(())
}

#[tokio::test]
async fn filter_can_break_a_cycle() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("deep.txt", DEEP_CYCLE)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("root", &graph).filter("z").show_load_order())
        .await??;

    assert_eq!(nodes(&report.closure), vec!["root", "x", "y"]);
    assert_eq!(report.load_order.unwrap(), vec!["y", "x", "root"]);
    Ok(())
}

#[tokio::test]
async fn unknown_root_is_reported_before_closure() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let err = env
        .run(&GraphConfigBuilder::test_mode("x", &graph))
        .await?
        .unwrap_err();

    assert!(matches!(err, DebgraphError::RootNotFound { ref root } if root == "x"));
    Ok(())
}

#[tokio::test]
async fn layered_graph_properties() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("layered.txt", LAYERED)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("app", &graph).show_load_order())
        .await??;
    let closure = &report.closure;
    let order = report.load_order.clone().unwrap();

    // orphan is never reached, missing-helper is an unresolved leaf
    assert!(!closure.contains("orphan"));
    let helper = closure.get("missing-helper").unwrap();
    assert!(!helper.resolved);
    assert!(helper.dependencies.is_empty());
    assert_eq!(closure.unresolved_count(), 1);

    // every node is reachable from the root
    let reachable = reachable_from(closure, "app");
    for entry in closure.entries() {
        assert!(reachable.contains(&entry.node), "{} unreachable", entry.node);
    }

    // dependencies come first
    assert_eq!(order.len(), closure.len());
    let index = |n: &str| order.iter().position(|o| o == n).unwrap();
    for entry in closure.entries() {
        for dep in &entry.dependencies {
            assert!(index(dep) < index(&entry.node), "{dep} after {}", entry.node);
        }
    }
    assert_eq!(order.last().unwrap(), "app");
    Ok(())
}

#[tokio::test]
async fn excluded_nodes_never_expand() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("layered.txt", LAYERED)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("app", &graph).filter("core"))
        .await??;

    assert!(!report.closure.contains("core"));
    for entry in report.closure.entries() {
        assert!(!entry.dependencies.iter().any(|d| d.contains("core")));
    }
    // alloc is still reached through log
    assert!(report.closure.contains("alloc"));
    Ok(())
}

#[tokio::test]
async fn repeated_runs_are_identical() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("layered.txt", LAYERED)?;
    let config = GraphConfigBuilder::test_mode("app", &graph).show_load_order();

    let first = env.run(&config).await??;
    let second = env.run(&config).await??;

    assert_eq!(first.closure, second.closure);
    assert_eq!(first.load_order, second.load_order);
    Ok(())
}

#[tokio::test]
async fn json_report_round_trips_through_serde() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let report = env
        .run(&GraphConfigBuilder::test_mode("a", &graph).show_load_order())
        .await??;
    let json: serde_json::Value = serde_json::from_str(&report.render(ReportFormat::Json))?;

    assert_eq!(json["root"], "a");
    assert_eq!(json["closure"].as_array().map(Vec::len), Some(3));
    assert_eq!(json["load_order"], serde_json::json!(["b", "c", "a"]));
    Ok(())
}
