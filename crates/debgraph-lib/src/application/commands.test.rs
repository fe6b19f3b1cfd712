use super::*;
use crate::testing::{DIAMOND_GRAPH, SAMPLE_INDEX, TWO_CYCLE_GRAPH, TempDirFixture};

fn test_mode_config(path: &std::path::Path, root: &str, filter: &str, order: bool) -> GraphConfig {
    GraphConfig::from_toml_str(
        &format!(
            "package = \"{root}\"\nurl_or_path = \"{}\"\ntest_mode = true\n\
             filter_substring = \"{filter}\"\nshow_load_order = {order}\n",
            path.display()
        ),
        "test",
    )
    .unwrap()
}

fn repository_config(base: &str, package: &str, version: &str, filter: &str) -> GraphConfig {
    GraphConfig::from_toml_str(
        &format!(
            "package = \"{package}\"\nversion = \"{version}\"\nurl_or_path = \"{base}\"\n\
             test_mode = false\nfilter_substring = \"{filter}\"\nshow_load_order = true\n"
        ),
        "test",
    )
    .unwrap()
}

#[tokio::test]
async fn test_run_diamond_with_load_order() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_file("diamond.txt", DIAMOND_GRAPH).unwrap();
    let config = test_mode_config(&path, "a", "", true);

    let report = run(&config, &NetworkingConfig::default()).await.unwrap();

    assert_eq!(
        report.render_text(),
        "Transitive dependency graph for a:\na -> [b, c]\nb -> []\nc -> [b]\n\n\
         Load order:\n1. b\n2. c\n3. a\n"
    );
}

#[tokio::test]
async fn test_run_diamond_with_exclusion() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_file("diamond.txt", DIAMOND_GRAPH).unwrap();
    let config = test_mode_config(&path, "a", "c", false);

    let report = run(&config, &NetworkingConfig::default()).await.unwrap();

    let nodes: Vec<_> = report.closure.entries().iter().map(|e| e.node.as_str()).collect();
    assert_eq!(nodes, vec!["a", "b"]);
    assert_eq!(report.closure.dependencies("a"), Some(["b".to_string()].as_slice()));
    assert_eq!(report.load_order, None);
}

#[tokio::test]
async fn test_run_cycle_fails() {
    let fixture = TempDirFixture::new().unwrap();
    let path = fixture.write_file("cycle.txt", TWO_CYCLE_GRAPH).unwrap();
    let config = test_mode_config(&path, "a", "", true);

    let err = run(&config, &NetworkingConfig::default()).await.unwrap_err();

    assert!(matches!(err, DebgraphError::Cycle(_)));
}

#[tokio::test]
async fn test_run_missing_test_graph() {
    let config = test_mode_config(std::path::Path::new("/nonexistent/g.txt"), "a", "", false);

    let err = run(&config, &NetworkingConfig::default()).await.unwrap_err();

    assert!(matches!(err, DebgraphError::Access(_)));
}

#[test]
fn test_analyze_unknown_root() {
    let config = test_mode_config(std::path::Path::new("unused"), "x", "", false);
    let graph = parse_adjacency(DIAMOND_GRAPH);

    let err = analyze(&config, &graph).unwrap_err();

    assert_eq!(err.to_string(), "Root package 'x' not found");
}

#[tokio::test]
async fn test_run_against_local_mirror() {
    let fixture = TempDirFixture::new().unwrap();
    let root = fixture
        .write_mirror(
            "mirror",
            "dists/noble/main/binary-amd64/Packages.gz",
            SAMPLE_INDEX,
        )
        .unwrap();
    let config = repository_config(&root.display().to_string(), "curl", "8.5.0", "");

    let report = run(&config, &NetworkingConfig::default()).await.unwrap();

    assert_eq!(report.root, "curl-8.5.0");
    // index identifiers carry versions, dependency names do not
    assert_eq!(
        report.closure.dependencies("curl-8.5.0"),
        Some(
            ["libcurl4".to_string(), "zlib1g".to_string(), "libc6".to_string()].as_slice()
        )
    );
    assert_eq!(report.closure.unresolved_count(), 3);
    assert_eq!(
        report.load_order.unwrap(),
        vec!["libcurl4", "zlib1g", "libc6", "curl-8.5.0"]
    );
}

#[tokio::test]
async fn test_run_excluded_root_stanza_is_not_found() {
    let fixture = TempDirFixture::new().unwrap();
    let root = fixture
        .write_mirror(
            "mirror",
            "dists/noble/main/binary-amd64/Packages.gz",
            SAMPLE_INDEX,
        )
        .unwrap();
    let config = repository_config(&root.display().to_string(), "curl", "8.5.0", "curl");

    let err = run(&config, &NetworkingConfig::default()).await.unwrap_err();

    assert!(matches!(err, DebgraphError::RootNotFound { ref root } if root == "curl-8.5.0"));
}
