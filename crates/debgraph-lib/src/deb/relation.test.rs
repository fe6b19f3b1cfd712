use super::*;

fn names(deps: &[&str]) -> Vec<String> {
    deps.iter().map(|d| d.to_string()).collect()
}

#[test]
fn test_first_alternative_with_version_stripped() {
    let deps = parse_relation("libfoo (>= 1.2) | libbar, libbaz", &Exclusion::none());

    assert_eq!(deps, names(&["libfoo", "libbaz"]));
}

#[test]
fn test_declared_order_is_preserved() {
    let deps = parse_relation("zlib1g, libc6 (>= 2.34),libssl3", &Exclusion::none());

    assert_eq!(deps, names(&["zlib1g", "libc6", "libssl3"]));
}

#[test]
fn test_excluded_first_alternative_drops_group() {
    let deps = parse_relation("libfoo-dev | libbar, libbaz", &Exclusion::new("foo"));

    assert_eq!(deps, names(&["libbaz"]));
}

#[test]
fn test_empty_candidates_are_skipped() {
    let deps = parse_relation(" | libbar, , (>= 1.0) | libqux,", &Exclusion::none());

    assert_eq!(deps, names(&["libbar", "libqux"]));
}

#[test]
fn test_blank_relation_has_no_dependencies() {
    assert!(parse_relation("", &Exclusion::none()).is_empty());
    assert!(parse_relation("   ", &Exclusion::none()).is_empty());
}

#[test]
fn test_every_annotation_is_removed() {
    assert_eq!(strip_annotations("  libc6 (>= 2.34)  "), "libc6");
    assert_eq!(strip_annotations("a (x) b (y)"), "a b");
    assert_eq!(strip_annotations("(>= 1)"), "");
}

#[test]
fn test_unclosed_annotation_is_kept() {
    assert_eq!(strip_annotations("libc6 (>= 2"), "libc6 (>= 2");
}

#[test]
fn test_stanza_identifier_is_name_dash_version() {
    let stanzas = split_stanzas("Package: curl\nVersion: 8.5.0\nDepends: libc6 (>= 2.34)\n");

    let (node, deps) = parse_stanza(&stanzas[0], &Exclusion::none()).unwrap();

    assert_eq!(node, "curl-8.5.0");
    assert_eq!(deps, names(&["libc6"]));
}

#[test]
fn test_stanza_without_depends_has_no_dependencies() {
    let stanzas = split_stanzas("Package: base-files\nVersion: 13ubuntu10\n");

    let (_, deps) = parse_stanza(&stanzas[0], &Exclusion::none()).unwrap();

    assert!(deps.is_empty());
}

#[test]
fn test_stanza_missing_mandatory_fields_is_skipped() {
    let stanzas = split_stanzas("Package: a\n\nVersion: 1\n\nPackage: b\nVersion:\n");

    for stanza in &stanzas {
        assert_eq!(parse_stanza(stanza, &Exclusion::none()), None);
    }
}

#[test]
fn test_stanza_with_excluded_name_is_skipped() {
    let stanzas = split_stanzas("Package: libfoo-doc\nVersion: 1\n");

    assert_eq!(parse_stanza(&stanzas[0], &Exclusion::new("-doc")), None);
}

#[test]
fn test_index_builds_full_graph() {
    let index = "\
Package: curl
Version: 8.5.0
Depends: libcurl4 (= 8.5.0) | libcurl3,
 zlib1g

Package: broken
Depends: nothing

Package: zlib1g
Version: 1.3
";

    let graph = parse_index(index, &Exclusion::none());

    assert_eq!(graph.len(), 2);
    assert_eq!(
        graph.dependencies("curl-8.5.0"),
        Some(names(&["libcurl4", "zlib1g"]).as_slice())
    );
    assert_eq!(graph.dependencies("zlib1g-1.3"), Some([].as_slice()));
    assert!(!graph.contains("broken"));
}

#[test]
fn test_index_duplicate_stanza_last_wins() {
    let index = "Package: a\nVersion: 1\nDepends: x\n\nPackage: a\nVersion: 1\nDepends: y\n";

    let graph = parse_index(index, &Exclusion::none());

    assert_eq!(graph.dependencies("a-1"), Some(names(&["y"]).as_slice()));
}
