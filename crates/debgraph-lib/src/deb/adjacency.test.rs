use super::*;

#[test]
fn test_diamond_file() {
    let graph = parse_adjacency("a: b c\nb: \nc: b\n");

    assert_eq!(graph.len(), 3);
    assert_eq!(
        graph.dependencies("a"),
        Some(["b".to_string(), "c".to_string()].as_slice())
    );
    assert_eq!(graph.dependencies("b"), Some([].as_slice()));
    assert_eq!(graph.dependencies("c"), Some(["b".to_string()].as_slice()));
}

#[test]
fn test_lines_without_colon_are_ignored() {
    let graph = parse_adjacency("# comment\n\na: b\njunk line\n");

    assert_eq!(graph.len(), 1);
    assert!(graph.contains("a"));
}

#[test]
fn test_whitespace_is_flexible() {
    let graph = parse_adjacency("  a  :\tb   c  \r\nb:\n");

    assert_eq!(
        graph.dependencies("a"),
        Some(["b".to_string(), "c".to_string()].as_slice())
    );
    assert_eq!(graph.dependencies("b"), Some([].as_slice()));
}

#[test]
fn test_only_first_colon_separates() {
    let graph = parse_adjacency("pkg: dep:any other\n");

    assert_eq!(
        graph.dependencies("pkg"),
        Some(["dep:any".to_string(), "other".to_string()].as_slice())
    );
}

#[test]
fn test_undeclared_dependencies_are_not_nodes() {
    let graph = parse_adjacency("a: ghost\n");

    assert!(!graph.contains("ghost"));
}
