use super::*;

const INDEX: &str = "\
Package: curl
Version: 8.5.0-2ubuntu10
Depends: libc6 (>= 2.34), libcurl4t64 (= 8.5.0-2ubuntu10),
 zlib1g (>= 1:1.1.4)
Description: command line tool for transferring data with URL syntax

Package: zlib1g
Version: 1:1.3.dfsg-3.1ubuntu2
";

#[test]
fn test_split_on_blank_lines() {
    let stanzas = split_stanzas(INDEX);

    assert_eq!(stanzas.len(), 2);
    assert_eq!(stanzas[0].lines().len(), 5);
    assert_eq!(stanzas[1].field("Package"), Some("zlib1g"));
}

#[test]
fn test_split_ignores_repeated_and_whitespace_only_separators() {
    let stanzas = split_stanzas("\n\nPackage: a\r\n\r\n   \n\nPackage: b\n\n\n");

    assert_eq!(stanzas.len(), 2);
    assert_eq!(stanzas[0].field("Package"), Some("a"));
    assert_eq!(stanzas[1].field("Package"), Some("b"));
}

#[test]
fn test_empty_text_has_no_stanzas() {
    assert!(split_stanzas("").is_empty());
    assert!(split_stanzas("\n \n").is_empty());
}

#[test]
fn test_field_is_trimmed_and_case_sensitive() {
    let stanza = Stanza::new(vec!["Package:   curl  ", "version: 1"]);

    assert_eq!(stanza.field("Package"), Some("curl"));
    assert_eq!(stanza.field("Version"), None);
}

#[test]
fn test_field_requires_name_at_line_start() {
    let stanza = Stanza::new(vec!["Pre-Depends: libc6", "Depends:"]);

    assert_eq!(stanza.field("Depends"), Some(""));
    assert_eq!(stanza.field("Pre-Depends"), Some("libc6"));
}

#[test]
fn test_field_name_prefix_does_not_match_longer_name() {
    let stanza = Stanza::new(vec!["Packages: nope"]);

    assert_eq!(stanza.field("Package"), None);
}

#[test]
fn test_multiline_field_joins_continuations() {
    let stanzas = split_stanzas(INDEX);

    assert_eq!(
        stanzas[0].multiline_field("Depends").as_deref(),
        Some("libc6 (>= 2.34), libcurl4t64 (= 8.5.0-2ubuntu10), zlib1g (>= 1:1.1.4)")
    );
}

#[test]
fn test_multiline_field_stops_at_next_field() {
    let stanza = Stanza::new(vec!["Depends: a,", "\tb", "Description: c", " d"]);

    assert_eq!(stanza.multiline_field("Depends").as_deref(), Some("a, b"));
}

#[test]
fn test_multiline_field_value_may_start_on_continuation() {
    let stanza = Stanza::new(vec!["Depends:", " a, b"]);

    assert_eq!(stanza.multiline_field("Depends").as_deref(), Some("a, b"));
}

#[test]
fn test_multiline_field_absent() {
    let stanza = Stanza::new(vec!["Package: a"]);

    assert_eq!(stanza.multiline_field("Depends"), None);
}
