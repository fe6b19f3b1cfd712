use super::*;
use std::io::Write;
use tempfile::NamedTempFile;

const TEST_MODE: &str = r#"
package = "a"
url_or_path = "graphs/diamond.txt"
test_mode = true
filter_substring = ""
"#;

const REPOSITORY: &str = r#"
package = "curl"
version = "8.5.0-2ubuntu10"
url_or_path = "http://archive.ubuntu.com/ubuntu/"
test_mode = "False"
filter_substring = "-doc"
show_load_order = true
"#;

fn parse(text: &str) -> Result<GraphConfig, ConfigError> {
    GraphConfig::from_toml_str(text, "config.toml")
}

#[test]
fn test_test_mode_config() {
    let config = parse(TEST_MODE).unwrap();

    assert_eq!(config.package, "a");
    assert_eq!(
        config.mode,
        RunMode::TestGraph {
            path: PathBuf::from("graphs/diamond.txt")
        }
    );
    assert!(config.is_test_mode());
    assert_eq!(config.root(), "a");
    assert!(!config.show_load_order);
    assert_eq!(config.output_format, ReportFormat::Text);
    assert!(!config.exclusion.matches("anything"));
}

#[test]
fn test_repository_config_uses_default_coordinates() {
    let config = parse(REPOSITORY).unwrap();

    assert_eq!(config.root(), "curl-8.5.0-2ubuntu10");
    assert!(config.show_load_order);
    assert!(config.exclusion.matches("curl-doc"));
    assert_eq!(
        config.mode,
        RunMode::Repository {
            base: "http://archive.ubuntu.com/ubuntu".to_string(),
            version: "8.5.0-2ubuntu10".to_string(),
            distribution: "noble".to_string(),
            component: "main".to_string(),
            architecture: "amd64".to_string(),
        }
    );
    assert_eq!(
        config.mode.index_path().as_deref(),
        Some("dists/noble/main/binary-amd64/Packages.gz")
    );
}

#[test]
fn test_repository_coordinates_override() {
    let text = format!(
        "{REPOSITORY}distribution = \"jammy\"\ncomponent = \"universe\"\narchitecture = \"arm64\"\n"
    );

    let config = parse(&text).unwrap();

    assert_eq!(
        config.mode.index_path().as_deref(),
        Some("dists/jammy/universe/binary-arm64/Packages.gz")
    );
}

#[test]
fn test_test_mode_has_no_index_path() {
    assert_eq!(parse(TEST_MODE).unwrap().mode.index_path(), None);
}

#[test]
fn test_missing_package_is_rejected() {
    let err = parse("url_or_path = \"x\"\ntest_mode = true\nfilter_substring = \"\"\n").unwrap_err();

    assert!(matches!(err, ConfigError::MissingKey { key: "package" }));
}

#[test]
fn test_blank_package_is_rejected() {
    let text = TEST_MODE.replace("package = \"a\"", "package = \"  \"");

    let err = parse(&text).unwrap_err();

    assert!(matches!(err, ConfigError::EmptyKey { key: "package" }));
}

#[test]
fn test_filter_substring_key_is_required() {
    let text = TEST_MODE.replace("filter_substring = \"\"", "");

    let err = parse(&text).unwrap_err();

    assert!(matches!(
        err,
        ConfigError::MissingKey {
            key: "filter_substring"
        }
    ));
}

#[test]
fn test_missing_test_mode_is_rejected() {
    let text = TEST_MODE.replace("test_mode = true", "");

    let err = parse(&text).unwrap_err();

    assert!(matches!(err, ConfigError::MissingKey { key: "test_mode" }));
}

#[test]
fn test_invalid_boolean_string_is_rejected() {
    let text = TEST_MODE.replace("test_mode = true", "test_mode = \"maybe\"");

    let err = parse(&text).unwrap_err();

    assert_eq!(
        err.to_string(),
        "Parameter 'test_mode' must be true or false, got 'maybe'"
    );
}

#[test]
fn test_boolean_strings_are_case_insensitive() {
    let text = TEST_MODE
        .replace("test_mode = true", "test_mode = \"TRUE\"")
        + "show_load_order = \"True\"\n";

    let config = parse(&text).unwrap();

    assert!(config.is_test_mode());
    assert!(config.show_load_order);
}

#[test]
fn test_version_required_outside_test_mode() {
    let text = REPOSITORY.replace("version = \"8.5.0-2ubuntu10\"", "version = \"\"");

    let err = parse(&text).unwrap_err();

    assert!(matches!(err, ConfigError::MissingVersion));
}

#[test]
fn test_version_ignored_in_test_mode() {
    let text = format!("{TEST_MODE}version = \"\"\n");

    assert!(parse(&text).is_ok());
}

#[test]
fn test_output_format_accepts_aliases() {
    let text = format!("{TEST_MODE}output_format = \"graphviz\"\n");

    assert_eq!(parse(&text).unwrap().output_format, ReportFormat::Dot);
}

#[test]
fn test_unknown_output_format_is_rejected() {
    let text = format!("{TEST_MODE}output_format = \"yaml\"\n");

    assert!(matches!(
        parse(&text).unwrap_err(),
        ConfigError::ParseError { .. }
    ));
}

#[test]
fn test_malformed_toml_names_origin() {
    let err = parse("package = ").unwrap_err();

    assert!(matches!(err, ConfigError::TomlParseFailed { ref path, .. } if path == "config.toml"));
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(TEST_MODE.as_bytes()).unwrap();

    let config = GraphConfig::load(file.path()).unwrap();

    assert_eq!(config.package, "a");
}

#[test]
fn test_load_missing_file() {
    let err = GraphConfig::load(Path::new("/nonexistent/debgraph/config.toml")).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFailed { .. }));
}
