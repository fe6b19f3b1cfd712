//! Graph configuration failures surface before any graph work

use anyhow::Result;
use debgraph_lib::deb::GraphConfig;
use debgraph_lib::primitives::ConfigError;
use debgraph_tests::fixtures::DIAMOND;
use debgraph_tests::{GraphConfigBuilder, TestEnvironment};

fn load_error(env: &TestEnvironment, config: &GraphConfigBuilder) -> Result<ConfigError> {
    let path = env.write_config("config.toml", config)?;
    Ok(GraphConfig::load(&path).expect_err("configuration should be rejected"))
}

#[test]
fn each_required_key_is_reported() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    for key in ["package", "url_or_path", "test_mode", "filter_substring"] {
        let config = GraphConfigBuilder::test_mode("a", &graph).without(key);

        let err = load_error(&env, &config)?;

        assert_eq!(err.to_string(), format!("Missing required parameter '{key}'"));
    }
    Ok(())
}

#[test]
fn empty_filter_is_allowed() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let config = env.load_config(&GraphConfigBuilder::test_mode("a", &graph))?;

    assert_eq!(config.exclusion.as_str(), "");
    Ok(())
}

#[test]
fn empty_url_is_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;

    let err = load_error(&env, &GraphConfigBuilder::repository("curl", "1", "  "))?;

    assert!(matches!(err, ConfigError::EmptyKey { key: "url_or_path" }));
    Ok(())
}

#[test]
fn version_is_required_outside_test_mode() -> Result<()> {
    let env = TestEnvironment::new()?;
    let config = GraphConfigBuilder::repository("curl", "1", "http://archive.ubuntu.com/ubuntu")
        .without("version");

    let err = load_error(&env, &config)?;

    assert!(matches!(err, ConfigError::MissingVersion));
    Ok(())
}

#[test]
fn test_mode_accepts_strings() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;

    let config = env.load_config(
        &GraphConfigBuilder::test_mode("a", &graph).string("test_mode", "True"),
    )?;

    assert!(config.is_test_mode());
    Ok(())
}

#[test]
fn invalid_boolean_is_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.write_graph("diamond.txt", DIAMOND)?;
    let config = GraphConfigBuilder::test_mode("a", &graph).string("show_load_order", "yes");

    let err = load_error(&env, &config)?;

    assert!(matches!(
        err,
        ConfigError::InvalidBool {
            key: "show_load_order",
            ..
        }
    ));
    Ok(())
}

#[test]
fn malformed_file_is_rejected() -> Result<()> {
    let env = TestEnvironment::new()?;
    let path = env.path().join("broken.toml");
    std::fs::write(&path, "package = [unterminated\n")?;

    let err = GraphConfig::load(&path).unwrap_err();

    assert!(matches!(err, ConfigError::TomlParseFailed { .. }));
    Ok(())
}

#[tokio::test]
async fn missing_test_graph_is_access_error() -> Result<()> {
    let env = TestEnvironment::new()?;
    let graph = env.path().join("graphs/absent.txt");

    let err = env
        .run(&GraphConfigBuilder::test_mode("a", &graph))
        .await?
        .unwrap_err();

    assert!(err.to_string().starts_with("Test graph file not found"));
    Ok(())
}
