use super::*;
use crate::primitives::ColorIntent;

fn env_of(vars: &[(&str, &str)]) -> EnvironmentConfig {
    EnvironmentConfig::from_vars(
        vars.iter()
            .map(|(k, v)| (k.to_string(), v.to_string())),
    )
    .unwrap()
}

#[test]
fn test_resolve_defaults() {
    let config = AppConfig::resolve(AppConfig::default(), &env_of(&[])).unwrap();

    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.color, ColorIntent::Auto);
}

#[test]
fn test_environment_adjusts_default_color() {
    let config = AppConfig::resolve(AppConfig::default(), &env_of(&[("NO_COLOR", "1")])).unwrap();

    assert_eq!(config.color, ColorIntent::Never);
}

#[test]
fn test_cli_color_beats_environment() {
    let cli = AppConfig {
        color: ColorIntent::Always,
        ..AppConfig::default()
    };

    let config = AppConfig::resolve(cli, &env_of(&[("NO_COLOR", "1")])).unwrap();

    assert_eq!(config.color, ColorIntent::Always);
}

#[test]
fn test_cli_values_are_validated() {
    let cli = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };

    assert!(AppConfig::resolve(cli, &env_of(&[])).is_err());
}

#[test]
fn test_missing_env_files_are_not_errors() {
    assert!(AppConfig::load_env_files().is_ok());
}
