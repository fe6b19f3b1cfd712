use super::*;

#[test]
fn test_config_defaults() {
    let config = AppConfig::default();

    assert_eq!(config.config, PathBuf::from("config.toml"));
    assert_eq!(config.log_level, 0);
    assert_eq!(config.net_timeout, 30);
    assert_eq!(config.color, ColorIntent::Auto);
    assert_eq!(config.log_output, LogOutput::Stderr);
}

#[test]
fn test_parser_defaults_match_default_impl() {
    let parsed = AppConfig::try_parse_from(["debgraph"]).unwrap();
    let default = AppConfig::default();

    assert_eq!(parsed.config, default.config);
    assert_eq!(parsed.log_level, default.log_level);
    assert_eq!(parsed.log_format, default.log_format);
    assert_eq!(parsed.net_timeout, default.net_timeout);
}

#[test]
fn test_config_merging() {
    let base = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };
    let override_config = AppConfig {
        config: PathBuf::from("graphs/curl.toml"),
        log_level: 3,
        log_format: LogFormat::Json,
        ..AppConfig::default()
    };

    let merged = base.merge_with(override_config);

    assert_eq!(merged.config, PathBuf::from("graphs/curl.toml"));
    assert_eq!(merged.log_level, 3);
    assert_eq!(merged.log_format, LogFormat::Json);
    // defaults in the override leave the base untouched
    assert_eq!(merged.color, ColorIntent::Never);
    assert_eq!(merged.net_timeout, 30);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: AppConfig = toml::from_str("log_level = 2\ncolor = \"never\"\n").unwrap();

    assert_eq!(config.log_level, 2);
    assert_eq!(config.color, ColorIntent::Never);
    assert_eq!(config.config, PathBuf::from("config.toml"));
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn test_logger_config_honors_explicit_color() {
    let always = AppConfig {
        color: ColorIntent::Always,
        log_level: 4,
        ..AppConfig::default()
    };
    let never = AppConfig {
        color: ColorIntent::Never,
        ..AppConfig::default()
    };

    let logger = always.to_logger_config();
    assert!(logger.ansi);
    assert_eq!(logger.level, LogLevel::Trace);
    assert!(!never.to_logger_config().ansi);
}

#[test]
fn test_networking_config_uses_timeout() {
    let config = AppConfig {
        net_timeout: 5,
        ..AppConfig::default()
    };

    assert_eq!(config.to_networking_config().timeout_seconds, 5);
}

#[test]
fn test_validate_rejects_zero_timeout() {
    let config = AppConfig {
        net_timeout: 0,
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue {
            key: "net_timeout",
            ..
        })
    ));
}

#[test]
fn test_validate_rejects_empty_config_path() {
    let config = AppConfig {
        config: PathBuf::new(),
        ..AppConfig::default()
    };

    assert!(matches!(
        config.validate(),
        Err(ConfigError::EmptyKey { key: "config" })
    ));
}
