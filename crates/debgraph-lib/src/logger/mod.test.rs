use super::*;

#[test]
fn test_filter_directives_scope_levels() {
    let directives = filter_directives(LogLevel::Debug);

    assert!(directives.starts_with("debgraph=debug,debgraph_lib=debug,"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.contains("hyper_util=warn"));
    assert!(directives.ends_with(",debug"));
    assert!(EnvFilter::try_new(&directives).is_ok());
}

#[test]
fn test_filter_directives_for_every_level_parse() {
    for level in [
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ] {
        assert!(EnvFilter::try_new(filter_directives(level)).is_ok());
    }
}

// The only test in this binary that installs the global subscriber
#[test]
fn test_init_once() {
    let config = LoggerConfig {
        level: LogLevel::Warning,
        format: LogFormat::Text,
        output: LogOutput::Stderr,
        ansi: false,
    };

    let logger = Logger::init(config.clone()).unwrap();
    assert!(Logger::is_initialized());
    assert_eq!(logger.config().level, LogLevel::Warning);

    assert!(matches!(
        Logger::init(config),
        Err(LoggerError::AlreadyInitialized)
    ));
}
