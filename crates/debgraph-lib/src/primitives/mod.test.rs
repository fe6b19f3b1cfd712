use super::*;

// =============================================================================
// LEVEL A: EXHAUSTIVE DATA TYPE TESTING
// =============================================================================

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                // Round-trip through the primary name
                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Round-trip should preserve variant"
                );
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert!(
                    parsed.is_ok(),
                    "Failed to parse '{}' for {}",
                    input,
                    stringify!($enum_type)
                );
                assert_eq!(
                    parsed.unwrap(),
                    *expected,
                    "Wrong variant for input '{}', expected {:?}",
                    input,
                    expected
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);
test_enum_completeness!(ColorIntent, test_color_intent_completeness);
test_enum_completeness!(ReportFormat, test_report_format_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warn", LogLevel::Warning),
        ("warning", LogLevel::Warning),
        ("info", LogLevel::Info),
        ("debug", LogLevel::Debug),
        ("trace", LogLevel::Trace),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    ColorIntent,
    test_color_intent_aliases,
    [
        ("auto", ColorIntent::Auto),
        ("detect", ColorIntent::Auto),
        ("always", ColorIntent::Always),
        ("on", ColorIntent::Always),
        ("never", ColorIntent::Never),
        ("off", ColorIntent::Never),
    ]
);

test_fromstr_aliases!(
    ReportFormat,
    test_report_format_aliases,
    [
        ("text", ReportFormat::Text),
        ("TEXT", ReportFormat::Text),
        ("json", ReportFormat::Json),
        ("dot", ReportFormat::Dot),
        ("graphviz", ReportFormat::Dot),
    ]
);

// =============================================================================
// LEVEL B: BEHAVIORS
// =============================================================================

#[test]
fn test_log_level_from_verbosity_boundary_conditions() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(1), LogLevel::Warning);
    assert_eq!(LogLevel::from_verbosity(2), LogLevel::Info);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(4), LogLevel::Trace);
    assert_eq!(LogLevel::from_verbosity(u8::MAX), LogLevel::Trace);
}

#[test]
fn test_unknown_value_is_parse_error() {
    let err = "sideways".parse::<ReportFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert!(err.to_string().contains("sideways"));
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::MissingKey { key: "package" };
    assert_eq!(error.to_string(), "Missing required parameter 'package'");

    let error = ConfigError::InvalidBool {
        key: "test_mode",
        value: "maybe".to_string(),
    };
    assert_eq!(
        error.to_string(),
        "Parameter 'test_mode' must be true or false, got 'maybe'"
    );
}

#[test]
fn test_debgraph_error_is_transparent_over_cycles() {
    let error: DebgraphError = CycleError {
        from: "a".to_string(),
        to: "b".to_string(),
    }
    .into();
    assert_eq!(error.to_string(), "Dependency cycle detected: a -> b");

    let error = DebgraphError::RootNotFound {
        root: "x".to_string(),
    };
    assert_eq!(error.to_string(), "Root package 'x' not found");
}
