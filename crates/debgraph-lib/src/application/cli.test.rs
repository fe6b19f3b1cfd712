use super::*;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("debgraph").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_no_arguments() {
    let cli = parse(&[]);

    assert_eq!(cli.config.config, PathBuf::from("config.toml"));
    assert!(!cli.show_load_order);
    assert_eq!(cli.format, None);
}

#[test]
fn test_global_options() {
    let cli = parse(&[
        "--config",
        "graphs/curl.toml",
        "--log-level",
        "3",
        "--log-format",
        "json",
        "--net-timeout",
        "5",
        "--color",
        "off",
    ]);

    assert_eq!(cli.config.config, PathBuf::from("graphs/curl.toml"));
    assert_eq!(cli.config.log_level, 3);
    assert_eq!(cli.config.log_format, crate::primitives::LogFormat::Json);
    assert_eq!(cli.config.net_timeout, 5);
    assert_eq!(cli.config.color, crate::primitives::ColorIntent::Never);
}

#[test]
fn test_graph_overrides() {
    let cli = parse(&["--show-load-order", "--format", "graphviz"]);

    assert!(cli.show_load_order);
    assert_eq!(cli.format, Some(ReportFormat::Dot));
}

#[test]
fn test_unknown_format_is_rejected() {
    assert!(Cli::try_parse_from(["debgraph", "--format", "xml"]).is_err());
}

#[test]
fn test_from_cli_resolves_app_config() {
    let cli = parse(&["-c", "other.toml", "--show-load-order"]);

    let resolved = CliConfig::from_cli(cli, &EnvironmentConfig::default()).unwrap();

    assert_eq!(resolved.app_config.config, PathBuf::from("other.toml"));
    assert!(resolved.show_load_order);
}

#[test]
fn test_cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
