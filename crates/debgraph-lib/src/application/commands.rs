//! Command execution
//!
//! One run: read the graph configuration, obtain the full graph, build the
//! closure of the root, order it when asked, and print the report.

use anyhow::{Context, Result};
use std::io::Write;
use tracing::{debug, info};

use crate::application::CliConfig;
use crate::deb::{GraphConfig, RunMode, parse_adjacency, parse_index};
use crate::graph::{PackageGraph, Report, build_closure, compute_load_order};
use crate::networking::{IndexClient, IndexLocation, NetworkingConfig, read_test_graph};
use crate::primitives::DebgraphError;

/// Execute a run described by the command line and print its report
pub async fn execute_command(cli: CliConfig) -> Result<()> {
    let mut graph_config = GraphConfig::load(&cli.app_config.config)
        .map_err(DebgraphError::from)
        .with_context(|| {
            format!(
                "Invalid graph configuration '{}'",
                cli.app_config.config.display()
            )
        })?;

    if cli.show_load_order {
        graph_config.show_load_order = true;
    }
    if let Some(format) = cli.format {
        graph_config.output_format = format;
    }

    let report = run(&graph_config, &cli.app_config.to_networking_config()).await?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(report.render(graph_config.output_format).as_bytes())
        .context("Failed to write report")?;
    stdout.flush().context("Failed to write report")?;

    Ok(())
}

/// Load the full graph and analyze it; nothing is printed
pub async fn run(
    config: &GraphConfig,
    networking: &NetworkingConfig,
) -> Result<Report, DebgraphError> {
    let graph = load_graph(config, networking).await?;
    analyze(config, &graph)
}

/// Read the full graph from the configured source
///
/// Index stanzas are filtered by the exclusion while parsing, adjacency
/// lists are taken as written.
pub async fn load_graph(
    config: &GraphConfig,
    networking: &NetworkingConfig,
) -> Result<PackageGraph, DebgraphError> {
    match &config.mode {
        RunMode::TestGraph { path } => {
            debug!(path = %path.display(), "Reading test graph");
            let text = read_test_graph(path)?;
            Ok(parse_adjacency(&text))
        }
        RunMode::Repository { base, .. } => {
            let index_path = config.mode.index_path().unwrap_or_default();
            let location = IndexLocation::resolve(base, &index_path);
            let client = IndexClient::new(networking)?;
            let text = client.fetch_index(&location).await?;
            Ok(parse_index(&text, &config.exclusion))
        }
    }
}

/// Closure and optional load order of the configured root
pub fn analyze(config: &GraphConfig, graph: &PackageGraph) -> Result<Report, DebgraphError> {
    let root = config.root();
    if !graph.contains(&root) {
        return Err(DebgraphError::RootNotFound { root });
    }

    let closure = build_closure(&root, graph, &config.exclusion)?;

    let load_order = if config.show_load_order {
        Some(compute_load_order(&root, &closure)?)
    } else {
        None
    };

    info!(
        root = %root,
        nodes = closure.len(),
        unresolved = closure.unresolved_count(),
        edges = closure.edge_count(),
        "Dependency closure computed"
    );

    Ok(Report {
        root,
        closure,
        load_order,
    })
}

#[cfg(test)]
mod tests {
    include!("commands.test.rs");
}
