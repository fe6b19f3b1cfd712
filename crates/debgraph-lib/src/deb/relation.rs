//! Relation field parsing
//!
//! A `Depends` value is a comma separated list of alternative groups, each
//! group a `|` separated list of candidates with optional `(op version)`
//! annotations. One candidate per group is kept and no version matching is
//! attempted.

use tracing::{debug, trace};

use super::stanza::{Stanza, split_stanzas};
use crate::graph::{Exclusion, PackageGraph};

/// Reduce a relation field to one dependency name per alternative group
///
/// The first non-empty candidate of each group is selected. If it matches
/// the exclusion the whole group is dropped, later alternatives are never
/// tried.
pub fn parse_relation(text: &str, exclusion: &Exclusion) -> Vec<String> {
    let mut dependencies = Vec::new();

    for group in text.split(',') {
        let Some(candidate) = group
            .split('|')
            .map(strip_annotations)
            .find(|candidate| !candidate.is_empty())
        else {
            continue;
        };

        if exclusion.matches(&candidate) {
            trace!(%candidate, "Dependency matches exclusion, dropped");
            continue;
        }
        dependencies.push(candidate);
    }

    dependencies
}

/// Remove every parenthesized annotation and surrounding whitespace
fn strip_annotations(candidate: &str) -> String {
    let mut out = String::with_capacity(candidate.len());
    let mut rest = candidate;

    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')') else {
            break;
        };
        out.push_str(rest[..open].trim_end());
        rest = &rest[open + close + 1..];
    }
    out.push_str(rest);

    out.trim().to_string()
}

/// Node identifier and filtered dependencies of one stanza
///
/// Returns `None` for stanzas without a `Package` or `Version` value and for
/// packages whose name matches the exclusion.
pub fn parse_stanza(stanza: &Stanza<'_>, exclusion: &Exclusion) -> Option<(String, Vec<String>)> {
    let package = stanza.field("Package").filter(|p| !p.is_empty());
    let version = stanza.field("Version").filter(|v| !v.is_empty());

    let (Some(package), Some(version)) = (package, version) else {
        debug!(
            first_line = stanza.lines().first().copied().unwrap_or_default(),
            "Skipping stanza without Package or Version"
        );
        return None;
    };

    if exclusion.matches(package) {
        trace!(package, "Package matches exclusion, stanza skipped");
        return None;
    }

    let dependencies = stanza
        .multiline_field("Depends")
        .map(|depends| parse_relation(&depends, exclusion))
        .unwrap_or_default();

    Some((format!("{package}-{version}"), dependencies))
}

/// Build the full graph from a decompressed `Packages` index
pub fn parse_index(text: &str, exclusion: &Exclusion) -> PackageGraph {
    let stanzas = split_stanzas(text);
    let total = stanzas.len();

    let graph: PackageGraph = stanzas
        .iter()
        .filter_map(|stanza| parse_stanza(stanza, exclusion))
        .collect();

    debug!(stanzas = total, nodes = graph.len(), "Parsed package index");
    graph
}

#[cfg(test)]
mod tests {
    include!("relation.test.rs");
}
