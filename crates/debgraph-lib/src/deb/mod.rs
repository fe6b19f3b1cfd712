//! Debian repository metadata
//!
//! Turns raw text into a [`crate::graph::PackageGraph`]: package indices are
//! split into stanzas and their `Depends` relations reduced to one candidate
//! per alternative group, while test graphs are read as plain adjacency
//! lists. [`config::GraphConfig`] describes which of the two a run uses.

pub mod adjacency;
pub mod config;
pub mod relation;
pub mod stanza;

pub use adjacency::parse_adjacency;
pub use config::{GraphConfig, RunMode};
pub use relation::{parse_index, parse_relation, parse_stanza};
pub use stanza::{Stanza, split_stanzas};
