//! Test support for debgraph
//!
//! Temporary directories holding graph files and repository mirrors, gzip
//! encoding for index fixtures, and a few canonical graphs.

pub mod filesystem;

pub use filesystem::TempDirFixture;

use flate2::Compression;
use flate2::write::GzEncoder;
use std::io::Write;

/// `a` depends on `b` and `c`, `c` depends on `b`
pub const DIAMOND_GRAPH: &str = "a: b c\nb: \nc: b\n";

/// `a` and `b` depend on each other
pub const TWO_CYCLE_GRAPH: &str = "a: b\nb: a\n";

/// Small package index with alternatives, versions, continuation lines and
/// one dependency that no stanza defines
pub const SAMPLE_INDEX: &str = "\
Package: curl
Version: 8.5.0
Depends: libcurl4 (= 8.5.0) | libcurl3-gnutls, zlib1g (>= 1:1.1.4),
 libc6 (>= 2.34)
Description: command line tool for transferring data with URL syntax

Package: libcurl4
Version: 8.5.0
Depends: libc6 (>= 2.34), libssl3 (>= 3.0.0), zlib1g

Package: zlib1g
Version: 1:1.3
Depends: libc6 (>= 2.14)

Package: libcurl4-doc
Version: 8.5.0
";

/// Gzip-compress text the way repository indices are stored
pub fn gzip(text: &str) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(text.as_bytes())?;
    encoder.finish()
}
