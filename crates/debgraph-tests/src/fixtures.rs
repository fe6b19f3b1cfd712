//! Graph and index fixtures for end-to-end tests

/// `a` depends on `b` and `c`, `c` depends on `b`
pub const DIAMOND: &str = "a: b c\nb: \nc: b\n";

/// `a` and `b` depend on each other
pub const TWO_CYCLE: &str = "a: b\nb: a\n";

/// Layered graph with shared dependencies, an undefined node and a node
/// nothing reaches
pub const LAYERED: &str = "\
app: net ui log
net: tls core
ui: core widgets
tls: core crypto
widgets: core
core: alloc
alloc:
log: alloc
crypto: missing-helper
orphan: app
";

/// Cycle that only exists below the root
pub const DEEP_CYCLE: &str = "\
root: x
x: y
y: z
z: x
";

/// Excerpt of a noble `Packages` index
pub const NOBLE_INDEX: &str = "\
Package: curl
Architecture: amd64
Version: 8.5.0-2ubuntu10
Priority: optional
Section: web
Depends: libc6 (>= 2.34), libcurl4t64 (= 8.5.0-2ubuntu10),
 zlib1g (>= 1:1.1.4)
Description: command line tool for transferring data with URL syntax

Package: libcurl4t64
Version: 8.5.0-2ubuntu10
Depends: libbrotli1 (>= 0.6.0), libc6 (>= 2.38), libgssapi-krb5-2 (>= 1.17) | libkrb5-3,
 libssl3t64 (>= 3.0.0), zlib1g (>= 1:1.1.4)

Package: zlib1g
Version: 1:1.3.dfsg-3.1ubuntu2
Pre-Depends: libc6 (>= 2.14)

Package: libc6
Version: 2.39-0ubuntu8
Depends: libgcc-s1
Recommends: libidn2-0 (>= 2.0.5~)

Package: curl-doc
Version: 8.5.0-2ubuntu10
Depends: curl

Package: broken-stanza
Depends: libc6
";

/// Relation with alternatives and version annotations
pub const ALTERNATIVES_INDEX: &str = "\
Package: app
Version: 1.0
Depends: libfoo (>= 1.2) | libbar, libbaz
";
