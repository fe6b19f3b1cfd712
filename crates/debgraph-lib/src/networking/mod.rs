//! Raw text retrieval for graph sources
//!
//! Test graphs are read from disk. Package indices are fetched over HTTP
//! or read from a local mirror, then gunzipped. Every failure is final,
//! there is no retry.

use flate2::read::GzDecoder;
use reqwest::Client;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::{Instrument, debug, trace};

/// Failures reading or fetching graph input
#[derive(Debug, Error)]
pub enum AccessError {
    #[error("Test graph file not found: {path}")]
    TestGraphNotFound { path: String },

    #[error("Failed to read '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to build HTTP client: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to decompress {origin}: {source}")]
    Decompress {
        origin: String,
        source: std::io::Error,
    },
}

/// HTTP settings for index retrieval
#[derive(Debug, Clone)]
pub struct NetworkingConfig {
    /// HTTP client timeout in seconds
    pub timeout_seconds: u64,
}

impl Default for NetworkingConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
        }
    }
}

/// Resolved location of a compressed package index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexLocation {
    Remote(String),
    Local(PathBuf),
}

impl IndexLocation {
    /// Join a repository base and an index path
    ///
    /// `http://` and `https://` bases are fetched, `file://` bases and plain
    /// paths are read from disk. Trailing slashes on the base are ignored.
    pub fn resolve(base: &str, index_path: &str) -> Self {
        let base = base.trim_end_matches('/');

        if base.starts_with("http://") || base.starts_with("https://") {
            IndexLocation::Remote(format!("{base}/{index_path}"))
        } else {
            let dir = base.strip_prefix("file://").unwrap_or(base);
            let dir = if dir.is_empty() { "/" } else { dir };
            IndexLocation::Local(Path::new(dir).join(index_path))
        }
    }
}

impl std::fmt::Display for IndexLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IndexLocation::Remote(url) => f.write_str(url),
            IndexLocation::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Fetches and decompresses package indices
#[derive(Debug, Clone)]
pub struct IndexClient {
    client: Client,
}

impl IndexClient {
    pub fn new(config: &NetworkingConfig) -> Result<Self, AccessError> {
        trace!(timeout = config.timeout_seconds, "Building HTTP client");

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("debgraph/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|source| AccessError::ClientInit { source })?;

        Ok(Self { client })
    }

    /// Decompressed text of the index at `location`
    pub async fn fetch_index(&self, location: &IndexLocation) -> Result<String, AccessError> {
        let span = crate::progress_span!("fetch_index", location = %location);

        async {
            let compressed = match location {
                IndexLocation::Remote(url) => self.download(url).await?,
                IndexLocation::Local(path) => read_bytes(path)?,
            };
            debug!(bytes = compressed.len(), "Index retrieved");

            gunzip(&compressed, &location.to_string())
        }
        .instrument(span)
        .await
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>, AccessError> {
        debug!(url, "Downloading package index");

        let http_error = |source: reqwest::Error| AccessError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AccessError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(http_error)?;
        Ok(body.to_vec())
    }
}

/// Text of an adjacency list file
pub fn read_test_graph(path: &Path) -> Result<String, AccessError> {
    if !path.exists() {
        return Err(AccessError::TestGraphNotFound {
            path: path.display().to_string(),
        });
    }

    std::fs::read_to_string(path).map_err(|source| AccessError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}

fn read_bytes(path: &Path) -> Result<Vec<u8>, AccessError> {
    debug!(path = %path.display(), "Reading package index from mirror");

    std::fs::read(path).map_err(|source| AccessError::ReadFailed {
        path: path.display().to_string(),
        source,
    })
}

/// Decode gzip data; invalid UTF-8 sequences are replaced
pub fn gunzip(compressed: &[u8], origin: &str) -> Result<String, AccessError> {
    let mut decoded = Vec::new();
    GzDecoder::new(compressed)
        .read_to_end(&mut decoded)
        .map_err(|source| AccessError::Decompress {
            origin: origin.to_string(),
            source,
        })?;

    trace!(
        compressed = compressed.len(),
        decompressed = decoded.len(),
        "Index decompressed"
    );
    Ok(String::from_utf8_lossy(&decoded).into_owned())
}

#[cfg(test)]
mod tests {
    include!("mod.test.rs");
}
