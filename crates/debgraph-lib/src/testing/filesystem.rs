//! Temporary directory fixtures for graph files and repository mirrors

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use super::gzip;

/// Temporary directory fixture with automatic cleanup
pub struct TempDirFixture {
    /// The temporary directory (removed on drop)
    pub temp_dir: TempDir,
}

impl TempDirFixture {
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let temp_dir = tempfile::tempdir()?;
        Ok(Self { temp_dir })
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write text below the fixture root, creating parent directories
    pub fn write_file(
        &self,
        file_path: &str,
        content: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_bytes(file_path, content.as_bytes())
    }

    pub fn write_bytes(
        &self,
        file_path: &str,
        content: &[u8],
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let full_path = self.path().join(file_path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, content)?;
        Ok(full_path)
    }

    /// Lay out a mirror holding a gzipped index at `index_path`
    ///
    /// Returns the mirror root, suitable as `url_or_path`.
    pub fn write_mirror(
        &self,
        mirror: &str,
        index_path: &str,
        index: &str,
    ) -> Result<PathBuf, Box<dyn std::error::Error>> {
        self.write_bytes(&format!("{mirror}/{index_path}"), &gzip(index)?)?;
        Ok(self.path().join(mirror))
    }
}

#[cfg(test)]
mod tests {
    include!("filesystem.test.rs");
}
