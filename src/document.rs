//! In-progress output of a single descriptor file.

use crate::error::Result;
use crate::fs::FileSystem;
use log::debug;
use std::path::{Path, PathBuf};

/// A fully rendered descriptor destined for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptorDocument {
    path: PathBuf,
    contents: String,
}

impl DescriptorDocument {
    /// Wraps rendered contents, normalizing `\r\n` and lone `\r` line endings to `\n`.
    ///
    /// # Arguments
    /// * `path` - Final location of the descriptor
    /// * `contents` - Rendered descriptor text
    pub fn new<P: Into<PathBuf>>(path: P, contents: String) -> Self {
        let contents = if contents.contains('\r') {
            contents.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            contents
        };
        Self { path: path.into(), contents }
    }

    /// Path the document is written to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Writes the document to its final path.
    pub fn flush(&self, fs: &dyn FileSystem) -> Result<()> {
        debug!("Writing {}", self.path.display());
        fs.write_file(&self.path, &self.contents)
    }
}

/// Renders a path the way CMake expects it, with forward slashes.
pub fn cmake_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
