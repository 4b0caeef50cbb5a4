//! Filesystem collaborator used by the generators.
//! Generators never touch `std::fs` directly; they list sub-directories and
//! write descriptors through [`FileSystem`] so tests can inject a double.

use crate::error::{Error, Result};
use log::{debug, warn};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use walkdir::WalkDir;

/// A discovered immediate sub-directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Directory listing and file writing capabilities consumed by the generators.
pub trait FileSystem {
    /// Lists the immediate child directories of `path`.
    /// Files and other non-directory entries are ignored.
    ///
    /// # Errors
    /// * `Error::Filesystem` if `path` does not exist or cannot be read
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<DirectoryEntry>>;

    /// Writes `contents` to `path`, replacing any existing file.
    ///
    /// # Errors
    /// * `Error::Filesystem` if the file cannot be created or written
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}

/// [`FileSystem`] backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl LocalFileSystem {
    /// Creates a filesystem operating on the local disk.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFileSystem {
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        let mut entries = Vec::new();
        for entry in WalkDir::new(path).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|e| {
                let source = e.into_io_error().unwrap_or_else(|| {
                    std::io::Error::other("filesystem loop detected")
                });
                Error::filesystem(path, source)
            })?;
            if !entry.file_type().is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str() else {
                warn!("Skipping non UTF-8 directory name under {}", path.display());
                continue;
            };
            debug!("Discovered directory {}", entry.path().display());
            entries.push(DirectoryEntry { name: name.to_string(), path: entry.into_path() });
        }
        Ok(entries)
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(|e| Error::filesystem(parent, e))?;

        // The descriptor only appears at its final path once fully written.
        let mut file = NamedTempFile::new_in(parent).map_err(|e| Error::filesystem(path, e))?;
        file.write_all(contents.as_bytes()).map_err(|e| Error::filesystem(path, e))?;
        file.persist(path).map_err(|e| Error::filesystem(path, e.error))?;
        Ok(())
    }
}
