#![allow(dead_code)]

use cmakegen::config::Configuration;
use cmakegen::error::{Error, Result};
use cmakegen::fs::{DirectoryEntry, FileSystem};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

pub const ROOT: &str = "/project";

/// In-memory [`FileSystem`] holding a fixed directory tree and the written files.
#[derive(Default)]
pub struct MemoryFileSystem {
    dirs: BTreeSet<PathBuf>,
    files: RefCell<BTreeMap<PathBuf, String>>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `path` and all of its ancestors as directories.
    pub fn with_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        for ancestor in path.as_ref().ancestors() {
            if !ancestor.as_os_str().is_empty() {
                self.dirs.insert(ancestor.to_path_buf());
            }
        }
        self
    }

    pub fn read<P: AsRef<Path>>(&self, path: P) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.files.borrow().keys().cloned().collect()
    }
}

impl FileSystem for MemoryFileSystem {
    fn list_subdirectories(&self, path: &Path) -> Result<Vec<DirectoryEntry>> {
        if !self.dirs.contains(path) {
            return Err(Error::Filesystem {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "no such directory"),
            });
        }
        // reverse order so callers cannot rely on a sorted listing
        Ok(self
            .dirs
            .iter()
            .rev()
            .filter(|dir| dir.parent() == Some(path))
            .map(|dir| DirectoryEntry {
                name: dir.file_name().unwrap().to_string_lossy().to_string(),
                path: dir.clone(),
            })
            .collect())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        self.files.borrow_mut().insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

/// Toggles of the test configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Toggles {
    pub trilinos: bool,
    pub opencv: bool,
    pub tests: bool,
    pub examples: bool,
}

pub fn config_yaml(toggles: Toggles) -> String {
    format!(
        r#"
build:
  CMAKE_CXX_COMPILER: g++
  CMAKE_BUILD_TYPE: Debug
  CMAKE_CXX_STANDARD: 17
  CMAKE_CXX_FLAGS: "-Wall -Wextra"
  USE_OPENMP: false
  USE_LOG: false
  BLAZE_INCL_DIR: /opt/blaze
  BOOST_INCLUDEDIR: /opt/boost/include
  NLOHMANN_JSON_INCL_DIR: /opt/json/include
kernel:
  CMAKE_INSTALL_PREFIX: /install/kernel
  numerics:
    BUILD_TESTS: {tests}
    BUILD_EXAMPLES: {examples}
cengine:
  CMAKE_INSTALL_PREFIX: /install/cengine
  rl:
    BUILD_TESTS: {tests}
    BUILD_EXAMPLES: {examples}
trilinos:
  USE_TRILINOS: {trilinos}
  USE_TRILINOS_LONG_LONG_TYPE: true
  TRILINOS_INCL_DIR: /opt/trilinos/include
  TRILINOS_LIB_DIR: /opt/trilinos/lib
opencv:
  USE_OPEN_CV: {opencv}
  OPENCV_INCL_DIR: /opt/opencv/include
testing:
  GTEST_INC_DIR: /opt/gtest/include
  GTEST_LIB_DIR: /opt/gtest/lib
"#,
        tests = toggles.tests,
        examples = toggles.examples,
        trilinos = toggles.trilinos,
        opencv = toggles.opencv,
    )
}

pub fn config(toggles: Toggles) -> Configuration {
    Configuration::parse(&config_yaml(toggles)).unwrap()
}

/// Lines of `contents` that are `INCLUDE_DIRECTORIES(...)` statements, unwrapped.
pub fn include_dirs(contents: &str) -> Vec<String> {
    statement_args(contents, "INCLUDE_DIRECTORIES")
}

pub fn link_dirs(contents: &str) -> Vec<String> {
    statement_args(contents, "LINK_DIRECTORIES")
}

/// Libraries linked by `TARGET_LINK_LIBRARIES(${EXECUTABLE} ...)` statements.
pub fn link_libraries(contents: &str) -> Vec<String> {
    statement_args(contents, "TARGET_LINK_LIBRARIES")
        .into_iter()
        .map(|args| args.trim_start_matches("${EXECUTABLE} ").to_string())
        .collect()
}

fn statement_args(contents: &str, command: &str) -> Vec<String> {
    let prefix = format!("{command}(");
    contents
        .lines()
        .filter_map(|line| line.strip_prefix(prefix.as_str()))
        .map(|rest| rest.trim_end_matches(')').to_string())
        .collect()
}
