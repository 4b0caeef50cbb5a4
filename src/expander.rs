//! Per-test and per-example executable descriptors.
//!
//! Every immediate sub-directory of a module's `tests` or `examples` directory
//! holds one executable whose single source file is named after the
//! directory. The expander writes one standalone descriptor per directory.

use crate::config::Configuration;
use crate::constants::{DESCRIPTOR_FILE, SOURCE_EXTENSION, SYSTEM_LIBRARIES, TEST_LIBRARIES};
use crate::dependency::ResolvedDependency;
use crate::document::DescriptorDocument;
use crate::error::Result;
use crate::fs::{DirectoryEntry, FileSystem};
use crate::renderer::{TemplateRenderer, SINGLE_TARGET_TEMPLATE};
use crate::writer::{build_context, BuildOptions};
use log::{debug, info};
use serde_json::json;
use std::path::{Path, PathBuf};

/// Header and library locations of the test framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestFramework {
    pub include_dir: String,
    pub library_dir: String,
}

impl TestFramework {
    /// Reads the framework's locations from the `testing` section.
    ///
    /// # Errors
    /// * `Error::MissingKey` if `testing.GTEST_INC_DIR` or `testing.GTEST_LIB_DIR` is absent
    pub fn from_config(config: &Configuration) -> Result<Self> {
        Ok(Self {
            include_dir: config.get_str("testing.GTEST_INC_DIR")?.to_string(),
            library_dir: config.get_str("testing.GTEST_LIB_DIR")?.to_string(),
        })
    }
}

/// Whether the expanded executables are tests or examples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetKind {
    /// Linked against the test framework, whose headers are on the include path
    Test(TestFramework),
    Example,
}

impl TargetKind {
    /// Examples link neither the test framework nor its directories.
    pub fn is_example(&self) -> bool {
        matches!(self, TargetKind::Example)
    }
}

/// What a standalone executable needs from its enclosing module.
#[derive(Debug, Clone)]
pub struct TargetWiring {
    /// Name of the module library every executable links
    pub library: String,
    pub build: BuildOptions,
    /// Module and sibling source trees, in include order
    pub source_include_dirs: Vec<String>,
    /// Install prefixes searched for the module libraries
    pub link_prefixes: Vec<String>,
    pub dependencies: Vec<ResolvedDependency>,
}

impl TargetWiring {
    fn include_dirs(&self, kind: &TargetKind) -> Vec<String> {
        let mut dirs = self.build.toolkit_include_dirs();
        if let TargetKind::Test(framework) = kind {
            dirs.push(framework.include_dir.clone());
        }
        dirs.extend(self.source_include_dirs.iter().cloned());
        dirs.extend(self.dependencies.iter().map(|dep| dep.include_dir.clone()));
        dirs
    }

    fn link_dirs(&self, kind: &TargetKind) -> Vec<String> {
        let mut dirs = self.link_prefixes.clone();
        if let TargetKind::Test(framework) = kind {
            dirs.push(framework.library_dir.clone());
        }
        dirs.push("${Boost_LIBRARY_DIRS}".to_string());
        dirs.extend(self.dependencies.iter().filter_map(|dep| dep.library_dir.clone()));
        dirs
    }

    fn link_libraries(&self, kind: &TargetKind) -> Vec<String> {
        let mut libraries = vec![self.library.clone()];
        if !kind.is_example() {
            libraries.extend(TEST_LIBRARIES.iter().map(|lib| lib.to_string()));
        }
        libraries.extend(SYSTEM_LIBRARIES.iter().map(|lib| lib.to_string()));
        for dependency in &self.dependencies {
            libraries.extend(dependency.link_libraries.iter().cloned());
        }
        libraries
    }
}

/// Renders the descriptor of the executable living in `directory`.
///
/// # Arguments
/// * `renderer` - Renderer resolving the built-in templates
/// * `wiring` - Include paths, link paths and libraries shared by the module's executables
/// * `directory` - Directory of the executable; its name names the source and target
/// * `kind` - Whether the executable is a test or an example
///
/// # Returns
/// * `Result<DescriptorDocument>` - The unwritten descriptor at `<directory>/CMakeLists.txt`
pub fn single_target_document(
    renderer: &dyn TemplateRenderer,
    wiring: &TargetWiring,
    directory: &DirectoryEntry,
    kind: &TargetKind,
) -> Result<DescriptorDocument> {
    let mut context = build_context(&wiring.build);
    context.insert("name".to_string(), json!(directory.name));
    context.insert("extension".to_string(), json!(SOURCE_EXTENSION));
    let discovery: Vec<String> =
        wiring.dependencies.iter().flat_map(ResolvedDependency::discovery).collect();
    context.insert("discovery".to_string(), json!(discovery));
    context.insert("include_dirs".to_string(), json!(wiring.include_dirs(kind)));
    context.insert("link_dirs".to_string(), json!(wiring.link_dirs(kind)));
    context.insert("link_libraries".to_string(), json!(wiring.link_libraries(kind)));

    let contents = renderer.render(SINGLE_TARGET_TEMPLATE, &serde_json::Value::Object(context))?;
    Ok(DescriptorDocument::new(directory.path.join(DESCRIPTOR_FILE), contents))
}

/// Writes one single-target descriptor per immediate sub-directory of `parent`.
///
/// The written set always matches the directories present at call time; an
/// empty `parent` produces nothing.
///
/// # Arguments
/// * `fs` - Filesystem the sub-directories are listed in and written to
/// * `renderer` - Renderer resolving the built-in templates
/// * `wiring` - Settings shared by the module's executables
/// * `parent` - The module's `tests` or `examples` directory
/// * `kind` - Whether the executables are tests or examples
///
/// # Returns
/// * Paths of the written descriptors, in listing order
///
/// # Errors
/// * `Error::Filesystem` if `parent` cannot be listed or a descriptor cannot be written
pub fn expand_sub_projects(
    fs: &dyn FileSystem,
    renderer: &dyn TemplateRenderer,
    wiring: &TargetWiring,
    parent: &Path,
    kind: &TargetKind,
) -> Result<Vec<PathBuf>> {
    let directories = fs.list_subdirectories(parent)?;
    if directories.is_empty() {
        info!("No sub-projects found in {}", parent.display());
        return Ok(Vec::new());
    }

    let mut written = Vec::with_capacity(directories.len());
    for directory in &directories {
        debug!(
            "Writing {} descriptor for '{}'",
            if kind.is_example() { "example" } else { "test" },
            directory.name
        );
        let document = single_target_document(renderer, wiring, directory, kind)?;
        document.flush(fs)?;
        written.push(document.path().to_path_buf());
    }
    Ok(written)
}
