//! Module descriptor generation.
//!
//! A module yields exactly one top-level descriptor, one nested source-glob
//! descriptor and, when enabled, one descriptor per test and per example
//! directory. Documents are written in that order.

use crate::config::Configuration;
use crate::constants::{DESCRIPTOR_FILE, EXAMPLES_DIR, TESTS_DIR};
use crate::dependency::ResolvedDependency;
use crate::document::{cmake_path, DescriptorDocument};
use crate::error::Result;
use crate::expander::{expand_sub_projects, TargetKind, TargetWiring, TestFramework};
use crate::fs::FileSystem;
use crate::renderer::{TemplateRenderer, MODULE_TEMPLATE};
use crate::sources::sources_document;
use crate::writer::{prologue_context, BuildOptions, DescriptorHooks};
use log::info;
use serde_json::{json, Value};
use std::path::PathBuf;

/// Include path of the module's own headers, relative to its descriptor.
const OWN_SOURCE_DIR: &str = "${PROJECT_SOURCE_DIR}/src/";

/// Per-module generation parameters.
#[derive(Debug, Clone)]
pub struct ModuleDescriptorSpec {
    /// Name of the project and of its shared library target
    pub project_name: String,
    /// Directory receiving the top-level descriptor
    pub module_dir: PathBuf,
    /// Directory whose sources are globbed into the target
    pub source_dir: PathBuf,
    pub install_prefix: String,
    /// Prefixes searched for libraries by the module's executables
    pub link_prefixes: Vec<String>,
    /// Sibling module directories whose `src` trees are included, in order
    pub sibling_dirs: Vec<PathBuf>,
    /// Enabled optional dependencies, in the module's declared order
    pub dependencies: Vec<ResolvedDependency>,
    pub build_tests: bool,
    pub build_examples: bool,
}

impl ModuleDescriptorSpec {
    /// Location of the module's top-level descriptor.
    pub fn descriptor_path(&self) -> PathBuf {
        self.module_dir.join(DESCRIPTOR_FILE)
    }

    /// Location of the nested source-glob descriptor.
    pub fn sources_descriptor_path(&self) -> PathBuf {
        self.source_dir.join(DESCRIPTOR_FILE)
    }

    /// Directory whose sub-directories are test executables.
    pub fn tests_dir(&self) -> PathBuf {
        self.module_dir.join(TESTS_DIR)
    }

    pub fn examples_dir(&self) -> PathBuf {
        self.module_dir.join(EXAMPLES_DIR)
    }

    fn sibling_source_dirs(&self) -> impl Iterator<Item = String> + '_ {
        self.sibling_dirs.iter().map(|dir| cmake_path(&dir.join("src")))
    }

    /// Include paths of the library target: toolkits, own sources, siblings,
    /// then enabled optional dependencies.
    pub fn include_dirs(&self, build: &BuildOptions) -> Vec<String> {
        let mut dirs = build.toolkit_include_dirs();
        dirs.push(OWN_SOURCE_DIR.to_string());
        dirs.extend(self.sibling_source_dirs());
        dirs.extend(self.dependencies.iter().map(|dep| dep.include_dir.clone()));
        dirs
    }

    /// Wiring shared by the module's test and example executables.
    pub fn target_wiring(&self, build: &BuildOptions) -> TargetWiring {
        let mut source_include_dirs = vec![cmake_path(&self.module_dir.join("src"))];
        source_include_dirs.extend(self.sibling_source_dirs());
        TargetWiring {
            library: self.project_name.clone(),
            build: build.clone(),
            source_include_dirs,
            link_prefixes: self.link_prefixes.clone(),
            dependencies: self.dependencies.clone(),
        }
    }
}

/// Renders the top-level descriptor of a module.
///
/// # Arguments
/// * `config` - Run configuration, passed to the hooks
/// * `renderer` - Renderer resolving the built-in templates
/// * `spec` - Module parameters
/// * `build` - Compiler and toolkit options
/// * `hooks` - Prologue hooks of the module
///
/// # Returns
/// * `Result<DescriptorDocument>` - The unwritten module descriptor
pub fn module_document(
    config: &Configuration,
    renderer: &dyn TemplateRenderer,
    spec: &ModuleDescriptorSpec,
    build: &BuildOptions,
    hooks: &dyn DescriptorHooks,
) -> Result<DescriptorDocument> {
    let mut context =
        prologue_context(config, build, &spec.project_name, &spec.install_prefix, hooks)?;
    context.insert("include_dirs".to_string(), json!(spec.include_dirs(build)));
    context.insert("source_dir".to_string(), json!(cmake_path(&spec.source_dir)));

    let contents = renderer.render(MODULE_TEMPLATE, &Value::Object(context))?;
    Ok(DescriptorDocument::new(spec.descriptor_path(), contents))
}

/// Writes every descriptor of one module.
///
/// Every option the module needs is read before the first document is
/// written, so a missing key leaves the module's previous output untouched.
///
/// # Arguments
/// * `config` - Run configuration
/// * `fs` - Filesystem the descriptors are discovered in and written to
/// * `renderer` - Renderer resolving the built-in templates
/// * `spec` - Module parameters
/// * `hooks` - Prologue hooks of the module
///
/// # Returns
/// * Paths of all written descriptors, in write order
///
/// # Errors
/// * `Error::MissingKey` / `Error::InvalidValue` for configuration problems
/// * `Error::Filesystem` if a directory cannot be listed or a file written
pub fn generate_module(
    config: &Configuration,
    fs: &dyn FileSystem,
    renderer: &dyn TemplateRenderer,
    spec: &ModuleDescriptorSpec,
    hooks: &dyn DescriptorHooks,
) -> Result<Vec<PathBuf>> {
    info!("Writing CMakeLists for project {}", spec.project_name);

    let build = BuildOptions::from_config(config)?;
    let test_framework =
        if spec.build_tests { Some(TestFramework::from_config(config)?) } else { None };

    let module = module_document(config, renderer, spec, &build, hooks)?;
    let sources = sources_document(renderer, spec)?;

    let mut written = Vec::new();
    for document in [&module, &sources] {
        document.flush(fs)?;
        written.push(document.path().to_path_buf());
    }

    let wiring = spec.target_wiring(&build);
    if let Some(framework) = test_framework {
        let kind = TargetKind::Test(framework);
        written.extend(expand_sub_projects(fs, renderer, &wiring, &spec.tests_dir(), &kind)?);
    }
    if spec.build_examples {
        let kind = TargetKind::Example;
        written.extend(expand_sub_projects(fs, renderer, &wiring, &spec.examples_dir(), &kind)?);
    }

    info!("Done, {} descriptors written for {}", written.len(), spec.project_name);
    Ok(written)
}
