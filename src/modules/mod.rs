//! Built-in library modules.
//!
//! Each module is a [`ModuleProfile`]: it knows where it lives under the
//! project root, which configuration section holds its flags, which sibling
//! modules it includes and which optional dependencies it wires in, in which
//! order.

use crate::config::Configuration;
use crate::dependency::{OptionalDependency, ResolvedDependency};
use crate::error::{Error, Result};
use crate::fs::FileSystem;
use crate::module::{generate_module, ModuleDescriptorSpec};
use crate::renderer::TemplateRenderer;
use crate::writer::DescriptorHooks;
use globset::{Glob, GlobSetBuilder};
use log::{error, info};
use std::path::{Path, PathBuf};

mod numerics;
mod rl;

pub use numerics::NumericsModule;
pub use rl::RlModule;

/// Kernel libraries every module compiles against, in include order.
pub const KERNEL_LIBRARIES: [&str; 3] = ["utilities", "maths", "parallel"];

/// Libraries linked for Trilinos, in link order.
const TRILINOS_LIBRARIES: &[&str] = &["epetra", "aztecoo", "amesos"];

/// A library module the generator knows how to describe.
pub trait ModuleProfile {
    /// Short name used to select the module on the command line.
    fn name(&self) -> &'static str;

    /// Name of the CMake project and library target.
    fn project_name(&self) -> &'static str;

    /// Prologue hooks of the module.
    fn hooks(&self) -> &dyn DescriptorHooks;

    /// Resolves the module's generation parameters against the configuration.
    ///
    /// # Errors
    /// * `Error::MissingKey` / `Error::InvalidValue` for any option it reads
    fn descriptor_spec(&self, config: &Configuration, root: &Path) -> Result<ModuleDescriptorSpec>;
}

/// All built-in modules, in generation order.
pub fn builtin_modules() -> Vec<Box<dyn ModuleProfile>> {
    vec![Box::new(NumericsModule), Box::new(RlModule)]
}

/// Selects the built-in modules whose name or project name matches any of the
/// glob `patterns`. An empty pattern list selects every module.
///
/// # Errors
/// * `Error::ConfigError` for an invalid pattern
/// * `Error::UnknownModule` if a pattern matches nothing
pub fn select_modules(patterns: &[String]) -> Result<Vec<Box<dyn ModuleProfile>>> {
    let modules = builtin_modules();
    if patterns.is_empty() {
        return Ok(modules);
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| Error::ConfigError(format!("invalid module pattern: {e}")))?;
        let matcher = glob.compile_matcher();
        if !modules.iter().any(|m| matcher.is_match(m.name()) || matcher.is_match(m.project_name()))
        {
            return Err(Error::UnknownModule(pattern.clone()));
        }
        builder.add(glob);
    }
    let set = builder
        .build()
        .map_err(|e| Error::ConfigError(format!("invalid module pattern: {e}")))?;

    Ok(modules
        .into_iter()
        .filter(|m| set.is_match(m.name()) || set.is_match(m.project_name()))
        .collect())
}

/// Generates every descriptor of `profile` under `root`.
///
/// Any error is tagged with the module's project name.
pub fn generate(
    config: &Configuration,
    fs: &dyn FileSystem,
    renderer: &dyn TemplateRenderer,
    profile: &dyn ModuleProfile,
    root: &Path,
) -> Result<Vec<PathBuf>> {
    profile
        .descriptor_spec(config, root)
        .and_then(|spec| generate_module(config, fs, renderer, &spec, profile.hooks()))
        .map_err(|e| e.in_module(profile.project_name()))
}

/// Generates every module in `modules`, in order.
///
/// # Arguments
/// * `modules` - Modules to generate, usually from [`select_modules`]
/// * `root` - Project root holding the module directories
/// * `keep_going` - Continue with the remaining modules after a failure
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - Paths of all written descriptors, in write order
///
/// # Errors
/// * `Error::Module` for the first failing module when `keep_going` is off
/// * `Error::GenerationFailed` naming every failed module when it is on
pub fn generate_selected(
    config: &Configuration,
    fs: &dyn FileSystem,
    renderer: &dyn TemplateRenderer,
    modules: &[Box<dyn ModuleProfile>],
    root: &Path,
    keep_going: bool,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut failed = Vec::new();
    for module in modules {
        match generate(config, fs, renderer, module.as_ref(), root) {
            Ok(paths) => {
                info!("{}: {} descriptors written", module.project_name(), paths.len());
                written.extend(paths);
            }
            Err(e) if keep_going => {
                error!("{}", e);
                failed.push(module.project_name().to_string());
            }
            Err(e) => return Err(e),
        }
    }

    if !failed.is_empty() {
        return Err(Error::GenerationFailed(failed));
    }
    Ok(written)
}

/// Directories of the kernel libraries under `root`.
fn kernel_library_dirs(root: &Path) -> Vec<PathBuf> {
    KERNEL_LIBRARIES.iter().map(|lib| root.join("kernel").join("kernel").join(lib)).collect()
}

/// Resolves a module's optional dependencies, keeping only enabled ones.
fn resolve_dependencies(
    config: &Configuration,
    wiring: &[(OptionalDependency, &[&str])],
) -> Result<Vec<ResolvedDependency>> {
    let mut resolved = Vec::new();
    for (dependency, libraries) in wiring {
        if let Some(dependency) = dependency.resolve(config, libraries)? {
            resolved.push(dependency);
        }
    }
    Ok(resolved)
}
