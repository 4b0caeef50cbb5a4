//! Shared prologue of every module descriptor.
//!
//! The prologue declares the minimum CMake version, the compiler, the project
//! and its install prefix, then the statements contributed by the two
//! [`DescriptorHooks`], then Boost and BLAS discovery and the build options.

use crate::config::Configuration;
use crate::constants::CMAKE_MINIMUM_VERSION;
use crate::error::Result;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Override points a module uses to inject statements into its prologue.
/// Both default to contributing nothing.
pub trait DescriptorHooks {
    /// Statements generating configure-time files such as `config.h`.
    fn configure_files(&self, _config: &Configuration) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    /// Variable assignments the module's sources or sub-directories rely on.
    fn project_variables(&self, _config: &Configuration) -> Result<Vec<String>> {
        Ok(Vec::new())
    }
}

/// Hooks of a module that needs no extra prologue statements.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoHooks;

impl DescriptorHooks for NoHooks {}

/// Compiler and toolkit options read from the `build` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    pub compiler: String,
    pub build_type: String,
    pub cxx_standard: String,
    pub cxx_flags: String,
    pub use_openmp: bool,
    pub use_log: bool,
    pub blaze_include_dir: String,
    pub boost_include_dir: String,
    pub json_include_dir: String,
}

impl BuildOptions {
    /// Reads the compiler and toolkit options from the `build` section.
    ///
    /// # Errors
    /// * `Error::MissingKey` / `Error::InvalidValue` for any absent or mistyped option
    pub fn from_config(config: &Configuration) -> Result<Self> {
        Ok(Self {
            compiler: config.get_str("build.CMAKE_CXX_COMPILER")?.to_string(),
            build_type: config.get_str("build.CMAKE_BUILD_TYPE")?.to_string(),
            cxx_standard: config.get_scalar("build.CMAKE_CXX_STANDARD")?,
            cxx_flags: config.get_str("build.CMAKE_CXX_FLAGS")?.to_string(),
            use_openmp: config.get_bool("build.USE_OPENMP")?,
            use_log: config.get_bool("build.USE_LOG")?,
            blaze_include_dir: config.get_str("build.BLAZE_INCL_DIR")?.to_string(),
            boost_include_dir: config.get_str("build.BOOST_INCLUDEDIR")?.to_string(),
            json_include_dir: config.get_str("build.NLOHMANN_JSON_INCL_DIR")?.to_string(),
        })
    }

    /// Header locations of the toolkits every target compiles against.
    pub fn toolkit_include_dirs(&self) -> Vec<String> {
        vec![
            self.blaze_include_dir.clone(),
            "${Boost_INCLUDE_DIRS}".to_string(),
            self.json_include_dir.clone(),
        ]
    }
}

/// Context shared by every template that includes the build options.
pub fn build_context(build: &BuildOptions) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert("cmake_minimum_version".to_string(), json!(CMAKE_MINIMUM_VERSION));
    context.insert("build".to_string(), json!(build));
    context
}

/// Context of the module prologue, with the hook statements already resolved.
///
/// # Arguments
/// * `config` - Run configuration, passed to the hooks
/// * `build` - Compiler and toolkit options
/// * `project_name` - Project and library target name
/// * `install_prefix` - Value of `CMAKE_INSTALL_PREFIX`
/// * `hooks` - Prologue hooks of the module
///
/// # Errors
/// * Whatever a hook returns, typically `Error::MissingKey`
pub fn prologue_context(
    config: &Configuration,
    build: &BuildOptions,
    project_name: &str,
    install_prefix: &str,
    hooks: &dyn DescriptorHooks,
) -> Result<Map<String, Value>> {
    let mut context = build_context(build);
    context.insert("project_name".to_string(), json!(project_name));
    context.insert("install_prefix".to_string(), json!(install_prefix));
    context.insert("project_variables".to_string(), json!(hooks.project_variables(config)?));
    context.insert("configure_files".to_string(), json!(hooks.configure_files(config)?));
    Ok(context)
}
