use super::{kernel_library_dirs, resolve_dependencies, ModuleProfile, TRILINOS_LIBRARIES};
use crate::config::{cmake_bool, Configuration};
use crate::dependency::OptionalDependency;
use crate::error::Result;
use crate::module::ModuleDescriptorSpec;
use crate::writer::DescriptorHooks;
use std::path::Path;

/// Numerical solvers library of the kernel (`kernel_numerics`).
#[derive(Debug, Default, Clone, Copy)]
pub struct NumericsModule;

impl NumericsModule {
    const DEPENDENCIES: [(OptionalDependency, &'static [&'static str]); 1] =
        [(OptionalDependency::Trilinos, TRILINOS_LIBRARIES)];
}

impl DescriptorHooks for NumericsModule {
    // Sources use kernel/base/config.h, so only the Trilinos variables are set.
    fn project_variables(&self, config: &Configuration) -> Result<Vec<String>> {
        if !config.get_bool("trilinos.USE_TRILINOS")? {
            return Ok(Vec::new());
        }
        Ok(vec![
            "SET(USE_TRILINOS ON)".to_string(),
            format!(
                "SET(USE_TRILINOS_LONG_LONG_TYPE {})",
                cmake_bool(config.get_bool("trilinos.USE_TRILINOS_LONG_LONG_TYPE")?)
            ),
            format!("SET(TRILINOS_INCL_DIR {})", config.get_str("trilinos.TRILINOS_INCL_DIR")?),
            format!("SET(TRILINOS_LIB_DIR {})", config.get_str("trilinos.TRILINOS_LIB_DIR")?),
        ])
    }
}

impl ModuleProfile for NumericsModule {
    fn name(&self) -> &'static str {
        "numerics"
    }

    fn project_name(&self) -> &'static str {
        "kernel_numerics"
    }

    fn hooks(&self) -> &dyn DescriptorHooks {
        self
    }

    fn descriptor_spec(&self, config: &Configuration, root: &Path) -> Result<ModuleDescriptorSpec> {
        let module_dir = root.join("kernel").join("numerics");
        let install_prefix = config.get_str("kernel.CMAKE_INSTALL_PREFIX")?.to_string();
        Ok(ModuleDescriptorSpec {
            project_name: self.project_name().to_string(),
            source_dir: module_dir.join("src").join("kernel").join("numerics"),
            module_dir,
            link_prefixes: vec![install_prefix.clone()],
            install_prefix,
            sibling_dirs: kernel_library_dirs(root),
            dependencies: resolve_dependencies(config, &Self::DEPENDENCIES)?,
            build_tests: config.get_bool("kernel.numerics.BUILD_TESTS")?,
            build_examples: config.get_bool("kernel.numerics.BUILD_EXAMPLES")?,
        })
    }
}
