use super::{kernel_library_dirs, resolve_dependencies, ModuleProfile, TRILINOS_LIBRARIES};
use crate::config::Configuration;
use crate::dependency::OptionalDependency;
use crate::error::Result;
use crate::module::ModuleDescriptorSpec;
use crate::writer::DescriptorHooks;
use std::path::Path;

/// Reinforcement-learning library of the engine (`cengine_rl`).
#[derive(Debug, Default, Clone, Copy)]
pub struct RlModule;

impl RlModule {
    const DEPENDENCIES: [(OptionalDependency, &'static [&'static str]); 2] = [
        (OptionalDependency::Trilinos, TRILINOS_LIBRARIES),
        (OptionalDependency::OpenCv, &["${OpenCV_LIBS}"]),
    ];
}

// Uses the kernel and engine config headers; nothing to configure here.
impl DescriptorHooks for RlModule {}

impl ModuleProfile for RlModule {
    fn name(&self) -> &'static str {
        "rl"
    }

    fn project_name(&self) -> &'static str {
        "cengine_rl"
    }

    fn hooks(&self) -> &dyn DescriptorHooks {
        self
    }

    fn descriptor_spec(&self, config: &Configuration, root: &Path) -> Result<ModuleDescriptorSpec> {
        let module_dir = root.join("cubic_engine").join("rl");
        let install_prefix = config.get_str("cengine.CMAKE_INSTALL_PREFIX")?.to_string();
        let kernel_prefix = config.get_str("kernel.CMAKE_INSTALL_PREFIX")?.to_string();

        let mut sibling_dirs = kernel_library_dirs(root);
        sibling_dirs.push(root.join("kernel").join("numerics"));

        Ok(ModuleDescriptorSpec {
            project_name: self.project_name().to_string(),
            source_dir: module_dir.join("src").join("cubic_engine").join("rl"),
            module_dir,
            link_prefixes: vec![install_prefix.clone(), kernel_prefix],
            install_prefix,
            sibling_dirs,
            dependencies: resolve_dependencies(config, &Self::DEPENDENCIES)?,
            build_tests: config.get_bool("cengine.rl.BUILD_TESTS")?,
            build_examples: config.get_bool("cengine.rl.BUILD_EXAMPLES")?,
        })
    }
}
