//! Descriptor rendering for cmakegen.
//! Every descriptor is produced from one of the built-in MiniJinja templates
//! embedded in the binary; contexts are plain JSON values.
use crate::error::{Error, Result};
use minijinja::{AutoEscape, Environment};

/// Top-level module descriptor.
pub const MODULE_TEMPLATE: &str = "module.cmake.j2";
/// Nested source-glob descriptor.
pub const SOURCES_TEMPLATE: &str = "sources.cmake.j2";
/// Per-test / per-example executable descriptor.
pub const SINGLE_TARGET_TEMPLATE: &str = "single_target.cmake.j2";

const BUILTIN_TEMPLATES: [(&str, &str); 7] = [
    ("prologue.cmake.j2", include_str!("templates/prologue.cmake.j2")),
    ("find_boost.cmake.j2", include_str!("templates/find_boost.cmake.j2")),
    ("find_blas.cmake.j2", include_str!("templates/find_blas.cmake.j2")),
    ("build_options.cmake.j2", include_str!("templates/build_options.cmake.j2")),
    (MODULE_TEMPLATE, include_str!("templates/module.cmake.j2")),
    (SOURCES_TEMPLATE, include_str!("templates/sources.cmake.j2")),
    (SINGLE_TARGET_TEMPLATE, include_str!("templates/single_target.cmake.j2")),
];

fn builtin_template(name: &str) -> Option<&'static str> {
    BUILTIN_TEMPLATES.iter().find(|(key, _)| *key == name).map(|(_, source)| *source)
}

/// Trait for descriptor rendering engines.
pub trait TemplateRenderer {
    /// Renders the named template with the given context.
    ///
    /// # Arguments
    /// * `template` - Name of a built-in template
    /// * `context` - Context variables for rendering
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based descriptor renderer.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a renderer that resolves the built-in descriptor templates.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(|name| Ok(builtin_template(name).map(str::to_string)));
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::MinijinjaError` if the template is unknown or fails to render
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        let tmpl = self.env.get_template(template).map_err(Error::MinijinjaError)?;
        tmpl.render(context).map_err(Error::MinijinjaError)
    }
}
