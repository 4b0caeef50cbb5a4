//! Nested descriptor collecting a module's sources by wildcard.

use crate::constants::SOURCE_EXTENSION;
use crate::document::{cmake_path, DescriptorDocument};
use crate::error::Result;
use crate::module::ModuleDescriptorSpec;
use crate::renderer::{TemplateRenderer, SOURCES_TEMPLATE};
use serde_json::json;

/// Renders the source-glob descriptor placed in the module's source directory.
///
/// The glob matches `<src>/*.cpp` and `<src>/*/*.cpp` and attaches the matches
/// to the module target as public sources. It is regenerated in full on every
/// run.
///
/// # Arguments
/// * `renderer` - Renderer resolving the built-in templates
/// * `spec` - Module whose source directory is globbed
///
/// # Returns
/// * `Result<DescriptorDocument>` - The unwritten descriptor at `<src>/CMakeLists.txt`
pub fn sources_document(
    renderer: &dyn TemplateRenderer,
    spec: &ModuleDescriptorSpec,
) -> Result<DescriptorDocument> {
    let context = json!({
        "project_name": spec.project_name,
        "source_dir": cmake_path(&spec.source_dir),
        "extension": SOURCE_EXTENSION,
    });
    let contents = renderer.render(SOURCES_TEMPLATE, &context)?;
    Ok(DescriptorDocument::new(spec.sources_descriptor_path(), contents))
}
