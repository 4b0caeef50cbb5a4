//! cmakegen writes `CMakeLists.txt` descriptors for a multi-module C++ project.
//! A nested configuration decides install prefixes, optional dependencies and
//! which test and example executables get a descriptor; every run rewrites the
//! whole descriptor tree deterministically.

/// Command-line interface module for the cmakegen application
pub mod cli;

/// Configuration loading and typed option access
/// Supports JSON and YAML formats (cmakegen.json, cmakegen.yml, cmakegen.yaml)
pub mod config;

/// Common constants
pub mod constants;

/// Optional third-party dependencies gated by configuration flags
pub mod dependency;

/// Rendered descriptor files
pub mod document;

/// Error types and handling for the cmakegen application
pub mod error;

/// Per-test and per-example executable descriptors
pub mod expander;

/// Directory listing and file writing behind a trait
pub mod fs;

/// Module descriptor generation
pub mod module;

/// Built-in library modules
pub mod modules;

/// MiniJinja rendering of the built-in descriptor templates
pub mod renderer;

/// Nested source-glob descriptors
pub mod sources;

/// Shared descriptor prologue and its hooks
pub mod writer;
