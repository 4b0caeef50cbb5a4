//! Error handling for cmakegen.
//! Defines the error type and result alias used throughout the generator.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading configuration or writing descriptors.
#[derive(Error, Debug)]
pub enum Error {
    /// A required configuration key or section is absent.
    #[error("Missing configuration key '{key}'.")]
    MissingKey { key: String },

    /// A configuration key exists but holds a value of the wrong kind.
    #[error("Configuration key '{key}' must be {expected}.")]
    InvalidValue { key: String, expected: &'static str },

    /// Configuration file could not be located or parsed.
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// A descriptor could not be written or a discovery path could not be listed.
    #[error("Filesystem error at '{}': {}.", .path.display(), .source)]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure while generating a specific module, wrapping the underlying cause.
    #[error("Module '{module}' failed: {source}")]
    Module {
        module: String,
        #[source]
        source: Box<Error>,
    },

    /// One or more modules failed while the driver kept going.
    #[error("Generation failed for: {}.", .0.join(", "))]
    GenerationFailed(Vec<String>),

    /// No built-in module matches the requested pattern.
    #[error("No module matches '{0}'.")]
    UnknownModule(String),

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Descriptor template failed to render.
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),
}

impl Error {
    /// Attaches the module name to an error raised while generating it.
    pub fn in_module<S: Into<String>>(self, module: S) -> Self {
        match self {
            Error::Module { .. } => self,
            other => Error::Module { module: module.into(), source: Box::new(other) },
        }
    }

    pub(crate) fn filesystem<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        Error::Filesystem { path: path.into(), source }
    }
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
