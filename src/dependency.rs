//! Optional third-party dependencies gated by configuration flags.

use crate::config::Configuration;
use crate::error::Result;

/// An optional dependency a module may wire in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionalDependency {
    /// Trilinos linear-algebra and solver toolkit
    Trilinos,
    /// OpenCV computer-vision library
    OpenCv,
}

impl OptionalDependency {
    /// Boolean option switching the dependency on.
    fn enable_key(self) -> String {
        match self {
            OptionalDependency::Trilinos => "trilinos.USE_TRILINOS".to_string(),
            OptionalDependency::OpenCv => "opencv.USE_OPEN_CV".to_string(),
        }
    }

    fn include_key(self) -> String {
        match self {
            OptionalDependency::Trilinos => "trilinos.TRILINOS_INCL_DIR".to_string(),
            OptionalDependency::OpenCv => "opencv.OPENCV_INCL_DIR".to_string(),
        }
    }

    fn library_dir_key(self) -> Option<String> {
        match self {
            OptionalDependency::Trilinos => Some("trilinos.TRILINOS_LIB_DIR".to_string()),
            OptionalDependency::OpenCv => None,
        }
    }

    /// Statements locating the dependency in a standalone descriptor.
    fn discovery(self) -> Vec<String> {
        match self {
            OptionalDependency::Trilinos => vec![
                "FIND_PACKAGE(Trilinos REQUIRED)".to_string(),
                "MESSAGE(STATUS \"Trilinos version: ${Trilinos_VERSION}\")".to_string(),
            ],
            OptionalDependency::OpenCv => vec![
                "FIND_PACKAGE(OpenCV REQUIRED)".to_string(),
                "MESSAGE(STATUS \"OpenCV version: ${OpenCV_VERSION}\")".to_string(),
            ],
        }
    }

    /// Reads the enable flag and, when set, the dependency's paths.
    ///
    /// No other key is read while the dependency is disabled.
    ///
    /// # Arguments
    /// * `config` - Run configuration
    /// * `link_libraries` - Libraries executables link when the dependency is on
    ///
    /// # Returns
    /// * `Result<Option<ResolvedDependency>>` - `None` when the dependency is disabled
    ///
    /// # Errors
    /// * `Error::MissingKey` if the flag, or a path of an enabled dependency, is absent
    pub fn resolve(
        self,
        config: &Configuration,
        link_libraries: &[&str],
    ) -> Result<Option<ResolvedDependency>> {
        if !config.get_bool(&self.enable_key())? {
            return Ok(None);
        }
        let include_dir = config.get_str(&self.include_key())?.to_string();
        let library_dir = match self.library_dir_key() {
            Some(key) => Some(config.get_str(&key)?.to_string()),
            None => None,
        };
        Ok(Some(ResolvedDependency {
            dependency: self,
            include_dir,
            library_dir,
            link_libraries: link_libraries.iter().map(|lib| lib.to_string()).collect(),
        }))
    }
}

/// An enabled dependency together with the paths and libraries a module uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependency {
    pub dependency: OptionalDependency,
    pub include_dir: String,
    pub library_dir: Option<String>,
    /// Libraries linked into executables, in the module's fixed order
    pub link_libraries: Vec<String>,
}

impl ResolvedDependency {
    /// `FIND_PACKAGE` and version report statements of the dependency.
    pub fn discovery(&self) -> Vec<String> {
        self.dependency.discovery()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_dependency_reads_only_flag() {
        let config = Configuration::parse("trilinos:\n  USE_TRILINOS: false\n").unwrap();
        let resolved = OptionalDependency::Trilinos.resolve(&config, &["epetra"]).unwrap();
        assert!(resolved.is_none());
    }

    #[test]
    fn test_enabled_dependency_requires_paths() {
        let config = Configuration::parse("trilinos:\n  USE_TRILINOS: true\n").unwrap();
        assert!(OptionalDependency::Trilinos.resolve(&config, &[]).is_err());

        let config = Configuration::parse(
            "opencv:\n  USE_OPEN_CV: true\n  OPENCV_INCL_DIR: /opt/opencv/include\n",
        )
        .unwrap();
        let resolved =
            OptionalDependency::OpenCv.resolve(&config, &["${OpenCV_LIBS}"]).unwrap().unwrap();
        assert_eq!(resolved.include_dir, "/opt/opencv/include");
        assert_eq!(resolved.library_dir, None);
        assert_eq!(resolved.link_libraries, vec!["${OpenCV_LIBS}"]);
    }
}
