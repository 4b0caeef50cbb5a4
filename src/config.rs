//! Configuration handling for cmakegen.
//! The configuration is a read-only tree of named sections loaded once per run
//! and shared by every module generator. Options are addressed by dotted
//! paths such as `kernel.numerics.BUILD_TESTS`.

use crate::constants::CONFIG_FILES;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// A single configuration value.
///
/// Every JSON/YAML value shape is accepted when loading; a value of the wrong
/// kind only becomes an error when a generator reads that key.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ConfigValue>),
    Section(IndexMap<String, ConfigValue>),
}

impl ConfigValue {
    fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "a boolean",
            ConfigValue::Integer(_) => "an integer",
            ConfigValue::Float(_) => "a number",
            ConfigValue::Text(_) => "a string",
            ConfigValue::List(_) => "a list",
            ConfigValue::Section(_) => "a section",
        }
    }
}

/// Immutable configuration tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    sections: IndexMap<String, ConfigValue>,
}

/// Locates the configuration file in the project root.
///
/// # Arguments
/// * `root` - Project root directory
///
/// # Returns
/// * `Result<PathBuf>` - Path of the first of [`CONFIG_FILES`] that exists
///
/// # Errors
/// * `Error::ConfigError` if none of [`CONFIG_FILES`] exists
pub fn find_config_file<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    for file in CONFIG_FILES {
        let config_path = root.as_ref().join(file);
        if config_path.exists() {
            debug!("Using configuration file {}", config_path.display());
            return Ok(config_path);
        }
    }

    Err(Error::ConfigError(format!(
        "No configuration file found in '{}' (tried: {})",
        root.as_ref().display(),
        CONFIG_FILES.join(", ")
    )))
}

impl Configuration {
    /// Parses configuration content, trying JSON first and YAML second.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the content is neither valid JSON nor valid YAML,
    ///   or its top level is not a mapping
    pub fn parse(content: &str) -> Result<Self> {
        let sections: IndexMap<String, ConfigValue> = match serde_json::from_str(content) {
            Ok(v) => v,
            Err(_) => serde_yaml::from_str(content).map_err(|e| {
                Error::ConfigError(format!("Invalid configuration format: {e}"))
            })?,
        };
        Ok(Self { sections })
    }

    /// Reads and parses a configuration file.
    ///
    /// # Arguments
    /// * `path` - Path of a JSON or YAML configuration file
    ///
    /// # Returns
    /// * `Result<Configuration>` - The parsed configuration tree
    ///
    /// # Errors
    /// * `Error::Filesystem` if the file cannot be read
    /// * `Error::ConfigError` if its content cannot be parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading configuration from {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| Error::filesystem(path, e))?;
        Self::parse(&content)
    }

    /// Looks up a value by dotted path.
    ///
    /// # Arguments
    /// * `key` - Dotted path such as `cengine.rl.BUILD_TESTS`
    ///
    /// # Errors
    /// * `Error::MissingKey` if any segment of the path is absent
    pub fn get(&self, key: &str) -> Result<&ConfigValue> {
        let missing = || Error::MissingKey { key: key.to_string() };
        let mut segments = key.split('.');
        let first = segments.next().ok_or_else(missing)?;
        let mut current = self.sections.get(first).ok_or_else(missing)?;
        for segment in segments {
            current = match current {
                ConfigValue::Section(map) => map.get(segment).ok_or_else(missing)?,
                _ => return Err(missing()),
            };
        }
        Ok(current)
    }

    /// Reads a required boolean option.
    ///
    /// # Errors
    /// * `Error::MissingKey` if the key is absent
    /// * `Error::InvalidValue` if it holds anything but a boolean
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        match self.get(key)? {
            ConfigValue::Bool(value) => Ok(*value),
            other => Err(invalid(key, "a boolean", other)),
        }
    }

    /// Reads a required string option.
    pub fn get_str(&self, key: &str) -> Result<&str> {
        match self.get(key)? {
            ConfigValue::Text(value) => Ok(value),
            other => Err(invalid(key, "a string", other)),
        }
    }

    /// Reads a required scalar option and renders it as text.
    /// Booleans are rendered as CMake `ON`/`OFF`.
    pub fn get_scalar(&self, key: &str) -> Result<String> {
        match self.get(key)? {
            ConfigValue::Bool(value) => Ok(cmake_bool(*value).to_string()),
            ConfigValue::Integer(value) => Ok(value.to_string()),
            ConfigValue::Float(value) => Ok(value.to_string()),
            ConfigValue::Text(value) => Ok(value.clone()),
            other => Err(invalid(key, "a scalar value", other)),
        }
    }
}

/// Renders a boolean the way CMake option variables expect it.
pub fn cmake_bool(value: bool) -> &'static str {
    if value {
        "ON"
    } else {
        "OFF"
    }
}

fn invalid(key: &str, expected: &'static str, found: &ConfigValue) -> Error {
    debug!("'{}' is {}, expected {}", key, found.kind(), expected);
    Error::InvalidValue { key: key.to_string(), expected }
}
