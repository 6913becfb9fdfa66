//! Inventory source configuration
//!
//! The source file is the small YAML document the automation framework points
//! this plugin at. It carries the plugin token (so the framework can tell
//! which plugin owns the file) and the options controlling the build.
//!
//! ```yaml
//! plugin: service_mapping
//! mapping_file: group_vars/all/service_mapping.yml
//! create_all_services_group: true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::adapters::yaml::DEFAULT_MAPPING_FILE;

/// Plugin token a source file must carry to be claimed by this plugin
pub const PLUGIN_NAME: &str = "service_mapping";

/// Errors that can occur while reading a source configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The source file could not be read
    #[error("failed to read source config {path}: {source}")]
    Io {
        /// The source file path
        path: PathBuf,
        /// The underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The source file is not valid YAML or lacks required fields
    #[error("failed to parse source config {path}: {source}")]
    Parse {
        /// The source file path
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: serde_yaml::Error,
    },

    /// The plugin token names a different plugin
    #[error("source config {path} names plugin '{plugin}', expected 'service_mapping'")]
    WrongPlugin {
        /// The source file path
        path: PathBuf,
        /// The token the file carried
        plugin: String,
    },
}

/// Configuration for one inventory source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Plugin token; must be `service_mapping`
    pub plugin: String,

    /// Mapping document path, relative to the source file's directory
    #[serde(default = "default_mapping_file")]
    pub mapping_file: String,

    /// Whether to create the `all_services` aggregate group
    #[serde(default = "default_create_all_services_group")]
    pub create_all_services_group: bool,
}

fn default_mapping_file() -> String {
    DEFAULT_MAPPING_FILE.to_string()
}

const fn default_create_all_services_group() -> bool {
    true
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            plugin: PLUGIN_NAME.to_string(),
            mapping_file: default_mapping_file(),
            create_all_services_group: default_create_all_services_group(),
        }
    }
}

impl SourceConfig {
    /// Load a source configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its
    /// plugin token names a different plugin.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        if config.plugin != PLUGIN_NAME {
            return Err(ConfigError::WrongPlugin {
                path: path.to_path_buf(),
                plugin: config.plugin,
            });
        }

        Ok(config)
    }
}
