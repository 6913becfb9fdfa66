//! Mapping document loading
//!
//! Resolves the mapping file relative to a base directory, reads it, and
//! parses it into a generic YAML value. Schema checks belong to the builder;
//! this module only cares whether the file exists and parses. A missing or
//! malformed file is an unrecoverable configuration error for the run, so
//! there are no retries.

use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;

/// Default location of the mapping document, relative to the base directory
pub const DEFAULT_MAPPING_FILE: &str = "group_vars/all/service_mapping.yml";

/// Errors that can occur while loading the mapping document
#[derive(Debug, Error)]
pub enum LoadError {
    /// No file at the resolved path
    #[error("service mapping file not found: {0}")]
    NotFound(PathBuf),

    /// The file exists but could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        /// The resolved path that could not be read
        path: PathBuf,
        /// The underlying io error
        #[source]
        source: std::io::Error,
    },

    /// The file content is not valid YAML
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// The resolved path that failed to parse
        path: PathBuf,
        /// The underlying parser error
        #[source]
        source: serde_yaml::Error,
    },
}

/// Load the mapping document at `base_dir`/`mapping_file`
///
/// Returns the parsed document as a generic YAML value; the builder owns
/// schema validation.
pub fn load_mapping(base_dir: &Path, mapping_file: &str) -> Result<Value, LoadError> {
    let path = base_dir.join(mapping_file);

    if !path.exists() {
        return Err(LoadError::NotFound(path));
    }

    let content = fs::read_to_string(&path).map_err(|source| LoadError::Io {
        path: path.clone(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| LoadError::Parse { path, source })
}
