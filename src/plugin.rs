//! The service_mapping inventory source
//!
//! Glues the loader and the builder together behind the [`InventorySource`]
//! capability: verify that a source file belongs to this plugin, then build
//! the inventory it describes. Mapping paths are resolved against the base
//! directory the plugin was constructed with (normally the directory holding
//! the source file).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::adapters::yaml::{self, LoadError};
use crate::config::SourceConfig;
use crate::core::ports::{InventorySink, InventorySource};
use crate::core::services::builder::{self, BuildOptions, BuildReport, SchemaError};

/// Fatal errors from a build run
#[derive(Debug, Error)]
pub enum BuildError {
    /// The mapping document could not be loaded
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The mapping document has the wrong shape
    #[error("{path}: {source}")]
    Schema {
        /// The mapping document path
        path: PathBuf,
        /// The shape violation
        #[source]
        source: SchemaError,
    },
}

/// The `service_mapping` inventory source plugin
#[derive(Debug, Clone)]
pub struct ServiceMappingPlugin {
    /// Directory mapping file paths are resolved against
    base_dir: PathBuf,
}

impl ServiceMappingPlugin {
    /// Create a plugin resolving mapping files against `base_dir`
    #[must_use]
    pub const fn new(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Load the mapping document and build the inventory into `sink`
    ///
    /// # Errors
    ///
    /// Fatal on a missing, unreadable, or unparseable mapping file and on a
    /// document without a `service_mapping` mapping. Incomplete entries are
    /// not errors; they come back as warnings in the report.
    pub fn build_into(
        &self,
        config: &SourceConfig,
        sink: &mut dyn InventorySink,
    ) -> Result<BuildReport, BuildError> {
        let document = yaml::load_mapping(&self.base_dir, &config.mapping_file)?;

        let options = BuildOptions {
            create_all_services_group: config.create_all_services_group,
        };

        builder::build_inventory(&document, &options, sink).map_err(|source| {
            BuildError::Schema {
                path: self.base_dir.join(&config.mapping_file),
                source,
            }
        })
    }
}

impl InventorySource for ServiceMappingPlugin {
    fn verify_source(&self, path: &Path) -> bool {
        // Same acceptance rule the automation framework applies: a YAML file
        // whose configuration carries our plugin token.
        let is_yaml = path.extension().is_some_and(|ext| ext == "yml" || ext == "yaml");
        is_yaml && SourceConfig::load(path).is_ok()
    }

    fn build(
        &self,
        config: &SourceConfig,
        sink: &mut dyn InventorySink,
    ) -> anyhow::Result<BuildReport> {
        Ok(self.build_into(config, sink)?)
    }
}
