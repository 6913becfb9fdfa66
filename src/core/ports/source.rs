//! Inventory source port
//!
//! An inventory source is the capability the host framework invokes to
//! populate an inventory: first it asks whether a source file belongs to this
//! plugin, then it hands over the parsed configuration and a sink to build
//! into.

use std::path::Path;

use crate::config::SourceConfig;
use crate::core::ports::InventorySink;
use crate::core::services::builder::BuildReport;

/// A plugin that can populate an inventory from a source file
pub trait InventorySource {
    /// Check whether the given path is a source file this plugin accepts
    fn verify_source(&self, path: &Path) -> bool;

    /// Build the inventory described by `config` into `sink`
    ///
    /// Returns a report with the applied entry count and any per-entry
    /// warnings.
    fn build(
        &self,
        config: &SourceConfig,
        sink: &mut dyn InventorySink,
    ) -> anyhow::Result<BuildReport>;
}
