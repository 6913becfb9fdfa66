//! Inventory builder - turns a parsed mapping document into graph mutations
//!
//! This is pure business logic: validate the document shape, fold over the
//! service entries in document order, and express every change through the
//! [`InventorySink`] port. Incomplete entries are accumulated as warnings in
//! the returned report, never raised as errors; only a document without a
//! usable `service_mapping` mapping is fatal, and that is checked before any
//! sink call is made.
//!
//! # Examples
//!
//! ```
//! use svcmap::adapters::memory::InMemoryInventory;
//! use svcmap::core::services::{BuildOptions, build_inventory};
//!
//! let document: serde_yaml::Value = serde_yaml::from_str(
//!     "service_mapping:\n  web:\n    hostname: web1\n    ipv6: fd00::1\n",
//! )
//! .unwrap();
//!
//! let mut inventory = InMemoryInventory::new();
//! let report = build_inventory(&document, &BuildOptions::default(), &mut inventory).unwrap();
//! assert_eq!(report.entries, 1);
//! assert_eq!(inventory.group_hosts("web_servers"), Some(vec!["web1"]));
//! ```

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::core::models::{EntryWarning, ServiceEntry};
use crate::core::ports::InventorySink;

/// Name of the aggregate group holding every service host
pub const ALL_SERVICES_GROUP: &str = "all_services";

/// Errors for documents whose shape cannot produce an inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The document was empty or null
    #[error("service mapping document is empty")]
    EmptyDocument,

    /// The top-level `service_mapping` key is missing
    #[error("no 'service_mapping' key found in document")]
    MissingKey,

    /// The `service_mapping` value is not a mapping of services
    #[error("'service_mapping' is not a mapping of services")]
    NotAMapping,
}

/// Options controlling the build
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Whether to create the `all_services` aggregate group
    pub create_all_services_group: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            create_all_services_group: true,
        }
    }
}

/// Outcome of a build: how many entries landed and which were skipped
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    /// Valid entries applied to the sink
    pub entries: usize,
    /// Entries skipped for a missing field, in document order
    pub warnings: Vec<EntryWarning>,
}

/// Build inventory mutations from a parsed mapping document
///
/// Iterates service entries in document order, so repeated runs over the same
/// document produce the same call sequence. Entries missing `hostname` or
/// `ipv6` are skipped and reported in the returned [`BuildReport`]; the
/// remaining entries are still processed.
pub fn build_inventory(
    document: &Value,
    options: &BuildOptions,
    sink: &mut dyn InventorySink,
) -> Result<BuildReport, SchemaError> {
    let services = service_mapping(document)?;

    if options.create_all_services_group {
        // Unconditional: the aggregate group exists even if no entry validates
        sink.add_group(ALL_SERVICES_GROUP);
    }

    let mut report = BuildReport::default();

    for (key, value) in services {
        // Mapping keys that are not scalars cannot name a group; skip them
        let Some(service) = service_name(key) else {
            continue;
        };

        match ServiceEntry::from_yaml(&service, value) {
            Ok(entry) => {
                apply_entry(&entry, options, sink);
                report.entries += 1;
            },
            Err(warning) => report.warnings.push(warning),
        }
    }

    Ok(report)
}

/// Emit the mutations for one valid entry
fn apply_entry(entry: &ServiceEntry, options: &BuildOptions, sink: &mut dyn InventorySink) {
    let group = entry.group_name();
    sink.add_group(&group);
    sink.add_host(&entry.hostname, &group);

    sink.set_variable(&entry.hostname, "ansible_host", &entry.ipv6);
    sink.set_variable(&entry.hostname, "service_name", &entry.service);
    sink.set_variable(&entry.hostname, "service_ipv6", &entry.ipv6);
    if let Some(ipv4) = &entry.ipv4 {
        sink.set_variable(&entry.hostname, "service_ipv4", ipv4);
    }

    if options.create_all_services_group {
        sink.add_host(&entry.hostname, ALL_SERVICES_GROUP);
    }
}

/// Pull the `service_mapping` mapping out of the parsed document
fn service_mapping(document: &Value) -> Result<&Mapping, SchemaError> {
    if document.is_null() {
        return Err(SchemaError::EmptyDocument);
    }

    match document.get("service_mapping") {
        Some(Value::Mapping(services)) => Ok(services),
        Some(_) => Err(SchemaError::NotAMapping),
        None => Err(SchemaError::MissingKey),
    }
}

/// Render a scalar mapping key as a service name
///
/// YAML allows non-string scalar keys (`8080:`); they name groups the same
/// way their document text reads.
fn service_name(key: &Value) -> Option<String> {
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
