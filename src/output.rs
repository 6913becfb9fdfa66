//! Ansible-compatible JSON rendering of the inventory
//!
//! Produces the dynamic-inventory shape `ansible-inventory` consumes: one key
//! per group with its member hosts, plus a `_meta` block carrying per-host
//! variables. The in-memory store iterates in sorted order, so the rendered
//! document is stable across runs.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::adapters::memory::InMemoryInventory;

/// A group's member list in the `--list` output
#[derive(Debug, Serialize)]
pub struct GroupOutput {
    /// Hosts in this group, sorted
    pub hosts: Vec<String>,
}

/// The `_meta` block carrying per-host variables
#[derive(Debug, Serialize)]
pub struct MetaOutput {
    /// Variables keyed by host name
    pub hostvars: BTreeMap<String, BTreeMap<String, String>>,
}

/// Full dynamic-inventory document
#[derive(Debug, Serialize)]
pub struct InventoryOutput {
    /// Groups keyed by name
    #[serde(flatten)]
    pub groups: BTreeMap<String, GroupOutput>,

    /// Per-host variables
    #[serde(rename = "_meta")]
    pub meta: MetaOutput,
}

impl InventoryOutput {
    /// Render an in-memory inventory into the output shape
    #[must_use]
    pub fn from_inventory(inventory: &InMemoryInventory) -> Self {
        let groups = inventory
            .groups()
            .into_iter()
            .map(|group| {
                let hosts = inventory
                    .group_hosts(group)
                    .unwrap_or_default()
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                (group.to_string(), GroupOutput { hosts })
            })
            .collect();

        let hostvars = inventory
            .hosts()
            .into_iter()
            .map(|host| {
                let vars = inventory.host_vars(host).cloned().unwrap_or_default();
                (host.to_string(), vars)
            })
            .collect();

        Self {
            groups,
            meta: MetaOutput { hostvars },
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Variables for a single host, for `--host` output
///
/// Unknown hosts render as an empty map, matching what Ansible expects from a
/// dynamic inventory script.
#[must_use]
pub fn host_vars(inventory: &InMemoryInventory, host: &str) -> BTreeMap<String, String> {
    inventory.host_vars(host).cloned().unwrap_or_default()
}
