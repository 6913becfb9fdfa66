//! In-memory inventory store
//!
//! A minimal stand-in for the automation framework's inventory. Groups and
//! hosts are created on first reference and never deleted; duplicate adds are
//! no-ops, so the builder may call `add_group`/`add_host` freely. BTree
//! storage keeps iteration order stable across runs.

use std::collections::{BTreeMap, BTreeSet};

use crate::core::ports::InventorySink;

/// An inventory graph held in memory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryInventory {
    /// Group name -> member host names
    groups: BTreeMap<String, BTreeSet<String>>,
    /// Host name -> variable map
    hostvars: BTreeMap<String, BTreeMap<String, String>>,
}

impl InMemoryInventory {
    /// Create an empty inventory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All group names, sorted
    #[must_use]
    pub fn groups(&self) -> Vec<&str> {
        self.groups.keys().map(String::as_str).collect()
    }

    /// Hosts in a group, sorted, or `None` if the group does not exist
    #[must_use]
    pub fn group_hosts(&self, group: &str) -> Option<Vec<&str>> {
        self.groups.get(group).map(|hosts| hosts.iter().map(String::as_str).collect())
    }

    /// All host names, sorted
    #[must_use]
    pub fn hosts(&self) -> Vec<&str> {
        self.hostvars.keys().map(String::as_str).collect()
    }

    /// Variables set on a host, or `None` if the host does not exist
    #[must_use]
    pub fn host_vars(&self, host: &str) -> Option<&BTreeMap<String, String>> {
        self.hostvars.get(host)
    }
}

impl InventorySink for InMemoryInventory {
    fn add_group(&mut self, name: &str) {
        self.groups.entry(name.to_string()).or_default();
    }

    fn add_host(&mut self, name: &str, group: &str) {
        self.groups.entry(group.to_string()).or_default().insert(name.to_string());
        self.hostvars.entry(name.to_string()).or_default();
    }

    fn set_variable(&mut self, host: &str, key: &str, value: &str) {
        self.hostvars
            .entry(host.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }
}
