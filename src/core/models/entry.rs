//! Service entry extraction and validation
//!
//! A [`ServiceEntry`] is one validated row of the `service_mapping` document:
//! the service name, the hostname of the machine running it, and its
//! addresses. Addresses are opaque text here; validating or normalizing them
//! is the address assignment process's job, not ours.

use serde_yaml::Value;

use super::warning::{EntryWarning, MissingField};

/// A validated service entry from the mapping document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    /// The service name (the entry's key in the document)
    pub service: String,
    /// Hostname of the inventory host node
    pub hostname: String,
    /// IPv6 address, used as `ansible_host`
    pub ipv6: String,
    /// Optional IPv4 address
    pub ipv4: Option<String>,
}

impl ServiceEntry {
    /// The group this entry's host belongs to: `{service}_servers`
    #[must_use]
    pub fn group_name(&self) -> String {
        format!("{}_servers", self.service)
    }

    /// Extract and validate an entry from its YAML value
    ///
    /// A missing or empty `hostname`/`ipv6` yields an [`EntryWarning`] instead
    /// of an error; the caller skips the entry and keeps going. Non-mapping
    /// values fall out the same way, since no field can be read from them.
    pub fn from_yaml(service: &str, value: &Value) -> Result<Self, EntryWarning> {
        let hostname = string_field(value, "hostname")
            .ok_or_else(|| EntryWarning::new(service, MissingField::Hostname))?;
        let ipv6 = string_field(value, "ipv6")
            .ok_or_else(|| EntryWarning::new(service, MissingField::Ipv6))?;
        let ipv4 = string_field(value, "ipv4");

        Ok(Self {
            service: service.to_string(),
            hostname,
            ipv6,
            ipv4,
        })
    }
}

/// Read a non-empty string field from a YAML mapping value
fn string_field(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
