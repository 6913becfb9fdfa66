//! Per-entry validation warnings
//!
//! An incomplete service entry is skipped, not fatal. The warning records
//! which service was dropped and which field was missing so the caller can
//! surface it on its own logging channel.

/// The field whose absence caused an entry to be skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingField {
    /// No usable `hostname` value
    Hostname,
    /// No usable `ipv6` value
    Ipv6,
}

impl MissingField {
    /// The field name as it appears in the mapping document
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Hostname => "hostname",
            Self::Ipv6 => "ipv6",
        }
    }
}

/// A non-fatal warning for a skipped service entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryWarning {
    /// The service whose entry was skipped
    pub service: String,
    /// The field that was missing or empty
    pub missing: MissingField,
}

impl EntryWarning {
    /// Create a warning for a service missing the given field
    #[must_use]
    pub fn new(service: &str, missing: MissingField) -> Self {
        Self {
            service: service.to_string(),
            missing,
        }
    }
}

impl std::fmt::Display for EntryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "service '{}' has no {}, skipping", self.service, self.missing.as_str())
    }
}
