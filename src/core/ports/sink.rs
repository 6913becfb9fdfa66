//! Inventory sink port
//!
//! The sink is the host framework's inventory store. The builder expresses
//! every graph change through these three calls and never reads the store
//! back.

/// Receiver for inventory graph mutations
///
/// Implementations own idempotence: calling `add_group` or `add_host` twice
/// for the same name must not duplicate nodes.
pub trait InventorySink {
    /// Ensure a group with the given name exists
    fn add_group(&mut self, name: &str);

    /// Ensure a host exists and is a member of the given group
    fn add_host(&mut self, name: &str, group: &str);

    /// Set a variable on a host, overwriting any existing value
    fn set_variable(&mut self, host: &str, key: &str, value: &str);
}
