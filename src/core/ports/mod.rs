//! Port traits (interfaces) for the host automation framework
//!
//! These traits define the boundary between the inventory construction logic
//! and the framework that owns the inventory store and invokes the build.
//!
//! Implementations live in the `adapters` and `plugin` modules.

mod sink;
mod source;

pub use sink::InventorySink;
pub use source::InventorySource;
