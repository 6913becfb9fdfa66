//! Business logic services
//!
//! Pure orchestration logic that operates on domain models. No I/O: the
//! builder consumes an already-parsed document and writes through the sink
//! port.

pub mod builder;

pub use builder::{ALL_SERVICES_GROUP, BuildOptions, BuildReport, SchemaError, build_inventory};
