//! Adapter implementations for port traits
//!
//! This module contains the concrete pieces that touch I/O or hold state:
//!
//! - `yaml/` - mapping document loading and parsing
//! - `memory/` - in-memory inventory store (sink implementation)

pub mod memory;
pub mod yaml;
