//! sprout-cli library root.
//!
//! Exposes config loading and the calendar age calculator so integration
//! tests can exercise them without going through the binary.

pub mod age;
pub mod config;
