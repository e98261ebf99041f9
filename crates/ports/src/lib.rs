//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`store`]: Enumerating and reading dump files
//! - [`device`]: Counter register access on a running device
//!
//! Use cases depend on these traits only; adapters live in `regscan_infra`
//! or in the device runtime integration.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod device;
pub mod store;
