#![allow(clippy::multiple_crate_versions)]

pub mod replay;
pub mod store;

pub use replay::ReplayDevice;
pub use store::FsDumpStore;
