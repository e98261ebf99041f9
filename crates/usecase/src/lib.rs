//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`batch`]: Nonzero analysis over a directory of dumps
//! - [`probe`]: First-nonzero scan of a live register
//! - [`capture`]: Timestamped register dumps with a plain-dump fallback
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod batch;
pub mod capture;
pub mod probe;

pub use batch::{AnalysisPlan, AnalyzeDumps};
pub use capture::{CaptureDumps, CapturePlan};
pub use probe::{DEFAULT_REGISTER_SIZE, ProbePlan, ProbeRegister};
