#![allow(clippy::multiple_crate_versions)]

pub mod model;
pub mod options;
pub mod parser;
pub mod pattern;
pub mod probe;
pub mod reader;
pub mod report;

pub use model::{BatchReport, FileOutcome, FileReport};
pub use options::ReportFormat;
pub use parser::{CorruptLine, LineParse, parse_line};
pub use pattern::DumpPattern;
pub use probe::{ProbeHit, ProbeScan, ProbeState, decode_field};
