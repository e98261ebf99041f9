// crates/domain/src/options.rs
use serde::Serialize;

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReportFormat {
    /// Human-readable blocks, one per file.
    #[default]
    Text,
    /// A single pretty-printed array.
    Json,
    /// One record per line: entries, then a file summary, then a total.
    Jsonl,
}
