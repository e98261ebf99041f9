// crates/domain/src/report.rs
use std::fmt::Write;

use regscan_shared_kernel::RegisterEntry;

use crate::model::{BatchReport, FileOutcome, FileReport};

const RULE_WIDTH: usize = 60;
pub const ALL_ZERO: &str = "(all zero)";
const INDENT: &str = "  ";

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Header block naming the file. Starts with a blank line so consecutive
/// blocks are visually separated.
pub fn render_header(file: &str) -> String {
    let rule = rule();
    format!("\n{rule}\nFILE: {file}\n{rule}\n")
}

/// Body lines for a file's nonzero entries.
pub fn render_entries(entries: &[RegisterEntry]) -> String {
    if entries.is_empty() {
        return format!("{INDENT}{ALL_ZERO}\n");
    }
    let mut out = String::new();
    for entry in entries {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{INDENT}{entry}");
    }
    out
}

pub fn render_file(report: &FileReport) -> String {
    let mut out = render_header(&report.file);
    match &report.outcome {
        FileOutcome::Nonzero(entries) => out.push_str(&render_entries(entries)),
        FileOutcome::Failed(message) => {
            let _ = writeln!(out, "{INDENT}ERROR: {message}");
        }
    }
    out
}

pub fn render_batch(batch: &BatchReport) -> String {
    batch.files.iter().map(render_file).collect()
}
