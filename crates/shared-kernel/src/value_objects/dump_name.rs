// crates/shared-kernel/src/value_objects/dump_name.rs
use std::fmt;

use chrono::NaiveDateTime;
use serde::Serialize;

/// `strftime` layout of the capture timestamp embedded in dump file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Length of a formatted timestamp, e.g. `20230101_000000`.
const TIMESTAMP_LEN: usize = 15;

pub const DUMP_EXTENSION: &str = "txt";

/// Counter name and capture time decoded from `<counter>_<YYYYMMDD_HHMMSS>.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpName {
    pub counter: String,
    pub captured_at: Option<NaiveDateTime>,
}

impl DumpName {
    pub fn new(counter: impl Into<String>, captured_at: NaiveDateTime) -> Self {
        Self { counter: counter.into(), captured_at: Some(captured_at) }
    }

    /// Decodes a file name. Names outside the convention keep their whole stem
    /// as the counter name.
    pub fn parse(file_name: &str) -> Self {
        let stem = file_name
            .strip_suffix(DUMP_EXTENSION)
            .and_then(|s| s.strip_suffix('.'))
            .unwrap_or(file_name);

        split_timestamp(stem).unwrap_or_else(|| Self { counter: stem.to_string(), captured_at: None })
    }

    /// File name this dump should be written under.
    pub fn file_name(&self) -> String {
        match self.captured_at {
            Some(ts) => format!("{}_{}.{DUMP_EXTENSION}", self.counter, ts.format(TIMESTAMP_FORMAT)),
            None => format!("{}.{DUMP_EXTENSION}", self.counter),
        }
    }
}

fn split_timestamp(stem: &str) -> Option<DumpName> {
    if stem.len() <= TIMESTAMP_LEN + 1 || !stem.is_char_boundary(stem.len() - TIMESTAMP_LEN) {
        return None;
    }
    let (head, ts) = stem.split_at(stem.len() - TIMESTAMP_LEN);
    let counter = head.strip_suffix('_')?;
    if counter.is_empty() {
        return None;
    }
    let captured_at = NaiveDateTime::parse_from_str(ts, TIMESTAMP_FORMAT).ok()?;
    Some(DumpName { counter: counter.to_string(), captured_at: Some(captured_at) })
}

impl fmt::Display for DumpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
