// crates/domain/src/parser.rs
use std::sync::OnceLock;

use regex::Regex;
use regscan_shared_kernel::{CounterValue, DomainError, RegisterEntry};

/// `0x0000000A         [0, 0, 12, 0]`
fn line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\s*0x([0-9A-Fa-f]+)\s+\[(.*?)\]\s*$").expect("static dump line pattern")
    })
}

/// A data line whose bracket shape matched but whose content did not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorruptLine {
    pub token: String,
    pub reason: String,
}

impl CorruptLine {
    /// Attaches the 1-based line number the caller was reading.
    pub fn at_line(self, line: usize) -> DomainError {
        DomainError::CorruptValuesList { line, token: self.token, reason: self.reason }
    }
}

/// Outcome of decoding one dump line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineParse {
    Entry(RegisterEntry),
    /// Header, footer, blank or otherwise non-data line.
    NoEntry,
    Corrupt(CorruptLine),
}

/// Decodes one line of a register dump.
///
/// All-zero entries are returned as-is; filtering is the reader's job.
pub fn parse_line(line: &str) -> LineParse {
    let Some(caps) = line_regex().captures(line) else {
        return LineParse::NoEntry;
    };

    let hex = &caps[1];
    let list = &caps[2];

    if list.trim().is_empty() {
        return LineParse::NoEntry;
    }

    let index = match u64::from_str_radix(hex, 16) {
        Ok(index) => index,
        Err(e) => {
            return LineParse::Corrupt(CorruptLine {
                token: format!("0x{hex}"),
                reason: format!("index out of range: {e}"),
            });
        }
    };

    match parse_values(list) {
        Ok(values) => LineParse::Entry(RegisterEntry::new(index, values)),
        Err(corrupt) => LineParse::Corrupt(corrupt),
    }
}

fn parse_values(list: &str) -> Result<Vec<CounterValue>, CorruptLine> {
    list.split(',')
        .map(str::trim)
        .map(|token| {
            token.parse::<CounterValue>().map_err(|e| CorruptLine {
                token: token.to_string(),
                reason: e.to_string(),
            })
        })
        .collect()
}
