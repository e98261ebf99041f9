// crates/domain/src/reader.rs
use regscan_shared_kernel::{DomainResult, RegisterEntry};

use crate::parser::{LineParse, parse_line};

/// Decodes dump bytes as UTF-8, dropping byte sequences that are not valid.
pub fn decode_lenient(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Collects the entries of a dump that hold at least one nonzero counter, in
/// source order.
///
/// # Errors
/// Returns `CorruptValuesList` for the first data line whose values do not
/// parse.
pub fn collect_nonzero(text: &str) -> DomainResult<Vec<RegisterEntry>> {
    let mut entries = Vec::new();
    for (n, line) in text.lines().enumerate() {
        match parse_line(line) {
            LineParse::Entry(entry) if entry.is_nonzero() => entries.push(entry),
            LineParse::Entry(_) | LineParse::NoEntry => {}
            LineParse::Corrupt(corrupt) => return Err(corrupt.at_line(n + 1)),
        }
    }
    Ok(entries)
}
