// crates/domain/src/probe.rs
use std::ops::Range;

use regscan_shared_kernel::{DomainError, DomainResult, FieldValue};
use serde::Serialize;

/// Decodes a device field to an unsigned integer, big-endian where bytes are
/// involved.
///
/// # Errors
/// `DecodeAmbiguous` when a sequence element is not a byte, a number is
/// negative, or the value needs more than 128 bits.
pub fn decode_field(index: u64, value: &FieldValue) -> DomainResult<u128> {
    match value {
        FieldValue::Bytes(bytes) => be_bytes_to_u128(index, bytes),
        FieldValue::Sequence(items) => {
            let bytes = items
                .iter()
                .map(|&item| {
                    u8::try_from(item).map_err(|_| DomainError::DecodeAmbiguous {
                        index,
                        detail: format!("sequence element {item} is not a byte"),
                    })
                })
                .collect::<DomainResult<Vec<u8>>>()?;
            be_bytes_to_u128(index, &bytes)
        }
        FieldValue::Numeric(n) => u128::try_from(*n).map_err(|_| DomainError::DecodeAmbiguous {
            index,
            detail: format!("negative counter value {n}"),
        }),
    }
}

fn be_bytes_to_u128(index: u64, bytes: &[u8]) -> DomainResult<u128> {
    let significant = match bytes.iter().position(|b| *b != 0) {
        Some(first) => &bytes[first..],
        None => return Ok(0),
    };
    if significant.len() > 16 {
        return Err(DomainError::DecodeAmbiguous {
            index,
            detail: format!("{} significant bytes exceed 128 bits", significant.len()),
        });
    }
    Ok(significant.iter().fold(0u128, |acc, b| (acc << 8) | u128::from(*b)))
}

/// First nonzero slot found by a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProbeHit {
    pub index: u64,
    pub value: u128,
}

/// Scan state. `Found` and `NotFound` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeState {
    Scanning(u64),
    Found(ProbeHit),
    NotFound,
}

/// Linear first-nonzero-wins scan over `[start, end)`.
#[derive(Debug, Clone)]
pub struct ProbeScan {
    end: u64,
    state: ProbeState,
}

impl ProbeScan {
    /// # Errors
    /// `InvalidRange` when the range is empty or reversed.
    pub fn new(range: Range<u64>) -> DomainResult<Self> {
        if range.start >= range.end {
            return Err(DomainError::InvalidRange { start: range.start, end: range.end });
        }
        Ok(Self { end: range.end, state: ProbeState::Scanning(range.start) })
    }

    pub fn state(&self) -> ProbeState {
        self.state
    }

    /// Next index to read, or `None` once terminal.
    pub fn next_index(&self) -> Option<u64> {
        match self.state {
            ProbeState::Scanning(i) => Some(i),
            ProbeState::Found(_) | ProbeState::NotFound => None,
        }
    }

    /// Remaining indices, at most `limit`, starting from the current one.
    pub fn pending(&self, limit: u64) -> Range<u64> {
        match self.state {
            ProbeState::Scanning(i) => i..self.end.min(i.saturating_add(limit.max(1))),
            ProbeState::Found(_) | ProbeState::NotFound => self.end..self.end,
        }
    }

    /// Feeds the decoded value for the current index.
    pub fn advance(&mut self, value: u128) -> ProbeState {
        if let ProbeState::Scanning(i) = self.state {
            self.state = if value != 0 {
                ProbeState::Found(ProbeHit { index: i, value })
            } else if i + 1 >= self.end {
                ProbeState::NotFound
            } else {
                ProbeState::Scanning(i + 1)
            };
        }
        self.state
    }

    pub fn hit(&self) -> Option<ProbeHit> {
        match self.state {
            ProbeState::Found(hit) => Some(hit),
            ProbeState::Scanning(_) | ProbeState::NotFound => None,
        }
    }
}

/// Runs a scan to completion with a per-index read.
///
/// # Errors
/// Propagates the first error returned by `read` or by decoding.
pub fn scan<F, E>(range: Range<u64>, mut read: F) -> Result<Option<ProbeHit>, E>
where
    F: FnMut(u64) -> Result<FieldValue, E>,
    E: From<DomainError>,
{
    let mut probe = ProbeScan::new(range)?;
    while let Some(index) = probe.next_index() {
        let field = read(index)?;
        probe.advance(decode_field(index, &field)?);
    }
    Ok(probe.hit())
}
