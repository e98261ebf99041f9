// crates/shared-kernel/src/value_objects/register.rs
use std::fmt;

use serde::Serialize;

/// Counter value as it appears in a dump. Wide enough for any unsigned 64-bit
/// counter as well as negative values.
pub type CounterValue = i128;

/// One addressable slot of a counter register array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct RegisterEntry {
    pub index: u64,
    pub values: Vec<CounterValue>,
}

impl RegisterEntry {
    pub fn new(index: u64, values: Vec<CounterValue>) -> Self {
        Self { index, values }
    }

    /// True when at least one replica of the slot holds a nonzero counter.
    #[inline]
    pub fn is_nonzero(&self) -> bool {
        self.values.iter().any(|v| *v != 0)
    }
}

/// Renders `[index] = [v1, v2, ...]` with a decimal index.
impl fmt::Display for RegisterEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] = [", self.index)?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{value}")?;
        }
        f.write_str("]")
    }
}
