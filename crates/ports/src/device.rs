// crates/ports/src/device.rs
use std::io::Write;
use std::ops::Range;

use regscan_shared_kernel::{Result, SlotFields};
use serde::Serialize;

/// Whether a device read should bypass the runtime's shadow copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ReadMode {
    #[default]
    HardwareSync,
    Cached,
}

impl ReadMode {
    pub fn from_hw(hw_sync: bool) -> Self {
        if hw_sync { Self::HardwareSync } else { Self::Cached }
    }

    pub fn is_hardware_sync(self) -> bool {
        matches!(self, Self::HardwareSync)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DumpOptions {
    pub mode: ReadMode,
    /// Ask the runtime for its tabular layout (one slot per line).
    pub tabular: bool,
}

/// Counter register access on a running device.
///
/// Adapters report `InfrastructureError::SyncUnsupported` when a
/// hardware-synchronized request cannot be honored.
pub trait RegisterDevice: Send + Sync {
    fn read_slot(&self, register: &str, index: u64, mode: ReadMode) -> Result<SlotFields>;

    /// Reads consecutive slots. Runtimes with a bulk read should override this.
    fn read_slots(&self, register: &str, indices: Range<u64>, mode: ReadMode) -> Result<Vec<SlotFields>> {
        indices.map(|i| self.read_slot(register, i, mode)).collect()
    }

    fn dump(&self, register: &str, options: DumpOptions, sink: &mut dyn Write) -> Result<()>;

    /// Number of addressable slots, when the runtime knows it.
    fn register_size(&self, _register: &str) -> Result<Option<u64>> {
        Ok(None)
    }
}
