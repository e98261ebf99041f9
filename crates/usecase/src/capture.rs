// crates/usecase/src/capture.rs
use std::path::PathBuf;

use chrono::NaiveDateTime;
use log::{info, warn};
use regscan_ports::device::{DumpOptions, ReadMode, RegisterDevice};
use regscan_ports::store::DumpStore;
use regscan_shared_kernel::{DumpName, ErrorContext, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePlan {
    pub registers: Vec<String>,
    pub out_dir: PathBuf,
    /// Shared by every file written in this run.
    pub captured_at: NaiveDateTime,
    pub tabular: bool,
}

/// Writes one timestamped dump file per register.
pub struct CaptureDumps<'a> {
    device: &'a dyn RegisterDevice,
    store: &'a dyn DumpStore,
}

impl<'a> CaptureDumps<'a> {
    pub fn new(device: &'a dyn RegisterDevice, store: &'a dyn DumpStore) -> Self {
        Self { device, store }
    }

    /// # Errors
    /// Stops at the first register whose dump or write fails.
    pub fn run(&self, plan: &CapturePlan) -> Result<Vec<PathBuf>> {
        plan.registers.iter().map(|register| self.capture_one(plan, register)).collect()
    }

    fn capture_one(&self, plan: &CapturePlan, register: &str) -> Result<PathBuf> {
        let name = DumpName::new(register, plan.captured_at);
        let contents = self.dump_with_fallback(register, plan.tabular)?;
        let path = self
            .store
            .write_dump(&plan.out_dir, &name.file_name(), &contents)
            .with_context(|| format!("saving dump of {register}"))?;
        info!("{register}: {} byte(s) written", contents.len());
        Ok(path)
    }

    /// Prefers a hardware-synchronized dump; runtimes that cannot honor it
    /// get a plain dump instead.
    fn dump_with_fallback(&self, register: &str, tabular: bool) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let synced = DumpOptions { mode: ReadMode::HardwareSync, tabular };
        match self.device.dump(register, synced, &mut buf) {
            Ok(()) => Ok(buf),
            Err(e) if e.is_sync_unsupported() => {
                warn!("{register}: hardware-synchronized dump unsupported, using plain dump");
                buf.clear();
                let plain = DumpOptions { mode: ReadMode::Cached, tabular };
                self.device
                    .dump(register, plain, &mut buf)
                    .with_context(|| format!("dumping {register}"))?;
                Ok(buf)
            }
            Err(e) => Err(e).with_context(|| format!("dumping {register}")),
        }
    }
}
