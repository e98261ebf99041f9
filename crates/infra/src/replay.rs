// crates/infra/src/replay.rs
use std::{
    collections::{BTreeMap, HashMap},
    io::Write,
    path::Path,
};

use log::debug;
use regscan_domain::parse_line;
use regscan_domain::parser::LineParse;
use regscan_domain::reader::decode_lenient;
use regscan_ports::device::{DumpOptions, ReadMode, RegisterDevice};
use regscan_shared_kernel::{
    ApplicationError, CounterValue, FieldValue, InfrastructureError, RegscanError, Result, SlotFields,
};

/// Register contents recovered from one dump.
#[derive(Debug, Clone, Default)]
struct ReplayRegister {
    slots: BTreeMap<u64, Vec<CounterValue>>,
}

impl ReplayRegister {
    fn size(&self) -> u64 {
        self.slots.keys().next_back().map_or(0, |last| last + 1)
    }
}

/// `RegisterDevice` backed by previously captured dumps.
///
/// Each slot exposes a single `<register>.f1` field holding the per-pipe
/// values as a sequence, the layout the device runtime reports for counter
/// registers. Indices absent from the dump read as zero.
#[derive(Debug, Clone)]
pub struct ReplayDevice {
    registers: HashMap<String, ReplayRegister>,
    hardware_sync: bool,
}

impl Default for ReplayDevice {
    fn default() -> Self {
        Self { registers: HashMap::new(), hardware_sync: true }
    }
}

impl ReplayDevice {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pretend the runtime lacks hardware-synchronized access.
    pub fn without_hardware_sync(mut self) -> Self {
        self.hardware_sync = false;
        self
    }

    /// Loads `register` from dump text. Every slot is kept, zero or not.
    ///
    /// # Errors
    /// A corrupt values list in the dump.
    pub fn with_dump(mut self, register: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let register = register.into();
        let text = decode_lenient(bytes);
        let mut slots = BTreeMap::new();
        for (n, line) in text.lines().enumerate() {
            match parse_line(line) {
                LineParse::Entry(entry) => {
                    slots.insert(entry.index, entry.values);
                }
                LineParse::NoEntry => {}
                LineParse::Corrupt(corrupt) => {
                    return Err(corrupt.at_line(n + 1).into());
                }
            }
        }
        debug!("replaying {register}: {} slot(s)", slots.len());
        self.registers.insert(register, ReplayRegister { slots });
        Ok(self)
    }

    /// # Errors
    /// The file is unreadable or corrupt.
    pub fn load(self, register: impl Into<String>, path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .map_err(|source| InfrastructureError::FileUnreadable { path: path.to_path_buf(), source })?;
        self.with_dump(register, &bytes).map_err(|e| match e {
            RegscanError::Domain(source) => {
                ApplicationError::CorruptDump { path: path.to_path_buf(), source }.into()
            }
            other => other,
        })
    }

    fn register(&self, name: &str) -> Result<&ReplayRegister> {
        self.registers.get(name).ok_or_else(|| {
            InfrastructureError::Device { register: name.to_string(), reason: "unknown register".into() }.into()
        })
    }

    fn check_mode(&self, register: &str, mode: ReadMode) -> Result<()> {
        if mode.is_hardware_sync() && !self.hardware_sync {
            return Err(InfrastructureError::SyncUnsupported { register: register.to_string() }.into());
        }
        Ok(())
    }
}

impl RegisterDevice for ReplayDevice {
    fn read_slot(&self, register: &str, index: u64, mode: ReadMode) -> Result<SlotFields> {
        self.check_mode(register, mode)?;
        let value = self
            .register(register)?
            .slots
            .get(&index)
            .map_or_else(FieldValue::zero, |values| FieldValue::Sequence(values.clone()));
        Ok(SlotFields::single(format!("{register}.f1"), value))
    }

    fn dump(&self, register: &str, options: DumpOptions, sink: &mut dyn Write) -> Result<()> {
        self.check_mode(register, options.mode)?;
        let reg = self.register(register)?;
        if options.tabular {
            writeln!(sink, "{register}")?;
            writeln!(sink, "---------- ------------------------------")?;
            writeln!(sink, "INDEX      VALUE")?;
        }
        for (index, values) in &reg.slots {
            let values: Vec<String> = values.iter().map(ToString::to_string).collect();
            writeln!(sink, "0x{index:08X}         [{}]", values.join(", "))?;
        }
        if options.tabular {
            writeln!(sink, "---------- ------------------------------")?;
        }
        Ok(())
    }

    fn register_size(&self, register: &str) -> Result<Option<u64>> {
        Ok(Some(self.register(register)?.size()))
    }
}
