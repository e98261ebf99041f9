// crates/usecase/src/probe.rs
use log::{debug, info};
use regscan_domain::{ProbeHit, ProbeScan, ProbeState, decode_field};
use regscan_ports::device::{ReadMode, RegisterDevice};
use regscan_shared_kernel::{DomainError, FieldValue, InfrastructureError, Result, SlotFields};

/// Slots scanned when neither the plan nor the device gives a size.
pub const DEFAULT_REGISTER_SIZE: u64 = 65_536;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbePlan {
    pub register: String,
    /// Field to decode; the slot's first field when `None`.
    pub field: Option<String>,
    pub start: u64,
    /// Exclusive upper bound; the register size when `None`.
    pub end: Option<u64>,
    pub mode: ReadMode,
    /// Slots fetched per device round-trip.
    pub batch_size: u64,
}

impl ProbePlan {
    pub fn new(register: impl Into<String>) -> Self {
        Self {
            register: register.into(),
            field: None,
            start: 0,
            end: None,
            mode: ReadMode::HardwareSync,
            batch_size: 1,
        }
    }
}

pub struct ProbeRegister<'a> {
    device: &'a dyn RegisterDevice,
}

impl<'a> ProbeRegister<'a> {
    pub fn new(device: &'a dyn RegisterDevice) -> Self {
        Self { device }
    }

    /// Scans the register and returns the lowest index holding a nonzero value.
    ///
    /// # Errors
    /// Device failures and undecodable fields end the run.
    pub fn run(&self, plan: &ProbePlan) -> Result<Option<ProbeHit>> {
        let end = match plan.end {
            Some(end) => end,
            // A runtime reporting zero slots knows nothing about the layout.
            None => self
                .device
                .register_size(&plan.register)?
                .filter(|&size| size > 0)
                .unwrap_or(DEFAULT_REGISTER_SIZE),
        };
        info!("probing {} over [{}, {end})", plan.register, plan.start);

        let mut scan = ProbeScan::new(plan.start..end)?;
        while scan.next_index().is_some() {
            let chunk = scan.pending(plan.batch_size);
            let slots = self.read_chunk(plan, chunk.clone())?;
            debug!("read {} slot(s) starting at {}", slots.len(), chunk.start);

            for (index, slot) in chunk.zip(slots.iter()) {
                let value = decode_field(index, select_field(index, slot, plan.field.as_deref())?)?;
                if !matches!(scan.advance(value), ProbeState::Scanning(_)) {
                    break;
                }
            }
        }
        Ok(scan.hit())
    }

    fn read_chunk(&self, plan: &ProbePlan, chunk: std::ops::Range<u64>) -> Result<Vec<SlotFields>> {
        let expected = chunk.end - chunk.start;
        let slots = if expected == 1 {
            vec![self.device.read_slot(&plan.register, chunk.start, plan.mode)?]
        } else {
            self.device.read_slots(&plan.register, chunk, plan.mode)?
        };
        if slots.len() as u64 != expected {
            return Err(InfrastructureError::Device {
                register: plan.register.clone(),
                reason: format!("expected {expected} slots, device returned {}", slots.len()),
            }
            .into());
        }
        Ok(slots)
    }
}

fn select_field<'s>(index: u64, slot: &'s SlotFields, name: Option<&str>) -> Result<&'s FieldValue> {
    let found = match name {
        Some(name) => slot.get(name).ok_or_else(|| DomainError::DecodeAmbiguous {
            index,
            detail: format!("slot has no field named '{name}'"),
        }),
        None => slot.first().map(|(_, v)| v).ok_or_else(|| DomainError::DecodeAmbiguous {
            index,
            detail: "slot has no fields".to_string(),
        }),
    };
    Ok(found?)
}
