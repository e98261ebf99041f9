// crates/shared-kernel/src/value_objects/field.rs
use serde::Serialize;

use super::register::CounterValue;

/// A single register field as returned by the device runtime.
///
/// Runtimes hand back either raw bytes, a list of byte-sized integers, or an
/// already decoded number. Callers normalize through one function rather than
/// inspecting the shape ad hoc.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    Bytes(Vec<u8>),
    Sequence(Vec<CounterValue>),
    Numeric(CounterValue),
}

impl FieldValue {
    pub fn zero() -> Self {
        Self::Numeric(0)
    }
}

/// Ordered field name → value map for one register slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlotFields(Vec<(String, FieldValue)>);

impl SlotFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(name: impl Into<String>, value: FieldValue) -> Self {
        Self(vec![(name.into(), value)])
    }

    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.0.push((name.into(), value));
    }

    pub fn first(&self) -> Option<(&str, &FieldValue)> {
        self.0.first().map(|(n, v)| (n.as_str(), v))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}
