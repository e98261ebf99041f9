// crates/shared-kernel/src/value_objects/mod.rs
pub mod dump_name;
pub mod field;
pub mod register;

pub use dump_name::{DUMP_EXTENSION, DumpName, TIMESTAMP_FORMAT};
pub use field::{FieldValue, SlotFields};
pub use register::{CounterValue, RegisterEntry};
