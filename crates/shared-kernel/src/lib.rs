// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, DomainError, DomainResult, ErrorContext, InfrastructureError, RegscanError,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{
    CounterValue, DUMP_EXTENSION, DumpName, FieldValue, RegisterEntry, SlotFields, TIMESTAMP_FORMAT,
};
