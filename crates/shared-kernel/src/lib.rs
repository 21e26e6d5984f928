// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    AccumulateError, AccumulateResult, ConfigError, CoverageError, ErrorContext, RangeSetError, RangeSetResult,
    Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{EventId, EventNumber, RunNumber, SubRunId, SubRunNumber};
