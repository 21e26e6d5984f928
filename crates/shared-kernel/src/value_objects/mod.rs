// crates/shared-kernel/src/value_objects/mod.rs
pub mod ids;
pub mod numbers;

pub use ids::{EventId, SubRunId};
pub use numbers::{EventNumber, RunNumber, SubRunNumber};
