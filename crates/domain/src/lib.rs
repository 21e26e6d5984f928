//! # Domain
//!
//! Coverage of the Run → SubRun → Event identifier space.
//!
//! - [`event_range`]: half-open event ranges within one sub-run
//! - [`range_set`]: run-scoped sets of event ranges and their algebra
//!   (sort, collapse, merge, split)
//! - [`relations`]: same / disjoint / overlapping checks between sets
//! - [`record`]: flat records used by the persistence boundary
//!
//! Nothing here performs I/O; sets are plain values owned by one producer
//! at a time.

#![allow(clippy::multiple_crate_versions)]

pub mod event_range;
pub mod range_set;
pub mod record;
pub mod relations;

pub use event_range::EventRange;
pub use range_set::{PartialRanges, RangeSet};
pub use record::{EventRangeRecord, RangeSetRecord};
pub use relations::{disjoint_ranges, overlapping_ranges, same_ranges};
