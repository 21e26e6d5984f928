//! Coverage sets over the Run → SubRun → Event identifier space.
//!
//! Records which events a data artifact covers and decides whether the
//! contributions of independent workers may be unioned without double
//! counting. See [`domain::RangeSet`] for the algebra and
//! [`usecase::RunCoverageAccumulator`] for the run-level merge point.

pub use event_coverage_domain as domain;
pub use event_coverage_shared_kernel as shared_kernel;
pub use event_coverage_usecase as usecase;

pub mod prelude {
    pub use event_coverage_domain::{
        EventRange, PartialRanges, RangeSet, disjoint_ranges, overlapping_ranges, same_ranges,
    };
    pub use event_coverage_shared_kernel::{
        CoverageError, ErrorContext, EventId, EventNumber, RangeSetError, Result, RunNumber, SubRunId,
        SubRunNumber,
    };
    pub use event_coverage_usecase::{
        Absorption, AccumulatorConfig, ClosedCoverageTracker, CoverageTracker, DuplicatePolicy,
        OpenCoverageTracker, OverlapPolicy, RunCoverageAccumulator, combine,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
