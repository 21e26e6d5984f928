// crates/usecase/src/tracker.rs
//! Coverage bookkeeping for output artifacts while events are processed.
//!
//! An output artifact records which events it has seen. When the artifact
//! is closed mid-run (a file switch, say), the coverage collected so far
//! is reported with [`CoverageTracker::seen_ranges`], the range containing
//! the last event is split with [`CoverageTracker::maybe_split_range`], and
//! the reported part is dropped with [`CoverageTracker::rebase`].

use event_coverage_domain::RangeSet;
use event_coverage_shared_kernel::{EventId, RangeSetResult};

mod closed;
mod open;

pub use closed::ClosedCoverageTracker;
pub use open::OpenCoverageTracker;

pub trait CoverageTracker {
    /// Canonical coverage of everything processed since the last rebase.
    fn seen_ranges(&self) -> RangeSetResult<RangeSet>;

    fn update(&mut self, id: EventId, last_in_subrun: bool) -> RangeSetResult<()>;

    /// Marks everything tracked as seen.
    fn flush_ranges(&mut self) -> RangeSetResult<()>;

    /// Cuts the coverage right after the last processed event.
    fn maybe_split_range(&mut self) -> RangeSetResult<()>;

    /// Forgets the part already reported.
    fn rebase(&mut self) -> RangeSetResult<()>;
}
