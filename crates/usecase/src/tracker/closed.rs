// crates/usecase/src/tracker/closed.rs
use event_coverage_domain::{EventRange, RangeSet};
use event_coverage_shared_kernel::{EventId, RangeSetError, RangeSetResult};

use super::CoverageTracker;

/// Reports the processed prefix of a coverage set that is known up front,
/// typically the coverage of an input file being copied event by event.
///
/// `ranges[..boundary]` is the part processed so far.
#[derive(Debug, Clone)]
pub struct ClosedCoverageTracker {
    ranges: RangeSet,
    boundary: usize,
    last_event: Option<(EventId, bool)>,
}

impl ClosedCoverageTracker {
    pub fn new(ranges: &RangeSet) -> RangeSetResult<Self> {
        Ok(Self { ranges: ranges.collapsed()?, boundary: 0, last_event: None })
    }

    /// Ranges still to be reported.
    pub fn remaining(&self) -> &[EventRange] {
        self.ranges.ranges().get(self.boundary..).unwrap_or_default()
    }

    /// Number of leading ranges that lie entirely at or before the last
    /// processed event.
    fn processed_prefix(&self, id: EventId, last_in_subrun: bool) -> usize {
        let next = id.event.next();
        self.ranges.ranges().partition_point(|range| match *range {
            EventRange::FullSubRun(subrun) => subrun < id.subrun || (subrun == id.subrun && last_in_subrun),
            EventRange::Bounded { subrun, end, .. } => {
                subrun < id.subrun || (subrun == id.subrun && (last_in_subrun || end <= next))
            }
        })
    }
}

impl CoverageTracker for ClosedCoverageTracker {
    fn seen_ranges(&self) -> RangeSetResult<RangeSet> {
        if self.ranges.is_full_run() {
            return Ok(self.ranges.clone());
        }
        RangeSet::from_ranges(self.ranges.run(), self.ranges.extract_ranges(0..self.boundary)?)
    }

    fn update(&mut self, id: EventId, last_in_subrun: bool) -> RangeSetResult<()> {
        let run = self.ranges.run();
        if run.is_valid() && run != id.run {
            return Err(RangeSetError::RunMismatch { run, other: id.run });
        }
        self.last_event = Some((id, last_in_subrun));
        Ok(())
    }

    fn flush_ranges(&mut self) -> RangeSetResult<()> {
        self.boundary = self.ranges.len();
        Ok(())
    }

    fn maybe_split_range(&mut self) -> RangeSetResult<()> {
        if self.ranges.is_full_run() {
            return Ok(());
        }
        let Some((id, last_in_subrun)) = self.last_event else {
            return Ok(());
        };
        if !last_in_subrun {
            let (upper, split) = self.ranges.split_range(id.subrun, id.event.next())?;
            if split {
                log::trace!("run {}: split coverage after event {id}", self.ranges.run());
                self.boundary = upper;
                return Ok(());
            }
        }
        self.boundary = self.boundary.max(self.processed_prefix(id, last_in_subrun));
        Ok(())
    }

    fn rebase(&mut self) -> RangeSetResult<()> {
        if self.ranges.is_full_run() {
            return Ok(());
        }
        let mut rest = RangeSet::invalid();
        rest.assign_ranges(&self.ranges, self.boundary..self.ranges.len())?;
        self.ranges = rest;
        self.boundary = 0;
        Ok(())
    }
}
