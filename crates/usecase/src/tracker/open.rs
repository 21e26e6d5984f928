// crates/usecase/src/tracker/open.rs
use event_coverage_domain::RangeSet;
use event_coverage_shared_kernel::{EventId, RangeSetResult, RunNumber};

use super::CoverageTracker;

/// Builds coverage from scratch as events arrive.
#[derive(Debug, Clone, Default)]
pub struct OpenCoverageTracker {
    ranges: RangeSet,
}

impl OpenCoverageTracker {
    pub fn new(run: RunNumber) -> Self {
        Self { ranges: RangeSet::new(run) }
    }
}

impl CoverageTracker for OpenCoverageTracker {
    fn seen_ranges(&self) -> RangeSetResult<RangeSet> {
        self.ranges.collapsed()
    }

    fn update(&mut self, id: EventId, _last_in_subrun: bool) -> RangeSetResult<()> {
        self.ranges.update(id)
    }

    fn flush_ranges(&mut self) -> RangeSetResult<()> {
        Ok(())
    }

    fn maybe_split_range(&mut self) -> RangeSetResult<()> {
        Ok(())
    }

    fn rebase(&mut self) -> RangeSetResult<()> {
        log::trace!("run {}: rebasing open coverage {}", self.ranges.run(), self.ranges.to_compact_string());
        self.ranges = RangeSet::new(self.ranges.run());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_processed_events() {
        let mut tracker = OpenCoverageTracker::default();
        for event in [1, 2, 3, 7, 8] {
            tracker.update(EventId::from((4, 1, event)), false).unwrap();
        }
        tracker.update(EventId::from((4, 2, 1)), true).unwrap();
        let seen = tracker.seen_ranges().unwrap();
        assert_eq!(seen.to_compact_string(), "4:1[1,4)1[7,9)2[1,2)");
        assert!(seen.is_collapsed());
    }

    #[test]
    fn rebase_keeps_run_and_drops_ranges() {
        let mut tracker = OpenCoverageTracker::new(RunNumber::new(4));
        tracker.update(EventId::from((4, 1, 1)), false).unwrap();
        tracker.maybe_split_range().unwrap();
        tracker.rebase().unwrap();
        tracker.update(EventId::from((4, 1, 2)), false).unwrap();
        assert_eq!(tracker.seen_ranges().unwrap().to_compact_string(), "4:1[2,3)");
    }

    #[test]
    fn other_run_is_refused() {
        let mut tracker = OpenCoverageTracker::new(RunNumber::new(4));
        assert!(tracker.update(EventId::from((5, 1, 1)), false).is_err());
    }
}
