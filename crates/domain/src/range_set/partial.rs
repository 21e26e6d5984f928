//! Enumerated coverage of one run.

use std::ops::Range;

use event_coverage_shared_kernel::{
    EventId, EventNumber, RangeSetError, RangeSetResult, RunNumber, SubRunNumber,
};

use super::algebra;
use crate::event_range::EventRange;

/// Event ranges of one run, with the "already canonical" state tracked
/// alongside.
///
/// Every structural mutator here is infallible with respect to the
/// full-run sentinel: that state lives in [`super::RangeSet::FullRun`] and
/// can never reach this type.
#[derive(Debug, Clone)]
pub struct PartialRanges {
    run: RunNumber,
    ranges: Vec<EventRange>,
    collapsed: bool,
}

impl PartialRanges {
    pub fn new(run: RunNumber) -> Self {
        Self { run, ranges: Vec::new(), collapsed: true }
    }

    pub(crate) fn from_parts(run: RunNumber, ranges: Vec<EventRange>, collapsed: bool) -> Self {
        Self { run, ranges, collapsed }
    }

    #[inline]
    pub fn run(&self) -> RunNumber {
        self.run
    }

    pub fn set_run(&mut self, run: RunNumber) {
        self.run = run;
    }

    #[inline]
    pub fn ranges(&self) -> &[EventRange] {
        &self.ranges
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn is_sorted(&self) -> bool {
        self.collapsed || algebra::is_sorted(&self.ranges)
    }

    pub fn is_full_subrun(&self) -> bool {
        matches!(self.ranges.as_slice(), [only] if only.is_full_subrun())
    }

    pub fn contains(&self, subrun: SubRunNumber, event: EventNumber) -> bool {
        self.ranges.iter().any(|r| r.contains(subrun, event))
    }

    pub fn clear(&mut self) {
        self.ranges.clear();
        self.collapsed = true;
    }

    pub fn emplace_range(&mut self, subrun: SubRunNumber, begin: EventNumber, end: EventNumber) -> RangeSetResult<()> {
        let range = EventRange::new(subrun, begin, end)?;
        self.push_range(range);
        Ok(())
    }

    pub fn push_range(&mut self, range: EventRange) {
        self.ranges.push(range);
        self.collapsed = false;
    }

    /// Records one processed event: extends the trailing range when the
    /// event directly follows it, otherwise opens a single-event range.
    pub fn update(&mut self, id: EventId) -> RangeSetResult<()> {
        if !id.is_valid() || !id.event.next().is_valid() {
            return Err(RangeSetError::InvalidEventId { id });
        }
        if self.run.is_valid() && self.run != id.run {
            return Err(RangeSetError::RunMismatch { run: self.run, other: id.run });
        }
        self.run = id.run;
        match self.ranges.last_mut() {
            Some(EventRange::Bounded { subrun, end, .. }) if *subrun == id.subrun && *end == id.event => {
                *end = id.event.next();
            }
            _ => self.ranges.push(EventRange::Bounded {
                subrun: id.subrun,
                begin: id.event,
                end: id.event.next(),
            }),
        }
        self.collapsed = false;
        Ok(())
    }

    pub fn sort(&mut self) {
        if !self.is_sorted() {
            self.ranges.sort();
        }
    }

    /// Coalesces the sorted ranges in place; a no-op when already collapsed.
    ///
    /// On error the ranges are left exactly as they were.
    pub fn collapse(&mut self) -> RangeSetResult<()> {
        if self.collapsed {
            return Ok(());
        }
        if !self.is_sorted() {
            return Err(RangeSetError::NotSorted { run: self.run });
        }
        self.ranges = algebra::coalesce(self.run, &self.ranges)?;
        self.collapsed = true;
        Ok(())
    }

    /// Union with `other`. An invalid `other` is the identity; an invalid
    /// `self` takes over the run of `other`.
    ///
    /// Out-of-order inputs are sorted on private copies before the
    /// interleave, so a caller that skipped `sort` still gets a canonical
    /// result (or an overlap error), never a silently wrong one.
    pub fn merge(&mut self, other: &PartialRanges) -> RangeSetResult<()> {
        if !other.run.is_valid() {
            return Ok(());
        }
        let run = if self.run.is_valid() { self.run } else { other.run };
        if run != other.run {
            return Err(RangeSetError::RunMismatch { run, other: other.run });
        }
        let left = algebra::sorted(&self.ranges);
        let right = algebra::sorted(&other.ranges);
        let mut merged = algebra::interleave(&left, &right);
        merged.dedup();
        let coalesced = algebra::coalesce(run, &merged)?;
        log::trace!("run {run}: merged {} + {} ranges into {}", self.len(), other.len(), coalesced.len());
        self.run = run;
        self.ranges = coalesced;
        self.collapsed = true;
        Ok(())
    }

    /// Splits the range containing `(subrun, event)` into `[begin, event)`
    /// and `[event, end)`.
    ///
    /// Returns the index of the upper half and `true` on success. When no
    /// range contains the event, or the containing range is a whole-sub-run
    /// sentinel, holds a single event, or starts at `event`, nothing changes
    /// and `(len, false)` is returned.
    pub fn split_range(&mut self, subrun: SubRunNumber, event: EventNumber) -> (usize, bool) {
        let not_split = (self.ranges.len(), false);
        let Some(idx) = self.ranges.iter().position(|r| r.contains(subrun, event)) else {
            return not_split;
        };
        let EventRange::Bounded { subrun: s, begin, end } = self.ranges[idx] else {
            return not_split;
        };
        if !s.is_valid() || begin.distance_to(end) <= 1 || event == begin {
            return not_split;
        }
        self.ranges[idx] = EventRange::Bounded { subrun: s, begin, end: event };
        self.ranges.insert(idx + 1, EventRange::Bounded { subrun: s, begin: event, end });
        self.collapsed = false;
        (idx + 1, true)
    }

    /// Replaces the ranges with a copy of `source[range]`, adopting the
    /// run of `source`.
    pub fn assign_ranges(&mut self, source: &PartialRanges, range: Range<usize>) -> RangeSetResult<()> {
        let slice = source.slice(range)?;
        self.run = source.run;
        self.ranges = slice.to_vec();
        // a contiguous slice of a canonical sequence stays canonical
        self.collapsed = source.collapsed;
        Ok(())
    }

    pub fn extract_ranges(&self, range: Range<usize>) -> RangeSetResult<Vec<EventRange>> {
        self.slice(range).map(<[EventRange]>::to_vec)
    }

    fn slice(&self, range: Range<usize>) -> RangeSetResult<&[EventRange]> {
        self.ranges.get(range.clone()).ok_or(RangeSetError::IndexOutOfRange {
            start: range.start,
            end: range.end,
            len: self.ranges.len(),
        })
    }

    /// Read-only disjointness check; out-of-order ranges are sorted on a copy.
    pub fn has_disjoint_ranges(&self) -> bool {
        algebra::pairwise_disjoint(&algebra::sorted(&self.ranges))
    }
}

impl PartialEq for PartialRanges {
    fn eq(&self, other: &Self) -> bool {
        self.run == other.run && self.ranges == other.ranges
    }
}

impl Eq for PartialRanges {}
