//! Run-scoped coverage sets and their algebra.

use std::ops::Range;

use event_coverage_shared_kernel::{
    EventId, EventNumber, RangeSetError, RangeSetResult, RunNumber, SubRunId, SubRunNumber,
};
use serde::{Deserialize, Serialize};

use crate::{event_range::EventRange, record::RangeSetRecord};

pub(crate) mod algebra;
mod compact;
mod partial;

pub use partial::PartialRanges;

/// Which events of one run an artifact covers.
///
/// `FullRun` stands for every event of every sub-run and admits no
/// structural edits. `Partial` enumerates [`EventRange`]s; the invalid set
/// (see [`RangeSet::invalid`]) is a `Partial` with an invalid run.
///
/// Callers build a set incrementally, then [`sort`](Self::sort) and
/// [`collapse`](Self::collapse) it into canonical form before it is
/// compared, hashed, or merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RangeSetRecord", into = "RangeSetRecord")]
pub enum RangeSet {
    FullRun(RunNumber),
    Partial(PartialRanges),
}

impl RangeSet {
    pub fn invalid() -> Self {
        Self::Partial(PartialRanges::new(RunNumber::INVALID))
    }

    pub fn for_run(run: RunNumber) -> Self {
        Self::FullRun(run)
    }

    /// Whole single sub-run.
    pub fn for_subrun(id: SubRunId) -> Self {
        Self::Partial(PartialRanges::from_parts(id.run, vec![EventRange::for_subrun(id.subrun)], true))
    }

    /// Empty coverage of `run`.
    pub fn new(run: RunNumber) -> Self {
        Self::Partial(PartialRanges::new(run))
    }

    /// Sorts and collapses `ranges` immediately.
    pub fn from_ranges(run: RunNumber, ranges: impl IntoIterator<Item = EventRange>) -> RangeSetResult<Self> {
        let mut partial = PartialRanges::from_parts(run, ranges.into_iter().collect(), false);
        partial.sort();
        partial.collapse()?;
        Ok(Self::Partial(partial))
    }

    #[inline]
    pub fn run(&self) -> RunNumber {
        match self {
            Self::FullRun(run) => *run,
            Self::Partial(partial) => partial.run(),
        }
    }

    pub fn set_run(&mut self, run: RunNumber) {
        match self {
            Self::FullRun(current) => *current = run,
            Self::Partial(partial) => partial.set_run(run),
        }
    }

    pub fn as_partial(&self) -> Option<&PartialRanges> {
        match self {
            Self::FullRun(_) => None,
            Self::Partial(partial) => Some(partial),
        }
    }

    fn partial_mut(&mut self, operation: &'static str) -> RangeSetResult<&mut PartialRanges> {
        match self {
            Self::FullRun(run) => Err(RangeSetError::FullRunImmutable { operation, run: *run }),
            Self::Partial(partial) => Ok(partial),
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.run().is_valid()
    }

    #[inline]
    pub fn is_full_run(&self) -> bool {
        matches!(self, Self::FullRun(_))
    }

    /// Exactly one range remains and it is a whole-sub-run sentinel.
    pub fn is_full_subrun(&self) -> bool {
        self.as_partial().is_some_and(PartialRanges::is_full_subrun)
    }

    pub fn is_sorted(&self) -> bool {
        self.as_partial().is_none_or(PartialRanges::is_sorted)
    }

    pub fn is_collapsed(&self) -> bool {
        self.as_partial().is_none_or(PartialRanges::is_collapsed)
    }

    /// Enumerated ranges; empty for the full-run sentinel.
    pub fn ranges(&self) -> &[EventRange] {
        match self {
            Self::FullRun(_) => &[],
            Self::Partial(partial) => partial.ranges(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EventRange> {
        self.ranges().iter()
    }

    pub fn len(&self) -> usize {
        self.ranges().len()
    }

    /// Covers no event at all. The full-run sentinel is never empty.
    pub fn is_empty(&self) -> bool {
        self.as_partial().is_some_and(PartialRanges::is_empty)
    }

    pub fn first(&self) -> Option<&EventRange> {
        self.ranges().first()
    }

    pub fn last(&self) -> Option<&EventRange> {
        self.ranges().last()
    }

    pub fn contains(&self, run: RunNumber, subrun: SubRunNumber, event: EventNumber) -> bool {
        if !self.is_valid() || run != self.run() {
            return false;
        }
        match self {
            Self::FullRun(_) => true,
            Self::Partial(partial) => partial.contains(subrun, event),
        }
    }

    pub fn clear(&mut self) -> RangeSetResult<()> {
        self.partial_mut("clear")?.clear();
        Ok(())
    }

    pub fn emplace_range(&mut self, subrun: SubRunNumber, begin: EventNumber, end: EventNumber) -> RangeSetResult<()> {
        self.partial_mut("emplace a range into")?.emplace_range(subrun, begin, end)
    }

    /// See [`PartialRanges::update`].
    pub fn update(&mut self, id: EventId) -> RangeSetResult<()> {
        self.partial_mut("record an event into")?.update(id)
    }

    /// Orders the ranges; the full-run sentinel is trivially sorted.
    pub fn sort(&mut self) -> &mut Self {
        if let Self::Partial(partial) = self {
            partial.sort();
        }
        self
    }

    /// Coalesces adjacent and nested ranges in place. Requires a prior
    /// [`sort`](Self::sort).
    ///
    /// # Errors
    ///
    /// [`RangeSetError::NotSorted`] for unsorted input and
    /// [`RangeSetError::EventRangeOverlap`] when two ranges partially
    /// overlap. In both cases the set is left unchanged.
    pub fn collapse(&mut self) -> RangeSetResult<&mut Self> {
        if let Self::Partial(partial) = self {
            partial.collapse()?;
        }
        Ok(self)
    }

    /// Canonical copy of `self`, sorted and collapsed, leaving `self` alone.
    pub fn collapsed(&self) -> RangeSetResult<Self> {
        let mut copy = self.clone();
        copy.sort().collapse()?;
        Ok(copy)
    }

    /// Union with `other`, re-derived into canonical form.
    ///
    /// An invalid `other` is the identity; an invalid `self` adopts the run
    /// of `other`. The full-run sentinel absorbs anything of its run.
    ///
    /// # Errors
    ///
    /// [`RangeSetError::RunMismatch`] for two different valid runs and
    /// [`RangeSetError::EventRangeOverlap`] when the union contains a
    /// partial overlap. `self` is unchanged on error.
    pub fn merge(&mut self, other: &RangeSet) -> RangeSetResult<&mut Self> {
        if !other.is_valid() {
            return Ok(self);
        }
        if self.is_valid() && self.run() != other.run() {
            return Err(RangeSetError::RunMismatch { run: self.run(), other: other.run() });
        }
        match other {
            Self::FullRun(run) => *self = Self::FullRun(*run),
            Self::Partial(theirs) => {
                if let Self::Partial(mine) = self {
                    mine.merge(theirs)?;
                }
            }
        }
        Ok(self)
    }

    /// See [`PartialRanges::split_range`].
    ///
    /// # Errors
    ///
    /// [`RangeSetError::FullRunImmutable`] for the full-run sentinel.
    pub fn split_range(&mut self, subrun: SubRunNumber, event: EventNumber) -> RangeSetResult<(usize, bool)> {
        Ok(self.partial_mut("split a range of")?.split_range(subrun, event))
    }

    /// Replaces the ranges with a copy of `source.ranges()[range]`.
    pub fn assign_ranges(&mut self, source: &RangeSet, range: Range<usize>) -> RangeSetResult<()> {
        let source = match source {
            Self::FullRun(run) => {
                return Err(RangeSetError::FullRunImmutable { operation: "assign ranges from", run: *run });
            }
            Self::Partial(partial) => partial,
        };
        self.partial_mut("assign ranges to")?.assign_ranges(source, range)
    }

    pub fn extract_ranges(&self, range: Range<usize>) -> RangeSetResult<Vec<EventRange>> {
        match self {
            Self::FullRun(run) => Err(RangeSetError::FullRunImmutable { operation: "extract ranges from", run: *run }),
            Self::Partial(partial) => partial.extract_ranges(range),
        }
    }

    /// No event is covered twice. Never mutates `self`.
    pub fn has_disjoint_ranges(&self) -> bool {
        self.as_partial().is_none_or(PartialRanges::has_disjoint_ranges)
    }
}

impl Default for RangeSet {
    fn default() -> Self {
        Self::invalid()
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a EventRange;
    type IntoIter = std::slice::Iter<'a, EventRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
