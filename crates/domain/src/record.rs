//! Flat records through which event ranges and range sets are persisted.
//!
//! The storage layer owns the wire format; these records only fix the
//! fields (`run`, `ranges` as `(subrun, begin, end)`, and the two flags)
//! and re-validate them on the way back in.

use event_coverage_shared_kernel::{EventNumber, RangeSetError, RunNumber, SubRunNumber};
use serde::{Deserialize, Serialize};

use crate::{
    event_range::EventRange,
    range_set::{PartialRanges, RangeSet, algebra},
};

/// A whole sub-run is stored with both bounds set to [`EventNumber::INVALID`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRangeRecord {
    pub subrun: SubRunNumber,
    pub begin: EventNumber,
    pub end: EventNumber,
}

impl From<EventRange> for EventRangeRecord {
    fn from(range: EventRange) -> Self {
        match range {
            EventRange::FullSubRun(subrun) => Self {
                subrun,
                begin: EventNumber::INVALID,
                end: EventNumber::INVALID,
            },
            EventRange::Bounded { subrun, begin, end } => Self { subrun, begin, end },
        }
    }
}

impl TryFrom<EventRangeRecord> for EventRange {
    type Error = RangeSetError;

    fn try_from(record: EventRangeRecord) -> Result<Self, Self::Error> {
        let EventRangeRecord { subrun, begin, end } = record;
        if subrun.is_valid() && !begin.is_valid() && !end.is_valid() {
            return Ok(Self::FullSubRun(subrun));
        }
        if begin > end {
            return Err(RangeSetError::MalformedRecord {
                reason: format!("sub-run {subrun} has begin {begin} after end {end}"),
            });
        }
        Ok(Self::Bounded { subrun, begin, end })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSetRecord {
    pub run: RunNumber,
    pub ranges: Vec<EventRangeRecord>,
    pub full_run: bool,
    pub collapsed: bool,
}

impl From<RangeSet> for RangeSetRecord {
    fn from(set: RangeSet) -> Self {
        match set {
            RangeSet::FullRun(run) => Self { run, ranges: Vec::new(), full_run: true, collapsed: true },
            RangeSet::Partial(partial) => Self {
                run: partial.run(),
                ranges: partial.ranges().iter().copied().map(EventRangeRecord::from).collect(),
                full_run: false,
                collapsed: partial.is_collapsed(),
            },
        }
    }
}

impl TryFrom<RangeSetRecord> for RangeSet {
    type Error = RangeSetError;

    fn try_from(record: RangeSetRecord) -> Result<Self, Self::Error> {
        if record.full_run {
            if !record.ranges.is_empty() {
                return Err(RangeSetError::MalformedRecord {
                    reason: format!("full run {} carries {} event ranges", record.run, record.ranges.len()),
                });
            }
            return Ok(Self::FullRun(record.run));
        }
        let ranges = record
            .ranges
            .into_iter()
            .map(EventRange::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        if record.collapsed && !algebra::is_canonical(&ranges) {
            return Err(RangeSetError::MalformedRecord {
                reason: format!("run {} is flagged collapsed but its ranges are not canonical", record.run),
            });
        }
        Ok(Self::Partial(PartialRanges::from_parts(record.run, ranges, record.collapsed)))
    }
}
