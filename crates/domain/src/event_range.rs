//! Contiguous block of covered events inside one sub-run.

use std::{cmp::Ordering, fmt};

use event_coverage_shared_kernel::{EventNumber, RangeSetError, RangeSetResult, SubRunNumber};
use serde::{Deserialize, Serialize};

use crate::record::EventRangeRecord;

/// Half-open event range `[begin, end)` scoped to one sub-run, or the
/// whole-sub-run sentinel.
///
/// Ranges order by `(subrun, begin, end)`. Within a sub-run the
/// whole-sub-run sentinel sorts first, so a sorted sequence always meets
/// the sentinel before any bounded range it absorbs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "EventRangeRecord", into = "EventRangeRecord")]
pub enum EventRange {
    /// Every event of the sub-run.
    FullSubRun(SubRunNumber),
    Bounded {
        subrun: SubRunNumber,
        begin: EventNumber,
        end: EventNumber,
    },
}

impl EventRange {
    /// Bounded range `[begin, end)`; `begin == end` is an empty range.
    pub fn new(subrun: SubRunNumber, begin: EventNumber, end: EventNumber) -> RangeSetResult<Self> {
        if begin > end {
            return Err(RangeSetError::InvalidBounds {
                subrun,
                begin: begin.value(),
                end: end.value(),
            });
        }
        Ok(Self::Bounded { subrun, begin, end })
    }

    pub const fn for_subrun(subrun: SubRunNumber) -> Self {
        Self::FullSubRun(subrun)
    }

    /// The uninitialised range: invalid sub-run, no events.
    pub const fn invalid() -> Self {
        Self::Bounded {
            subrun: SubRunNumber::INVALID,
            begin: EventNumber::INVALID,
            end: EventNumber::INVALID,
        }
    }

    #[inline]
    pub const fn subrun(&self) -> SubRunNumber {
        match *self {
            Self::FullSubRun(subrun) | Self::Bounded { subrun, .. } => subrun,
        }
    }

    /// First covered event, `None` for the whole-sub-run sentinel.
    #[inline]
    pub const fn begin(&self) -> Option<EventNumber> {
        match *self {
            Self::FullSubRun(_) => None,
            Self::Bounded { begin, .. } => Some(begin),
        }
    }

    /// One past the last covered event, `None` for the whole-sub-run sentinel.
    #[inline]
    pub const fn end(&self) -> Option<EventNumber> {
        match *self {
            Self::FullSubRun(_) => None,
            Self::Bounded { end, .. } => Some(end),
        }
    }

    /// Number of covered events; the whole-sub-run sentinel has no size.
    #[inline]
    pub const fn size(&self) -> Option<u32> {
        match *self {
            Self::FullSubRun(_) => None,
            Self::Bounded { begin, end, .. } => Some(begin.distance_to(end)),
        }
    }

    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.subrun().is_valid()
    }

    #[inline]
    pub const fn is_full_subrun(&self) -> bool {
        matches!(self, Self::FullSubRun(_))
    }

    /// A bounded range with `begin == end`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Bounded { begin, end, .. } if begin.value() == end.value())
    }

    pub fn contains(&self, subrun: SubRunNumber, event: EventNumber) -> bool {
        match *self {
            Self::FullSubRun(s) => s == subrun,
            Self::Bounded { subrun: s, begin, end } => s == subrun && begin <= event && event < end,
        }
    }

    pub fn is_same(&self, other: &Self) -> bool {
        self == other
    }

    /// Same sub-run and touching end-to-begin in either order.
    pub fn is_adjacent(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Bounded { subrun: s1, begin: b1, end: e1 }, Self::Bounded { subrun: s2, begin: b2, end: e2 }) => {
                s1 == s2 && (e1 == b2 || e2 == b1)
            }
            _ => false,
        }
    }

    /// No event lies in both ranges. An empty range is disjoint from
    /// everything.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        if self.subrun() != other.subrun() || self.is_empty() || other.is_empty() {
            return true;
        }
        match (*self, *other) {
            (Self::Bounded { begin: b1, end: e1, .. }, Self::Bounded { begin: b2, end: e2, .. }) => {
                e1 <= b2 || e2 <= b1
            }
            // a sentinel shares every event of its sub-run
            (Self::FullSubRun(_), _) | (_, Self::FullSubRun(_)) => false,
        }
    }

    pub fn is_overlapping(&self, other: &Self) -> bool {
        self.subrun() == other.subrun() && !self.is_disjoint(other)
    }

    /// Every event of `self` is also in `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.subrun() != other.subrun() {
            return false;
        }
        match (*self, *other) {
            (_, Self::FullSubRun(_)) => true,
            (Self::FullSubRun(_), Self::Bounded { .. }) => false,
            (Self::Bounded { begin: b1, end: e1, .. }, Self::Bounded { begin: b2, end: e2, .. }) => {
                b2 <= b1 && e1 <= e2
            }
        }
    }

    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Widens `self` to the union with `other` when that union is one
    /// contiguous range: adjacent ranges, or one containing the other.
    ///
    /// Returns `false`, leaving `self` untouched, for different sub-runs,
    /// gaps and partial overlaps. Empty ranges are absorbed.
    pub fn merge(&mut self, other: &Self) -> bool {
        if self.subrun() != other.subrun() {
            return false;
        }
        if other.is_empty() || self.is_superset(other) {
            return true;
        }
        if self.is_empty() || self.is_subset(other) {
            *self = *other;
            return true;
        }
        if let (Self::Bounded { begin, end, .. }, Self::Bounded { begin: b2, end: e2, .. }) = (self, *other) {
            if *end == b2 {
                *end = e2;
                return true;
            }
            if e2 == *begin {
                *begin = b2;
                return true;
            }
        }
        false
    }

    /// Moves the upper bound. The whole-sub-run sentinel cannot be narrowed.
    pub fn set_end(&mut self, new_end: EventNumber) -> RangeSetResult<()> {
        match self {
            Self::FullSubRun(subrun) => Err(RangeSetError::FullSubRunImmutable {
                operation: "set the end of",
                subrun: *subrun,
            }),
            Self::Bounded { subrun, begin, end } => {
                if new_end < *begin {
                    return Err(RangeSetError::InvalidBounds {
                        subrun: *subrun,
                        begin: begin.value(),
                        end: new_end.value(),
                    });
                }
                *end = new_end;
                Ok(())
            }
        }
    }
}

impl Default for EventRange {
    fn default() -> Self {
        Self::invalid()
    }
}

impl Ord for EventRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.subrun().cmp(&other.subrun()).then_with(|| match (*self, *other) {
            (Self::FullSubRun(_), Self::FullSubRun(_)) => Ordering::Equal,
            (Self::FullSubRun(_), Self::Bounded { .. }) => Ordering::Less,
            (Self::Bounded { .. }, Self::FullSubRun(_)) => Ordering::Greater,
            (Self::Bounded { begin: b1, end: e1, .. }, Self::Bounded { begin: b2, end: e2, .. }) => {
                b1.cmp(&b2).then(e1.cmp(&e2))
            }
        })
    }
}

impl PartialOrd for EventRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for EventRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FullSubRun(subrun) => write!(f, "SubRun: {subrun} (full sub-run)"),
            Self::Bounded { subrun, begin, end } => write!(f, "SubRun: {subrun} Event range: [{begin},{end})"),
        }
    }
}
