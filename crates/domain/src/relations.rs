//! Relations between two coverage sets.
//!
//! These are the checks a combining layer runs before it unions two
//! partial products: equal coverage usually means the same data was seen
//! twice, disjoint coverage is the expected outcome of correct parallel
//! processing, and anything else is an overlap.

use crate::range_set::{RangeSet, algebra};

fn both_valid(l: &RangeSet, r: &RangeSet) -> bool {
    l.is_valid() && r.is_valid()
}

/// Both sets are valid and cover exactly the same ranges of the same run.
pub fn same_ranges(l: &RangeSet, r: &RangeSet) -> bool {
    both_valid(l, r) && l == r
}

/// Both sets are valid and no event is covered by both.
///
/// A set that is not internally disjoint is never disjoint from anything.
/// Neither operand is modified.
pub fn disjoint_ranges(l: &RangeSet, r: &RangeSet) -> bool {
    if !both_valid(l, r) || same_ranges(l, r) {
        return false;
    }
    if !l.has_disjoint_ranges() || !r.has_disjoint_ranges() {
        return false;
    }
    if l.run() != r.run() {
        return true;
    }
    // an empty set shares nothing, even with the full run
    if l.is_empty() || r.is_empty() {
        return true;
    }
    if l.is_full_run() || r.is_full_run() {
        return false;
    }
    let (Ok(l), Ok(r)) = (l.collapsed(), r.collapsed()) else {
        return false;
    };
    algebra::pairwise_disjoint(&algebra::interleave(l.ranges(), r.ranges()))
}

/// Both sets are valid, not the same, and not disjoint.
pub fn overlapping_ranges(l: &RangeSet, r: &RangeSet) -> bool {
    both_valid(l, r) && !same_ranges(l, r) && !disjoint_ranges(l, r)
}
