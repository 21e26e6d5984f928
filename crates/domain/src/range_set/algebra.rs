//! Sequence-level operations over sorted event ranges.

use std::borrow::Cow;

use event_coverage_shared_kernel::{RangeSetError, RangeSetResult, RunNumber};

use crate::event_range::EventRange;

pub(crate) fn is_sorted(ranges: &[EventRange]) -> bool {
    ranges.windows(2).all(|w| w[0] <= w[1])
}

/// Sorted view of `ranges`, copying only when they are out of order.
pub(crate) fn sorted(ranges: &[EventRange]) -> Cow<'_, [EventRange]> {
    if is_sorted(ranges) {
        Cow::Borrowed(ranges)
    } else {
        let mut owned = ranges.to_vec();
        owned.sort();
        Cow::Owned(owned)
    }
}

/// Folds a sorted sequence into its coalesced form.
///
/// Adjacent ranges are joined and ranges contained in their predecessor
/// are absorbed (including equal begins, where the predecessor is the
/// shorter one). A partial overlap is an error: which contribution is
/// right cannot be decided here. Empty ranges are dropped.
///
/// The output is built separately so a failure leaves the input untouched.
pub(crate) fn coalesce(run: RunNumber, sorted: &[EventRange]) -> RangeSetResult<Vec<EventRange>> {
    let mut out: Vec<EventRange> = Vec::with_capacity(sorted.len());
    for next in sorted.iter().filter(|r| !r.is_empty()) {
        let Some(last) = out.last_mut() else {
            out.push(*next);
            continue;
        };
        if last.is_adjacent(next) || last.is_overlapping(next) {
            if !last.merge(next) {
                log::debug!("run {run}: '{last}' partially overlaps '{next}'");
                return Err(RangeSetError::EventRangeOverlap {
                    run,
                    previous: last.to_string(),
                    next: next.to_string(),
                });
            }
        } else {
            out.push(*next);
        }
    }
    Ok(out)
}

/// Stable two-way merge of two sorted sequences.
pub(crate) fn interleave(left: &[EventRange], right: &[EventRange]) -> Vec<EventRange> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);
    while i < left.len() && j < right.len() {
        if right[j] < left[i] {
            out.push(right[j]);
            j += 1;
        } else {
            out.push(left[i]);
            i += 1;
        }
    }
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}

/// No two entries of a sorted sequence share an event.
///
/// Empty ranges are skipped; among the rest it is enough to compare
/// neighbours.
pub(crate) fn pairwise_disjoint(sorted: &[EventRange]) -> bool {
    let mut ranges = sorted.iter().filter(|r| !r.is_empty());
    let Some(mut previous) = ranges.next() else {
        return true;
    };
    for next in ranges {
        if !previous.is_disjoint(next) {
            return false;
        }
        previous = next;
    }
    true
}

/// Sorted, free of empty ranges, and with a gap or a sub-run change
/// between every consecutive pair.
pub(crate) fn is_canonical(ranges: &[EventRange]) -> bool {
    ranges.iter().all(|r| !r.is_empty())
        && ranges
            .windows(2)
            .all(|w| w[0] < w[1] && w[0].is_disjoint(&w[1]) && !w[0].is_adjacent(&w[1]))
}
