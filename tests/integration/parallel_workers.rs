// tests/integration/parallel_workers.rs
use event_coverage::prelude::*;
use rayon::prelude::*;

use crate::common::{RangeSetBuilder, deal_blocks};

/// Each worker records its share of the events one by one, as a
/// processing job would.
fn record_in_parallel(run: u32, subrun: u32, count: u32, workers: u32) -> Vec<RangeSet> {
    (0..workers)
        .into_par_iter()
        .map(|worker| {
            let mut tracker = OpenCoverageTracker::new(run.into());
            for event in (1..=count).filter(|e| e % workers == worker) {
                tracker.update(EventId::from((run, subrun, event)), event == count).unwrap();
            }
            tracker.seen_ranges().unwrap()
        })
        .collect()
}

#[test]
fn interleaved_workers_recombine_into_one_range() {
    let parts = record_in_parallel(7, 1, 500, 4);
    assert!(parts.iter().all(RangeSet::is_collapsed));
    for (i, a) in parts.iter().enumerate() {
        for b in &parts[i + 1..] {
            assert!(disjoint_ranges(a, b));
        }
    }

    let accumulator = combine(parts, AccumulatorConfig::default()).unwrap();
    assert_eq!(accumulator.merged_count(), 4);
    assert_eq!(accumulator.coverage().to_compact_string(), "7:1[1,501)");
}

#[test]
fn combine_order_does_not_change_the_result() {
    let parts = deal_blocks(3, 2, 1000, 37, 5);
    let mut reversed = parts.clone();
    reversed.reverse();

    let forward = combine(parts, AccumulatorConfig::default()).unwrap().into_coverage();
    let backward = combine(reversed, AccumulatorConfig::default()).unwrap().into_coverage();
    assert!(same_ranges(&forward, &backward));
    assert_eq!(forward.checksum(), backward.checksum());
    assert_eq!(forward.to_compact_string(), "3:2[1,1001)");
}

#[test]
fn parallel_pairwise_reduction_matches_sequential_fold() {
    let parts: Vec<RangeSet> = deal_blocks(1, 1, 640, 8, 16)
        .into_iter()
        .map(|p| p.collapsed().unwrap())
        .collect();

    let sequential = parts.iter().fold(RangeSet::invalid(), |mut acc, p| {
        acc.merge(p).unwrap();
        acc
    });
    let reduced = parts
        .into_par_iter()
        .map(Ok::<_, RangeSetError>)
        .reduce(
            || Ok(RangeSet::invalid()),
            |l, r| {
                let (mut l, r) = (l?, r?);
                l.merge(&r)?;
                Ok(l)
            },
        )
        .unwrap();
    assert_eq!(reduced, sequential);
    assert_eq!(reduced.to_compact_string(), "1:1[1,641)");
}

#[test]
fn a_replayed_worker_is_skipped_once() {
    let mut parts = deal_blocks(2, 1, 100, 10, 3);
    parts.push(parts[1].clone());

    let accumulator = combine(parts, AccumulatorConfig::default()).unwrap();
    assert_eq!(accumulator.merged_count(), 3);
    assert_eq!(accumulator.skipped_count(), 1);
    assert_eq!(accumulator.coverage().to_compact_string(), "2:1[1,101)");
}

#[test]
fn a_replayed_worker_can_be_refused() {
    let mut parts = deal_blocks(2, 1, 100, 10, 3);
    parts.push(parts[0].clone());
    let config = AccumulatorConfig::builder()
        .duplicates(DuplicatePolicy::Reject)
        .build()
        .unwrap();

    let err = combine(parts, config).unwrap_err();
    assert!(err.to_string().contains("absorbing contribution 4 of 4"), "{err}");
}

#[test]
fn overlapping_workers_are_reported() {
    let a = RangeSetBuilder::new(9).range(1, 1, 50).build();
    let b = RangeSetBuilder::new(9).range(1, 40, 90).build();

    assert!(overlapping_ranges(&a.collapsed().unwrap(), &b.collapsed().unwrap()));
    assert!(combine(vec![a.clone(), b.clone()], AccumulatorConfig::default()).is_err());

    let lenient = AccumulatorConfig::builder().overlaps(OverlapPolicy::Ignore).build().unwrap();
    let accumulator = combine(vec![a, b], lenient).unwrap();
    assert_eq!(accumulator.skipped_count(), 1);
    assert_eq!(accumulator.coverage().to_compact_string(), "9:1[1,50)");
}

#[test]
fn a_whole_run_absorbs_later_partial_workers() {
    let whole = RangeSet::for_run(5.into());
    let part = RangeSetBuilder::new(5).range(3, 1, 9).build();

    let mut merged = part.collapsed().unwrap();
    merged.merge(&whole).unwrap();
    assert!(merged.is_full_run());
    assert_eq!(merged.to_compact_string(), "5");
}

#[test]
fn workers_from_different_runs_never_mix() {
    let a = RangeSetBuilder::new(1).range(1, 1, 5).canonical();
    let b = RangeSetBuilder::new(2).range(1, 1, 5).canonical();
    assert!(disjoint_ranges(&a, &b));

    let mut merged = a.clone();
    let err = merged.merge(&b).unwrap_err();
    assert!(matches!(err, RangeSetError::RunMismatch { .. }));
    assert_eq!(merged, a);
}
