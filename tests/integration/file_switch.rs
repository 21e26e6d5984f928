// tests/integration/file_switch.rs
use event_coverage::prelude::*;

use crate::common::RangeSetBuilder;

/// Copies `events` through `tracker`, closing the current output after
/// `switch_after` events. Returns the coverage reported by each output.
fn copy_with_switch<T: CoverageTracker>(
    tracker: &mut T,
    events: &[(u32, u32, u32, bool)],
    switch_after: usize,
) -> (RangeSet, RangeSet) {
    let (head, tail) = events.split_at(switch_after);
    for &(r, s, e, last) in head {
        tracker.update(EventId::from((r, s, e)), last).unwrap();
    }
    tracker.maybe_split_range().unwrap();
    let first = tracker.seen_ranges().unwrap();
    tracker.rebase().unwrap();

    for &(r, s, e, last) in tail {
        tracker.update(EventId::from((r, s, e)), last).unwrap();
    }
    tracker.flush_ranges().unwrap();
    let second = tracker.seen_ranges().unwrap();
    (first, second)
}

fn events_of(run: u32, layout: &[(u32, u32, u32)]) -> Vec<(u32, u32, u32, bool)> {
    layout
        .iter()
        .flat_map(|&(s, b, e)| (b..e).map(move |ev| (run, s, ev, ev + 1 == e)))
        .collect()
}

#[test]
fn closed_input_is_partitioned_across_outputs() {
    let layout = [(1, 1, 10), (2, 1, 5), (4, 3, 8)];
    let input = layout
        .iter()
        .fold(RangeSetBuilder::new(6), |b, &(s, lo, hi)| b.range(s, lo, hi))
        .canonical();
    let events = events_of(6, &layout);

    for switch_after in 1..events.len() {
        let mut tracker = ClosedCoverageTracker::new(&input).unwrap();
        let (first, second) = copy_with_switch(&mut tracker, &events, switch_after);

        assert!(disjoint_ranges(&first, &second), "switch after {switch_after}: {first} vs {second}");
        let mut union = first.clone();
        union.merge(&second).unwrap();
        assert!(same_ranges(&union, &input), "switch after {switch_after}: {union}");
    }
}

#[test]
fn open_outputs_recombine_to_what_was_seen() {
    let events = events_of(2, &[(1, 1, 6), (1, 9, 12), (3, 1, 4)]);
    let mut tracker = OpenCoverageTracker::new(2.into());
    let (first, second) = copy_with_switch(&mut tracker, &events, 7);

    assert_eq!(first.to_compact_string(), "2:1[1,6)1[9,11)");
    assert_eq!(second.to_compact_string(), "2:1[11,12)3[1,4)");

    let accumulator = combine(vec![second, first], AccumulatorConfig::default()).unwrap();
    assert_eq!(accumulator.coverage().to_compact_string(), "2:1[1,6)1[9,12)3[1,4)");
}

#[test]
fn trackers_share_one_interface() {
    let input = RangeSetBuilder::new(1).range(1, 1, 4).canonical();
    let mut trackers: Vec<Box<dyn CoverageTracker>> = vec![
        Box::new(OpenCoverageTracker::new(1.into())),
        Box::new(ClosedCoverageTracker::new(&input).unwrap()),
    ];
    for tracker in &mut trackers {
        for event in 1..4 {
            tracker.update(EventId::from((1, 1, event)), event == 3).unwrap();
        }
        tracker.flush_ranges().unwrap();
        assert_eq!(tracker.seen_ranges().unwrap().to_compact_string(), "1:1[1,4)");
    }
}
