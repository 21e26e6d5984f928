// tests/common/builders.rs
use event_coverage::prelude::*;

/// Range set test builder.
#[allow(dead_code)]
pub struct RangeSetBuilder {
    run: u32,
    ranges: Vec<(u32, u32, u32)>,
}

#[allow(dead_code)]
impl RangeSetBuilder {
    pub fn new(run: u32) -> Self {
        Self { run, ranges: Vec::new() }
    }

    pub fn range(mut self, subrun: u32, begin: u32, end: u32) -> Self {
        self.ranges.push((subrun, begin, end));
        self
    }

    /// Appends one single-event range per event, as a worker seeing them would.
    pub fn events(mut self, subrun: u32, events: impl IntoIterator<Item = u32>) -> Self {
        self.ranges.extend(events.into_iter().map(|e| (subrun, e, e + 1)));
        self
    }

    /// Raw, unsorted and uncollapsed.
    pub fn build(self) -> RangeSet {
        let mut rs = RangeSet::new(self.run.into());
        for (s, b, e) in self.ranges {
            rs.emplace_range(s.into(), b.into(), e.into()).expect("valid bounds");
        }
        rs
    }

    pub fn canonical(self) -> RangeSet {
        self.build().collapsed().expect("collapses")
    }
}

/// Events `1..=count` of one sub-run, dealt round-robin in blocks of
/// `block` to `workers` producers.
#[allow(dead_code)]
pub fn deal_blocks(run: u32, subrun: u32, count: u32, block: u32, workers: usize) -> Vec<RangeSet> {
    let mut parts: Vec<RangeSetBuilder> = (0..workers).map(|_| RangeSetBuilder::new(run)).collect();
    let mut begin = 1;
    let mut worker = 0;
    while begin <= count {
        let end = (begin + block).min(count + 1);
        let part = std::mem::replace(&mut parts[worker], RangeSetBuilder::new(run));
        parts[worker] = part.range(subrun, begin, end);
        begin = end;
        worker = (worker + 1) % workers;
    }
    parts.into_iter().map(RangeSetBuilder::build).collect()
}
