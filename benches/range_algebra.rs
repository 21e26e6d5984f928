use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use event_coverage::prelude::*;
use std::hint::black_box;

/// One single-event range per event, every `stride`-th event.
fn scattered(run: u32, subrun: u32, count: u32, offset: u32, stride: u32) -> RangeSet {
    let mut rs = RangeSet::new(run.into());
    for event in (1 + offset..=count).step_by(stride as usize) {
        rs.update(EventId::from((run, subrun, event))).unwrap();
    }
    rs
}

fn benchmark_collapse(c: &mut Criterion) {
    let mut rs = RangeSet::new(1.into());
    for event in (1..=10_000u32).rev() {
        rs.emplace_range(1.into(), event.into(), (event + 1).into()).unwrap();
    }
    c.bench_function("sort_collapse_10k_single_events", |b| {
        b.iter_batched(
            || rs.clone(),
            |mut rs| {
                rs.sort().collapse().unwrap();
                black_box(rs)
            },
            BatchSize::SmallInput,
        )
    });
}

fn benchmark_merge(c: &mut Criterion) {
    let even = scattered(1, 1, 20_000, 0, 2).collapsed().unwrap();
    let odd = scattered(1, 1, 20_000, 1, 2).collapsed().unwrap();
    c.bench_function("merge_interleaved_10k_each", |b| {
        b.iter_batched(
            || even.clone(),
            |mut rs| {
                rs.merge(black_box(&odd)).unwrap();
                black_box(rs)
            },
            BatchSize::SmallInput,
        )
    });
    c.bench_function("disjoint_interleaved_10k_each", |b| {
        b.iter(|| black_box(disjoint_ranges(black_box(&even), black_box(&odd))))
    });
}

fn benchmark_checksum(c: &mut Criterion) {
    let rs = scattered(1, 1, 20_000, 0, 3).collapsed().unwrap();
    c.bench_function("checksum_6k_ranges", |b| b.iter(|| black_box(rs.checksum())));
}

criterion_group!(benches, benchmark_collapse, benchmark_merge, benchmark_checksum);
criterion_main!(benches);
