// crates/usecase/src/combine.rs
use event_coverage_domain::RangeSet;
use event_coverage_shared_kernel::{ErrorContext, RangeSetResult, Result};

use crate::{accumulator::RunCoverageAccumulator, config::AccumulatorConfig};

fn canonicalize(mut part: RangeSet) -> RangeSetResult<RangeSet> {
    part.sort().collapse()?;
    Ok(part)
}

/// Sorts and collapses every contribution, keeping their order.
#[cfg(feature = "parallel")]
pub fn canonicalize_all(parts: Vec<RangeSet>) -> RangeSetResult<Vec<RangeSet>> {
    use rayon::prelude::*;

    parts.into_par_iter().map(canonicalize).collect()
}

/// Sorts and collapses every contribution, keeping their order.
#[cfg(not(feature = "parallel"))]
pub fn canonicalize_all(parts: Vec<RangeSet>) -> RangeSetResult<Vec<RangeSet>> {
    parts.into_iter().map(canonicalize).collect()
}

/// Canonicalises a batch of worker contributions and folds them, in
/// order, into one run accumulator.
pub fn combine(parts: Vec<RangeSet>, config: AccumulatorConfig) -> Result<RunCoverageAccumulator> {
    let count = parts.len();
    let canonical = canonicalize_all(parts).context("canonicalising worker contributions")?;
    let mut accumulator = RunCoverageAccumulator::new(config);
    for (index, part) in canonical.iter().enumerate() {
        accumulator
            .absorb(part)
            .with_context(|| format!("absorbing contribution {} of {count}", index + 1))?;
    }
    log::debug!(
        "combined {count} contributions for run {}: {} merged, {} skipped",
        accumulator.run(),
        accumulator.merged_count(),
        accumulator.skipped_count()
    );
    Ok(accumulator)
}
