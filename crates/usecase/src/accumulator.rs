// crates/usecase/src/accumulator.rs
use std::collections::HashMap;

use event_coverage_domain::{RangeSet, disjoint_ranges, same_ranges};
use event_coverage_shared_kernel::{AccumulateError, RangeSetError, Result, RunNumber};

use crate::config::{AccumulatorConfig, DuplicatePolicy, OverlapPolicy};

/// Outcome of [`RunCoverageAccumulator::absorb`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absorption {
    Merged,
    /// Identical to an earlier contribution and skipped.
    Duplicate,
    /// Overlapping and dropped under [`OverlapPolicy::Ignore`].
    OverlapSkipped,
    /// Invalid contribution, nothing to do.
    Ignored,
}

/// Run-level merge point for per-worker coverage.
///
/// Exactly one accumulator exists per run; workers hand their finished
/// sets over instead of sharing them.
#[derive(Debug, Clone)]
pub struct RunCoverageAccumulator {
    config: AccumulatorConfig,
    coverage: RangeSet,
    /// Merged contributions keyed by checksum.
    absorbed: HashMap<u32, Vec<RangeSet>>,
    merged: usize,
    skipped: usize,
}

impl RunCoverageAccumulator {
    pub fn new(config: AccumulatorConfig) -> Self {
        let coverage = config.expected_run.map_or_else(RangeSet::invalid, RangeSet::new);
        Self { config, coverage, absorbed: HashMap::new(), merged: 0, skipped: 0 }
    }

    pub fn config(&self) -> &AccumulatorConfig {
        &self.config
    }

    pub fn run(&self) -> RunNumber {
        self.coverage.run()
    }

    /// Canonical union of everything merged so far.
    pub fn coverage(&self) -> &RangeSet {
        &self.coverage
    }

    pub fn into_coverage(self) -> RangeSet {
        self.coverage
    }

    pub fn merged_count(&self) -> usize {
        self.merged
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped
    }

    /// Folds one contribution into the run coverage.
    ///
    /// The contribution is canonicalised on a private copy. Identical
    /// contributions are recognised by checksum and confirmed with
    /// [`same_ranges`]; anything else must be disjoint from the coverage
    /// accumulated so far.
    ///
    /// # Errors
    ///
    /// A contribution for another run, one that cannot be canonicalised, and
    /// duplicates or overlaps when the configured policy rejects them.
    pub fn absorb(&mut self, contribution: &RangeSet) -> Result<Absorption> {
        if !contribution.is_valid() {
            log::debug!("ignoring contribution without a valid run");
            return Ok(Absorption::Ignored);
        }
        let run = self.coverage.run();
        if run.is_valid() && run != contribution.run() {
            return Err(RangeSetError::RunMismatch { run, other: contribution.run() }.into());
        }
        let canonical = contribution
            .collapsed()
            .map_err(|source| AccumulateError::Canonicalize { source })?;

        let checksum = canonical.checksum();
        let is_duplicate = !canonical.is_empty()
            && self
                .absorbed
                .get(&checksum)
                .is_some_and(|seen| seen.iter().any(|s| same_ranges(s, &canonical)));
        if is_duplicate {
            return match self.config.duplicates {
                DuplicatePolicy::Skip => {
                    log::warn!("run {}: skipping duplicate contribution {}", canonical.run(), canonical.to_compact_string());
                    self.skipped += 1;
                    Ok(Absorption::Duplicate)
                }
                DuplicatePolicy::Reject => Err(AccumulateError::DuplicateContribution {
                    run: canonical.run(),
                    contribution: canonical.to_compact_string(),
                }
                .into()),
            };
        }

        let compatible = !self.coverage.is_valid()
            || self.coverage.is_empty()
            || canonical.is_empty()
            || disjoint_ranges(&self.coverage, &canonical);
        if !compatible {
            return match self.config.overlaps {
                OverlapPolicy::Reject => Err(AccumulateError::OverlappingContribution {
                    run: canonical.run(),
                    accumulated: self.coverage.to_compact_string(),
                    contribution: canonical.to_compact_string(),
                }
                .into()),
                OverlapPolicy::Ignore => {
                    log::warn!(
                        "run {}: dropping contribution {} overlapping {}",
                        canonical.run(),
                        canonical.to_compact_string(),
                        self.coverage.to_compact_string()
                    );
                    self.skipped += 1;
                    Ok(Absorption::OverlapSkipped)
                }
            };
        }

        self.coverage.merge(&canonical)?;
        log::debug!(
            "run {}: merged contribution {:08x}, coverage now {}",
            canonical.run(),
            checksum,
            self.coverage.to_compact_string()
        );
        self.absorbed.entry(checksum).or_default().push(canonical);
        self.merged += 1;
        Ok(Absorption::Merged)
    }
}

impl Default for RunCoverageAccumulator {
    fn default() -> Self {
        Self::new(AccumulatorConfig::default())
    }
}
