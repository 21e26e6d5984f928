//! # Use Cases
//!
//! Coverage bookkeeping on top of the domain algebra.
//!
//! - [`tracker`]: per-artifact coverage while events are processed
//! - [`accumulator`]: the run-level merge point for worker contributions
//! - [`combine`]: batch canonicalisation and folding of contributions
//! - [`config`]: accumulator policies
//!
//! Nothing here locks: each tracker and accumulator has one owner, and
//! finished sets are handed over rather than shared.

#![allow(clippy::multiple_crate_versions)]

pub mod accumulator;
pub mod combine;
pub mod config;
pub mod tracker;

pub use accumulator::{Absorption, RunCoverageAccumulator};
pub use combine::{canonicalize_all, combine};
pub use config::{AccumulatorConfig, AccumulatorConfigBuilder, DuplicatePolicy, OverlapPolicy};
pub use tracker::{ClosedCoverageTracker, CoverageTracker, OpenCoverageTracker};
