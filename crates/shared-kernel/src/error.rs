// crates/shared-kernel/src/error.rs
use thiserror::Error;

use crate::value_objects::{EventId, RunNumber, SubRunNumber};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CoverageError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CoverageError>,
    },

    #[error("Range set error: {0}")]
    RangeSet(#[from] RangeSetError),

    #[error("Accumulation error: {0}")]
    Accumulate(#[from] AccumulateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, CoverageError>;

/// Failures of the event-range / range-set algebra.
///
/// Variants split into caller misuse ([`RangeSetError::is_logic_error`]) and
/// inconsistent input data ([`RangeSetError::is_data_corruption`]).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeSetError {
    #[error("cannot {operation} the full-run range set of run {run}")]
    FullRunImmutable { operation: &'static str, run: RunNumber },

    #[error("cannot {operation} the full sub-run event range of sub-run {subrun}")]
    FullSubRunImmutable { operation: &'static str, subrun: SubRunNumber },

    #[error("range set for run {run} must be sorted before it is collapsed")]
    NotSorted { run: RunNumber },

    #[error("invalid event range for sub-run {subrun}: begin {begin} is after end {end}")]
    InvalidBounds { subrun: SubRunNumber, begin: u32, end: u32 },

    #[error("event id {id} is not a valid event to record")]
    InvalidEventId { id: EventId },

    #[error("index range {start}..{end} is out of bounds for {len} event ranges")]
    IndexOutOfRange { start: usize, end: usize, len: usize },

    #[error("cannot combine coverage of run {other} with coverage of run {run}")]
    RunMismatch { run: RunNumber, other: RunNumber },

    #[error("overlapping event ranges in run {run}: '{previous}' and '{next}'")]
    EventRangeOverlap { run: RunNumber, previous: String, next: String },

    #[error("malformed range set record: {reason}")]
    MalformedRecord { reason: String },
}

impl RangeSetError {
    /// The caller broke the usage protocol (mutated a sentinel, skipped `sort`, ...).
    pub fn is_logic_error(&self) -> bool {
        !self.is_data_corruption()
    }

    /// The data itself is inconsistent and must be rejected, not repaired.
    pub fn is_data_corruption(&self) -> bool {
        matches!(self, Self::EventRangeOverlap { .. } | Self::MalformedRecord { .. })
    }
}

pub type RangeSetResult<T> = std::result::Result<T, RangeSetError>;

/// Errors raised while combining worker contributions for one run.
#[derive(Debug, Error)]
pub enum AccumulateError {
    #[error("contribution for run {run} overlaps accumulated coverage {accumulated}: {contribution}")]
    OverlappingContribution { run: RunNumber, accumulated: String, contribution: String },

    #[error("contribution {contribution} was already absorbed for run {run}")]
    DuplicateContribution { run: RunNumber, contribution: String },

    #[error("contribution could not be canonicalised: {source}")]
    Canonicalize {
        #[source]
        source: RangeSetError,
    },
}

pub type AccumulateResult<T> = std::result::Result<T, AccumulateError>;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse {format} configuration: {details}")]
    Parse { format: String, details: String },

    #[error("Invalid configuration: {reason}")]
    Invalid { reason: String },
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CoverageError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CoverageError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CoverageError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
