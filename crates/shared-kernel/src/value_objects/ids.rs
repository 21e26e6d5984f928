// crates/shared-kernel/src/value_objects/ids.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EventNumber, RunNumber, SubRunNumber};

/// Fully qualified sub-run identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct SubRunId {
    pub run: RunNumber,
    pub subrun: SubRunNumber,
}

impl SubRunId {
    pub const fn new(run: RunNumber, subrun: SubRunNumber) -> Self {
        Self { run, subrun }
    }

    pub const fn is_valid(&self) -> bool {
        self.run.is_valid() && self.subrun.is_valid()
    }
}

impl From<(u32, u32)> for SubRunId {
    fn from((run, subrun): (u32, u32)) -> Self {
        Self::new(run.into(), subrun.into())
    }
}

impl fmt::Display for SubRunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.run, self.subrun)
    }
}

/// Fully qualified event identifier. Orders by run, then sub-run, then event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct EventId {
    pub run: RunNumber,
    pub subrun: SubRunNumber,
    pub event: EventNumber,
}

impl EventId {
    pub const fn new(run: RunNumber, subrun: SubRunNumber, event: EventNumber) -> Self {
        Self { run, subrun, event }
    }

    pub const fn is_valid(&self) -> bool {
        self.run.is_valid() && self.subrun.is_valid() && self.event.is_valid()
    }

    pub const fn subrun_id(&self) -> SubRunId {
        SubRunId::new(self.run, self.subrun)
    }

    /// Same sub-run, following event number.
    pub const fn next_event(&self) -> Self {
        Self::new(self.run, self.subrun, self.event.next())
    }
}

impl From<(u32, u32, u32)> for EventId {
    fn from((run, subrun, event): (u32, u32, u32)) -> Self {
        Self::new(run.into(), subrun.into(), event.into())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.run, self.subrun, self.event)
    }
}
