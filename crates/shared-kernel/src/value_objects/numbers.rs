// crates/shared-kernel/src/value_objects/numbers.rs
use serde::{Deserialize, Serialize};

/// Run number. `u32::MAX` is reserved as the invalid value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RunNumber(u32);

impl RunNumber {
    pub const INVALID: Self = Self(u32::MAX);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// The following run number, saturating at [`RunNumber::INVALID`].
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for RunNumber {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for RunNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Sub-run number, scoped to one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubRunNumber(u32);

impl SubRunNumber {
    pub const INVALID: Self = Self(u32::MAX);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for SubRunNumber {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for SubRunNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

/// Event number, scoped to one sub-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventNumber(u32);

impl EventNumber {
    pub const INVALID: Self = Self(u32::MAX);

    #[inline]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn invalid() -> Self {
        Self::INVALID
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }

    /// The following event number. Used as the exclusive end of a
    /// half-open range, so `u32::MAX - 1` maps onto the invalid value.
    #[inline]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Number of events in `[self, end)`, zero when `end` does not follow `self`.
    #[inline]
    pub const fn distance_to(self, end: Self) -> u32 {
        end.0.saturating_sub(self.0)
    }
}

impl Default for EventNumber {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<u32> for EventNumber {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl PartialEq<u32> for EventNumber {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

mod display {
    use std::fmt;

    use super::{EventNumber, RunNumber, SubRunNumber};

    fn write_number(f: &mut fmt::Formatter<'_>, value: u32) -> fmt::Result {
        if value == u32::MAX { f.write_str("-") } else { write!(f, "{value}") }
    }

    impl fmt::Display for RunNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_number(f, self.value())
        }
    }

    impl fmt::Display for SubRunNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_number(f, self.value())
        }
    }

    impl fmt::Display for EventNumber {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write_number(f, self.value())
        }
    }
}
