//! Textual encodings and the content checksum.

use std::fmt;

use super::RangeSet;
use crate::event_range::EventRange;

impl RangeSet {
    /// Order-sensitive text form: `<run>` for the full run, otherwise
    /// `<run>:` followed by `<subrun>[<begin>,<end>)` per range (a whole
    /// sub-run renders as `<subrun>[*]`).
    ///
    /// Canonicalise first when the string is meant for comparison.
    pub fn to_compact_string(&self) -> String {
        let mut out = self.run().to_string();
        if !self.is_empty() && !self.is_full_run() {
            out.push(':');
        }
        for range in self.ranges() {
            out.push_str(&match range {
                EventRange::FullSubRun(subrun) => format!("{subrun}[*]"),
                EventRange::Bounded { subrun, begin, end } => format!("{subrun}[{begin},{end})"),
            });
        }
        out
    }

    /// CRC-32 of [`to_compact_string`](Self::to_compact_string), recomputed
    /// from the current content on every call.
    pub fn checksum(&self) -> u32 {
        crc32fast::hash(self.to_compact_string().as_bytes())
    }
}

impl fmt::Display for RangeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " Run: {}", self.run())?;
        if self.is_full_run() {
            return f.write_str(" (full run)");
        }
        for range in self.ranges() {
            write!(f, "\n  {range}")?;
        }
        Ok(())
    }
}
