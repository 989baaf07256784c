//! Weekday and time slot models.
//!
//! Defines when a section meets: a set of weekdays plus one time slot
//! per day.
//!
//! # Time Model
//! Times are integers encoding a 24-hour clock as `HHMM`
//! (1300 = 1:00 PM). Slots carry the invariant `start < end`.
//!
//! # Overlap Rule
//! Slot comparison is inclusive-bounded: two slots conflict if either's
//! start or end falls within the other's `[start, end]` range. A section
//! ending at 1300 therefore conflicts with one starting at 1300.

use serde::{Deserialize, Serialize};

/// A day of the week on which a section meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// A meeting time interval `[start, end]` in `HHMM` clock encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Meeting start (`HHMM`, inclusive).
    pub start: u16,
    /// Meeting end (`HHMM`, inclusive).
    pub end: u16,
}

impl TimeSlot {
    /// Creates a new time slot. Expects `start < end`.
    pub fn new(start: u16, end: u16) -> Self {
        Self { start, end }
    }

    /// Whether a clock time falls within this slot (inclusive bounds).
    #[inline]
    pub fn contains(&self, time: u16) -> bool {
        time >= self.start && time <= self.end
    }

    /// Whether two slots overlap under the inclusive rule.
    ///
    /// Back-to-back slots (one ending exactly when the other starts)
    /// count as overlapping.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
