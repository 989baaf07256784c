//! Schedule (result) model.
//!
//! A schedule accumulates placed courses, their credit total, and the
//! occupied time slots per weekday. Validity means no two slots on the
//! same day overlap; the solver guarantees this by checking every
//! section against the schedule before committing it.
//!
//! # Ordering
//! `week_times` holds one entry per day, ordered by first insertion, and
//! courses are committed group-by-group in their fixed list order. The
//! structural comparator [`Schedule::identical_to`] relies on this:
//! schedules with identical composition build `week_times` identically.

use serde::{Deserialize, Serialize};

use super::{Course, Section, TimeSlot, Weekday};

/// The occupied time slots on one weekday.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayTimes {
    /// The weekday.
    pub day: Weekday,
    /// Every occupied slot on that day, in insertion order.
    pub times: Vec<TimeSlot>,
}

/// A generated weekly schedule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Placed courses, in placement order.
    pub courses: Vec<Course>,
    /// Running sum of selected sections' credits.
    pub credit_total: f64,
    /// Occupied slots per day, ordered by first insertion; no day
    /// appears twice.
    pub week_times: Vec<DayTimes>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// The occupied slots for a day, if any section meets on it.
    pub fn times_for_day(&self, day: Weekday) -> Option<&[TimeSlot]> {
        self.week_times
            .iter()
            .find(|wt| wt.day == day)
            .map(|wt| wt.times.as_slice())
    }

    /// Commits a placed course: pushes it, then records every group's
    /// selected section in group-list order.
    ///
    /// Assumes the course does not conflict with this schedule.
    pub fn add_course(&mut self, course: &Course) {
        self.courses.push(course.clone());
        for group in &course.groups {
            if let Some(section) = &group.selected {
                self.add_section(section);
            }
        }
    }

    /// Adds one selected section's credits and day/time entries.
    fn add_section(&mut self, section: &Section) {
        self.credit_total += section.credits;

        let (Some(days), Some(time)) = (&section.days, section.time) else {
            return;
        };
        for &day in days {
            match self.week_times.iter_mut().find(|wt| wt.day == day) {
                Some(entry) => entry.times.push(time),
                None => self.week_times.push(DayTimes {
                    day,
                    times: vec![time],
                }),
            }
        }
    }

    /// Structural equality, used to deduplicate generated schedules.
    ///
    /// Two schedules are identical iff course count, credit total, and
    /// day count match; each day's slot count matches positionally;
    /// course titles match once both lists are sorted lexicographically;
    /// and days and slots match positionally. Sensitive to insertion
    /// order: the engine commits groups in fixed order, so schedules
    /// with the same composition compare equal.
    pub fn identical_to(&self, other: &Self) -> bool {
        if self.courses.len() != other.courses.len()
            || self.credit_total != other.credit_total
            || self.week_times.len() != other.week_times.len()
        {
            return false;
        }
        if self
            .week_times
            .iter()
            .zip(&other.week_times)
            .any(|(a, b)| a.times.len() != b.times.len())
        {
            return false;
        }

        let mut titles_a: Vec<&str> = self.courses.iter().map(|c| c.title.as_str()).collect();
        let mut titles_b: Vec<&str> = other.courses.iter().map(|c| c.title.as_str()).collect();
        titles_a.sort_unstable();
        titles_b.sort_unstable();
        if titles_a != titles_b {
            return false;
        }

        self.week_times
            .iter()
            .zip(&other.week_times)
            .all(|(a, b)| a.day == b.day && a.times == b.times)
    }
}
