//! Time-conflict predicates.
//!
//! Pure checks of a candidate section (or a course's current
//! selections) against the slots a schedule already occupies. Absence
//! is never a violation: sections without meetings and groups without a
//! selection cannot conflict.

use crate::models::{Course, Schedule, Section};

/// Whether a section's meetings overlap any slot the schedule already
/// occupies.
///
/// A section with no `days` or no `time` never conflicts. Otherwise each
/// of its days is checked against that day's recorded slots under the
/// inclusive overlap rule.
pub fn section_conflicts(section: &Section, schedule: &Schedule) -> bool {
    let (Some(days), Some(time)) = (&section.days, &section.time) else {
        return false;
    };

    days.iter().any(|&day| {
        schedule
            .times_for_day(day)
            .is_some_and(|times| times.iter().any(|slot| slot.overlaps(time)))
    })
}

/// Whether any of a course's selected sections conflicts with the
/// schedule.
///
/// Groups without a selection are skipped.
pub fn course_conflicts(course: &Course, schedule: &Schedule) -> bool {
    course.groups.iter().any(|group| {
        group
            .selected
            .as_ref()
            .is_some_and(|section| section_conflicts(section, schedule))
    })
}
