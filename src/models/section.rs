//! Section and section group models.
//!
//! A [`Section`] is one concrete, time-bound meeting option for part of
//! a course. A [`SectionGroup`] is a facet of a course that requires
//! exactly one section choice (e.g., lecture, lab): it holds the
//! still-available candidates and, during search, the current selection.

use serde::{Deserialize, Serialize};

use super::{TimeSlot, Weekday};

/// Registration status of a section.
///
/// Carried as catalog metadata; the engine never filters on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SectionStatus {
    #[default]
    Open,
    Closed,
    Waitlisted,
}

/// One concrete meeting option for part of a course.
///
/// Sections without `days`/`time` (directed studies, online asynchronous
/// sections) never produce conflicts and contribute only credits.
/// Sections are immutable once produced by the catalog; the engine only
/// reads or clones them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Catalog identifier.
    pub id: String,
    /// Registration (class) number.
    pub class_no: String,
    /// Academic session (e.g., a term code).
    pub session: String,
    /// Instructor names.
    pub faculty: Vec<String>,
    /// Credit hours (non-negative).
    pub credits: f64,
    /// Registration status.
    pub status: SectionStatus,
    /// Meeting location.
    pub location: String,
    /// Weekdays this section meets. `None` = no scheduled meetings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<Weekday>>,
    /// Meeting time, shared across all meeting days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<TimeSlot>,
}

impl Section {
    /// Creates a section with the given ID and credit hours.
    pub fn new(id: impl Into<String>, credits: f64) -> Self {
        Self {
            id: id.into(),
            class_no: String::new(),
            session: String::new(),
            faculty: Vec::new(),
            credits,
            status: SectionStatus::Open,
            location: String::new(),
            days: None,
            time: None,
        }
    }

    /// Sets the registration number.
    pub fn with_class_no(mut self, class_no: impl Into<String>) -> Self {
        self.class_no = class_no.into();
        self
    }

    /// Sets the academic session.
    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    /// Adds an instructor.
    pub fn with_faculty(mut self, name: impl Into<String>) -> Self {
        self.faculty.push(name.into());
        self
    }

    /// Sets the registration status.
    pub fn with_status(mut self, status: SectionStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the meeting location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the weekly meeting pattern (days plus one daily time slot).
    pub fn with_meeting(mut self, days: Vec<Weekday>, time: TimeSlot) -> Self {
        self.days = Some(days);
        self.time = Some(time);
        self
    }
}

/// A facet of a course that requires exactly one section choice.
///
/// `sections` is the group's candidate domain; it shrinks as the search
/// commits candidates on a branch. `selected` is unset until the search
/// chooses a section for this group.
///
/// A group with `required = false` models a facet that does not apply to
/// this course offering (e.g., a lab slot the catalog lists but never
/// populated): it needs no selection and contributes nothing to the
/// course's domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionGroup {
    /// Whether this group must receive a selection for the course to be
    /// placed.
    pub required: bool,
    /// Still-available candidate sections.
    pub sections: Vec<Section>,
    /// The group's current assignment, unset until chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected: Option<Section>,
}

impl SectionGroup {
    /// Creates a required group with the given candidates.
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            required: true,
            sections,
            selected: None,
        }
    }

    /// Creates a non-applicable group (no selection needed).
    pub fn not_offered() -> Self {
        Self {
            required: false,
            sections: Vec::new(),
            selected: None,
        }
    }

    /// Number of still-available candidates, zero for non-required groups.
    #[inline]
    pub fn domain_size(&self) -> usize {
        if self.required {
            self.sections.len()
        } else {
            0
        }
    }

    /// Whether this group needs no further choice.
    #[inline]
    pub fn is_satisfied(&self) -> bool {
        !self.required || self.selected.is_some()
    }
}
