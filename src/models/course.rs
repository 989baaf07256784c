//! Course model.
//!
//! A course is identity/metadata plus an ordered list of section groups,
//! every required one of which must receive a selection for the course
//! to be placed on a schedule. The first group conventionally holds the
//! primary meeting (lecture); later groups hold secondary facets
//! (recitation, lab).

use serde::{Deserialize, Serialize};

use super::SectionGroup;

/// A course and its section groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Catalog identifier.
    pub id: String,
    /// Course title, the display identity used when comparing schedules.
    pub title: String,
    /// Owning department.
    pub dept: String,
    /// Catalog description.
    pub description: String,
    /// Catalog attributes (distribution areas, level markers).
    pub attributes: Vec<String>,
    /// Section groups in fixed order; the first is the primary meeting.
    pub groups: Vec<SectionGroup>,
}

impl Course {
    /// Creates a course with the given ID and title.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            dept: String::new(),
            description: String::new(),
            attributes: Vec::new(),
            groups: Vec::new(),
        }
    }

    /// Sets the department.
    pub fn with_dept(mut self, dept: impl Into<String>) -> Self {
        self.dept = dept.into();
        self
    }

    /// Sets the catalog description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Adds a catalog attribute.
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Adds a section group.
    pub fn with_group(mut self, group: SectionGroup) -> Self {
        self.groups.push(group);
        self
    }

    /// Total number of still-available candidate sections across all
    /// required groups.
    ///
    /// This is the course's domain in the constraint-search sense: the
    /// search assigns the most constrained course (smallest domain)
    /// first. Zero means the course cannot be scheduled.
    pub fn domain_size(&self) -> usize {
        self.groups.iter().map(SectionGroup::domain_size).sum()
    }

    /// Estimated credit hours, summing the first candidate section's
    /// credits per required group.
    ///
    /// A proxy used before any selection exists; groups with an empty
    /// domain contribute nothing.
    pub fn credit_estimate(&self) -> f64 {
        self.groups
            .iter()
            .filter(|g| g.required)
            .filter_map(|g| g.sections.first())
            .map(|s| s.credits)
            .sum()
    }

    /// Whether every required group holds a selection.
    pub fn is_placed(&self) -> bool {
        self.groups.iter().all(SectionGroup::is_satisfied)
    }
}
