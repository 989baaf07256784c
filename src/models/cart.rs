//! Cart (request) model.
//!
//! A cart is the student's scheduling request: courses that must appear,
//! optional pools to draw from, and the target credit range.
//!
//! # Wire Format
//! Carts arrive from the registration front end as JSON with camelCase
//! keys (`required`, `chooseAny`, `chooseOne`, `creditReqs`); the serde
//! derives preserve that contract.

use serde::{Deserialize, Serialize};

use super::Course;

/// Target credit range for a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditRange {
    /// Minimum credit hours.
    pub min: f64,
    /// Maximum credit hours.
    pub max: f64,
}

impl CreditRange {
    /// Creates a credit range. Expects `min <= max`.
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Midpoint of the range, the stop target for randomized
    /// augmentation.
    #[inline]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A student's course request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    /// Courses that must appear on every schedule.
    pub required: Vec<Course>,
    /// Free-choice pool; any subset may be added.
    pub choose_any: Vec<Course>,
    /// Mutually-exclusive groups; at most one member of each may be
    /// added.
    pub choose_one: Vec<Vec<Course>>,
    /// Target credit range.
    pub credit_reqs: CreditRange,
}

impl Cart {
    /// Creates an empty cart with the given credit range.
    pub fn new(credit_reqs: CreditRange) -> Self {
        Self {
            required: Vec::new(),
            choose_any: Vec::new(),
            choose_one: Vec::new(),
            credit_reqs,
        }
    }

    /// Adds a required course.
    pub fn with_required(mut self, course: Course) -> Self {
        self.required.push(course);
        self
    }

    /// Adds a course to the free-choice pool.
    pub fn with_choose_any(mut self, course: Course) -> Self {
        self.choose_any.push(course);
        self
    }

    /// Adds a mutually-exclusive group.
    pub fn with_choose_one(mut self, group: Vec<Course>) -> Self {
        self.choose_one.push(group);
        self
    }

    /// Whether the cart names no courses at all.
    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.choose_any.is_empty() && self.choose_one.is_empty()
    }

    /// Estimated credit hours of the required courses alone.
    pub fn required_credit_estimate(&self) -> f64 {
        self.required.iter().map(Course::credit_estimate).sum()
    }
}
