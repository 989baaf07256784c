//! Course scheduling domain models.
//!
//! Provides the core data types for representing a student's request
//! and the generated schedules: meeting times, sections, section groups,
//! courses, the request cart, and the accumulating schedule result.

mod cart;
mod course;
mod schedule;
mod section;
mod time;

pub use cart::{Cart, CreditRange};
pub use course::Course;
pub use schedule::{DayTimes, Schedule};
pub use section::{Section, SectionGroup, SectionStatus};
pub use time::{TimeSlot, Weekday};
