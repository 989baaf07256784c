//! The schedule search engine.
//!
//! Three cooperating pieces:
//!
//! - [`conflict`]: pure time-overlap predicates between a candidate
//!   section (or course) and an in-progress schedule.
//! - [`backtrack`]: the required-course solver — recursive backtracking
//!   with minimum-remaining-values ordering and shuffled candidate
//!   order.
//! - [`augment`]: randomized growth of a course list from the optional
//!   pools toward the cart's credit target, re-validated through the
//!   solver after every draw.
//!
//! All randomness is injected via `rand::Rng`, so callers (and tests)
//! control seeding. The search is single-threaded and allocation-
//! isolated: branches and trials work on clones and never share mutable
//! state.

pub mod augment;
pub mod backtrack;
pub mod conflict;

pub use augment::grow_course_list;
pub use backtrack::solve_required;
pub use conflict::{course_conflicts, section_conflicts};
