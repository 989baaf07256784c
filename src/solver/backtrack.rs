//! Required-course backtracking solver.
//!
//! Assigns exactly one section to every required section group of every
//! course in a working list, subject to the time-conflict predicate.
//!
//! # Algorithm
//!
//! 1. Pick the course with the smallest remaining domain (minimum
//!    remaining values; first occurrence wins ties).
//! 2. For each of its required groups, shuffle the group's candidates
//!    and try each in turn: a non-conflicting candidate becomes the
//!    group's selection and leaves the branch's domain.
//! 3. Once every required group holds a selection, commit the course to
//!    the schedule and recurse on the remaining courses.
//! 4. The first solved schedule propagates up immediately; exhausting
//!    every candidate fails the call.
//!
//! Candidate shuffling avoids systematic bias toward catalog order, so
//! repeated calls sample different valid assignments.
//!
//! # State Isolation
//!
//! Every branch works on its own clone of the chosen course and the
//! in-progress schedule; abandoned branches are dropped, never rolled
//! back. Sibling branches therefore never observe each other's domain
//! removals, and the caller's inputs are never mutated.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern
//! Approach", Ch. 6: Constraint Satisfaction Problems

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::ScheduleError;
use crate::models::{Course, Schedule};
use crate::solver::conflict::section_conflicts;

/// Solves the assignment of every course in `remaining` onto
/// `schedule`.
///
/// Returns the first consistent completion found, or
/// [`ScheduleError::RequiredConflict`] when no assignment of the
/// remaining courses avoids a time overlap.
pub fn solve_required<R: Rng>(
    schedule: &Schedule,
    remaining: &[Course],
    rng: &mut R,
) -> Result<Schedule, ScheduleError> {
    if remaining.is_empty() {
        return Ok(schedule.clone());
    }

    // Most constrained course first; first occurrence wins ties
    let mut pick = 0;
    for (i, course) in remaining.iter().enumerate().skip(1) {
        if course.domain_size() < remaining[pick].domain_size() {
            pick = i;
        }
    }

    let mut course = remaining[pick].clone();
    let rest: Vec<Course> = remaining
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != pick)
        .map(|(_, c)| c.clone())
        .collect();

    for gi in 0..course.groups.len() {
        if !course.groups[gi].required {
            continue;
        }

        let mut candidates = std::mem::take(&mut course.groups[gi].sections);
        candidates.shuffle(rng);

        let mut ci = 0;
        while ci < candidates.len() {
            if section_conflicts(&candidates[ci], schedule) {
                ci += 1;
                continue;
            }

            // Select the candidate and shrink this branch's domain
            let section = candidates.remove(ci);
            course.groups[gi].selected = Some(section);

            if course.is_placed() {
                let mut extended = schedule.clone();
                extended.add_course(&course);
                if let Ok(solved) = solve_required(&extended, &rest, rng) {
                    return Ok(solved);
                }
            }
            // Not placeable yet, or the recursion failed: keep scanning;
            // a later fit overwrites the selection
        }

        course.groups[gi].sections = candidates;
    }

    Err(ScheduleError::RequiredConflict)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Section, SectionGroup, TimeSlot, Weekday};
    use crate::solver::conflict::course_conflicts;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn course_one_section(
        id: &str,
        title: &str,
        days: Vec<Weekday>,
        start: u16,
        end: u16,
    ) -> Course {
        Course::new(id, title).with_group(SectionGroup::new(vec![Section::new(
            format!("{id}-01"),
            4.0,
        )
        .with_meeting(days, TimeSlot::new(start, end))]))
    }

    #[test]
    fn test_empty_input_returns_schedule() {
        let mut rng = SmallRng::seed_from_u64(42);
        let solved = solve_required(&Schedule::new(), &[], &mut rng).unwrap();
        assert!(solved.courses.is_empty());
        assert_eq!(solved.credit_total, 0.0);
    }

    #[test]
    fn test_single_course_is_placed() {
        let mut rng = SmallRng::seed_from_u64(42);
        let course = course_one_section("A", "Etching", vec![Weekday::Tuesday], 1300, 1550);

        let solved = solve_required(&Schedule::new(), &[course], &mut rng).unwrap();
        assert_eq!(solved.courses.len(), 1);
        assert_eq!(solved.credit_total, 4.0);
        assert!(solved.courses[0].is_placed());
    }

    #[test]
    fn test_conflicting_pair_fails() {
        let mut rng = SmallRng::seed_from_u64(42);
        let a = course_one_section("A", "Semantics", vec![Weekday::Monday], 900, 1015);
        let b = course_one_section("B", "Cinema", vec![Weekday::Monday], 930, 1045);

        let result = solve_required(&Schedule::new(), &[a, b], &mut rng);
        assert_eq!(result.unwrap_err(), ScheduleError::RequiredConflict);
    }

    #[test]
    fn test_backtracks_to_viable_alternative() {
        // A has two sections; only the afternoon one coexists with B.
        let a = Course::new("A", "Painting").with_group(SectionGroup::new(vec![
            Section::new("A-01", 4.0)
                .with_meeting(vec![Weekday::Monday], TimeSlot::new(900, 1015)),
            Section::new("A-02", 4.0)
                .with_meeting(vec![Weekday::Monday], TimeSlot::new(1400, 1515)),
        ]));
        let b = course_one_section("B", "Drawing", vec![Weekday::Monday], 900, 1015);

        // Whatever order the shuffle visits, only one completion exists
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let solved = solve_required(&Schedule::new(), &[a.clone(), b.clone()], &mut rng)
                .expect("a valid assignment exists");
            let placed_a = solved.courses.iter().find(|c| c.id == "A").unwrap();
            assert_eq!(placed_a.groups[0].selected.as_ref().unwrap().id, "A-02");
        }
    }

    #[test]
    fn test_multi_group_course_fills_every_group() {
        let lecture = SectionGroup::new(vec![
            Section::new("L-01", 4.0)
                .with_meeting(vec![Weekday::Monday], TimeSlot::new(900, 1015)),
            Section::new("L-02", 4.0)
                .with_meeting(vec![Weekday::Tuesday], TimeSlot::new(900, 1015)),
        ]);
        let lab = SectionGroup::new(vec![
            Section::new("B-01", 0.0)
                .with_meeting(vec![Weekday::Wednesday], TimeSlot::new(1400, 1650)),
            Section::new("B-02", 0.0)
                .with_meeting(vec![Weekday::Thursday], TimeSlot::new(1400, 1650)),
        ]);
        let course = Course::new("CHEM", "Chemistry")
            .with_group(lecture)
            .with_group(lab);

        let mut rng = SmallRng::seed_from_u64(7);
        let solved = solve_required(&Schedule::new(), &[course], &mut rng).unwrap();
        let placed = &solved.courses[0];
        assert!(placed.groups[0].selected.is_some());
        assert!(placed.groups[1].selected.is_some());
        assert_eq!(solved.credit_total, 4.0);
        assert_eq!(solved.week_times.len(), 2);
    }

    #[test]
    fn test_not_offered_group_never_blocks() {
        let course = Course::new("A", "Fieldwork")
            .with_group(SectionGroup::new(vec![Section::new("A-01", 3.0)
                .with_meeting(vec![Weekday::Friday], TimeSlot::new(900, 1150))]))
            .with_group(SectionGroup::not_offered());

        let mut rng = SmallRng::seed_from_u64(42);
        let solved = solve_required(&Schedule::new(), &[course], &mut rng).unwrap();
        assert_eq!(solved.courses.len(), 1);
        assert!(solved.courses[0].groups[1].selected.is_none());
    }

    #[test]
    fn test_empty_required_group_fails() {
        // A required group with no candidates can never be satisfied
        let course = Course::new("A", "Ghost").with_group(SectionGroup::new(Vec::new()));
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(
            solve_required(&Schedule::new(), &[course], &mut rng).unwrap_err(),
            ScheduleError::RequiredConflict
        );
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        // Branch state lives in clones: the caller's course list keeps
        // its full domains and stays selection-free even after a failure
        let a = course_one_section("A", "Semantics", vec![Weekday::Monday], 900, 1015);
        let b = course_one_section("B", "Cinema", vec![Weekday::Monday], 930, 1045);
        let courses = vec![a, b];

        let mut rng = SmallRng::seed_from_u64(42);
        let _ = solve_required(&Schedule::new(), &courses, &mut rng);

        for course in &courses {
            assert_eq!(course.domain_size(), 1);
            assert!(course.groups.iter().all(|g| g.selected.is_none()));
        }
    }

    #[test]
    fn test_solved_schedule_has_no_overlaps() {
        let courses = vec![
            course_one_section("A", "A", vec![Weekday::Monday, Weekday::Wednesday], 900, 1015),
            course_one_section("B", "B", vec![Weekday::Monday, Weekday::Wednesday], 1030, 1145),
            course_one_section("C", "C", vec![Weekday::Tuesday], 900, 1015),
        ];
        let mut rng = SmallRng::seed_from_u64(42);
        let solved = solve_required(&Schedule::new(), &courses, &mut rng).unwrap();

        for day_times in &solved.week_times {
            for (i, a) in day_times.times.iter().enumerate() {
                for b in &day_times.times[i + 1..] {
                    assert!(!a.overlaps(b), "overlap on {:?}", day_times.day);
                }
            }
        }
        // And the committed courses pass the course-level predicate
        // against an empty schedule extended one course at a time
        let mut rebuilt = Schedule::new();
        for course in &solved.courses {
            assert!(!course_conflicts(course, &rebuilt));
            rebuilt.add_course(course);
        }
    }
}
