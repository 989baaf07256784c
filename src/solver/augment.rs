//! Randomized course-pool augmentation.
//!
//! Grows a validated course list toward the cart's credit target by
//! sampling from the optional pools: the free-choice list and the
//! mutually-exclusive groups. Bounded random retries at the orchestrator
//! level stand in for an objective-driven optimizer; one call here is a
//! single trial.
//!
//! # Algorithm
//!
//! Recursion stops once the credit total reaches the midpoint of
//! `[min, max]`, or both pools are drained. Otherwise one pool is picked
//! (a fair coin when both are non-empty) and one course drawn uniformly
//! from it; drawing from a mutually-exclusive group discards the group's
//! other members for the rest of the trial. The extended list is
//! re-validated through the required-course solver before recursing, so
//! every accepted draw still admits a conflict-free schedule.
//!
//! Any failure fails the whole trial; there is no partial-success
//! fallback within one trial. The pools in the caller's cart are never
//! touched: each trial drains its own copies.

use rand::Rng;

use crate::error::ScheduleError;
use crate::models::{Cart, Course, CreditRange, Schedule};
use crate::solver::backtrack::solve_required;

/// Extends `base` with randomly drawn optional courses until the credit
/// target is reached.
///
/// `credit_total` is the estimated credit sum of `base`. Returns the
/// grown course list, or [`ScheduleError::NoValidAugmentation`] if this
/// trial cannot reach a valid stop.
///
/// The credit minimum is a hard floor: a trial that drains both pools
/// while still under `min` fails rather than returning an
/// under-credited list.
pub fn grow_course_list<R: Rng>(
    base: &[Course],
    credit_total: f64,
    cart: &Cart,
    rng: &mut R,
) -> Result<Vec<Course>, ScheduleError> {
    let mut courses = base.to_vec();
    let mut choose_any = cart.choose_any.clone();
    let mut choose_one = cart.choose_one.clone();

    grow(
        &mut courses,
        credit_total,
        &mut choose_any,
        &mut choose_one,
        &cart.credit_reqs,
        rng,
    )?;
    Ok(courses)
}

fn grow<R: Rng>(
    courses: &mut Vec<Course>,
    credit_total: f64,
    choose_any: &mut Vec<Course>,
    choose_one: &mut Vec<Vec<Course>>,
    range: &CreditRange,
    rng: &mut R,
) -> Result<(), ScheduleError> {
    let drained = choose_any.is_empty() && choose_one.is_empty();
    if credit_total >= range.midpoint() || drained {
        // The midpoint is never below `min`, so only a drained-pool stop
        // can leave the list under-credited
        if credit_total < range.min {
            return Err(ScheduleError::NoValidAugmentation);
        }
        return Ok(());
    }

    let from_any = if choose_one.is_empty() {
        true
    } else if choose_any.is_empty() {
        false
    } else {
        rng.random_bool(0.5)
    };

    let course = if from_any {
        choose_any.remove(rng.random_range(0..choose_any.len()))
    } else {
        let mut group = choose_one.remove(rng.random_range(0..choose_one.len()));
        // One member survives; the rest of the group is out for this trial
        group.swap_remove(rng.random_range(0..group.len()))
    };

    let added = course.credit_estimate();
    courses.push(course);

    solve_required(&Schedule::new(), courses, rng)
        .map_err(|_| ScheduleError::NoValidAugmentation)?;

    grow(
        courses,
        credit_total + added,
        choose_any,
        choose_one,
        range,
        rng,
    )
}
