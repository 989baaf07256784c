//! Schedule generation orchestrator.
//!
//! Ties the engine together: validate the cart, prove the required
//! courses fit on their own, then run bounded randomized trials that
//! grow the required baseline from the optional pools, re-solve, and
//! collect structurally unique schedules.
//!
//! # Design
//!
//! Bounded random retries stand in for an objective-driven optimizer:
//! credit-target proximity comes from the augmenter's stop rule, and
//! variety comes from re-running the randomized search and
//! deduplicating. The trial and result caps are explicit configuration
//! ([`GeneratorConfig`]), which also makes them the engine's
//! termination guarantee.

use log::debug;
use rand::Rng;

use crate::error::ScheduleError;
use crate::models::{Cart, Schedule};
use crate::solver::{grow_course_list, solve_required};
use crate::validation::validate_cart;

/// Caps on the randomized search.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Maximum augmentation trials per run.
    pub max_trials: usize,
    /// Stop collecting once this many unique schedules exist.
    pub max_schedules: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_trials: 100,
            max_schedules: 20,
        }
    }
}

impl GeneratorConfig {
    /// Sets the trial cap.
    pub fn with_max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Sets the unique-schedule cap.
    pub fn with_max_schedules(mut self, max_schedules: usize) -> Self {
        self.max_schedules = max_schedules;
        self
    }
}

/// Generates non-conflicting weekly schedules from a cart.
///
/// # Example
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use timetabler::generator::ScheduleGenerator;
/// use timetabler::models::{Cart, Course, CreditRange, Section, SectionGroup, TimeSlot, Weekday};
///
/// let cart = Cart::new(CreditRange::new(0.0, 18.0)).with_required(
///     Course::new("ARTS-2200", "Etching").with_group(SectionGroup::new(vec![
///         Section::new("ARTS-2200-01", 4.0).with_meeting(
///             vec![Weekday::Tuesday, Weekday::Friday],
///             TimeSlot::new(1300, 1550),
///         ),
///     ])),
/// );
///
/// let mut rng = SmallRng::seed_from_u64(42);
/// let schedules = ScheduleGenerator::new().generate(&cart, &mut rng).unwrap();
/// assert_eq!(schedules.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScheduleGenerator {
    config: GeneratorConfig,
}

impl ScheduleGenerator {
    /// Creates a generator with the default caps (100 trials, 20
    /// schedules).
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the search caps.
    pub fn with_config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    /// Generates up to `max_schedules` unique schedules for the cart.
    ///
    /// # Flow
    /// 1. Pre-flight: [`validate_cart`] rejects empty carts and
    ///    over-ceiling required lists.
    /// 2. Baseline: the required courses must fit on their own;
    ///    [`ScheduleError::RequiredConflict`] propagates unchanged.
    /// 3. Trials: up to `max_trials` rounds of augment → re-solve →
    ///    dedup. Per-trial failures are swallowed; only the caps end
    ///    the loop.
    ///
    /// The returned list may hold fewer schedules than the cap — a
    /// single entry when the cart has no optional pools.
    pub fn generate<R: Rng>(
        &self,
        cart: &Cart,
        rng: &mut R,
    ) -> Result<Vec<Schedule>, ScheduleError> {
        validate_cart(cart)?;

        let required_credits = cart.required_credit_estimate();
        solve_required(&Schedule::new(), &cart.required, rng)?;

        let mut schedules: Vec<Schedule> = Vec::new();
        for trial in 0..self.config.max_trials {
            if schedules.len() >= self.config.max_schedules {
                break;
            }

            let courses = match grow_course_list(&cart.required, required_credits, cart, rng) {
                Ok(courses) => courses,
                Err(err) => {
                    debug!("trial {trial}: augmentation failed: {err}");
                    continue;
                }
            };
            let Ok(schedule) = solve_required(&Schedule::new(), &courses, rng) else {
                debug!("trial {trial}: grown list no longer fits");
                continue;
            };

            if schedules.iter().any(|s| s.identical_to(&schedule)) {
                debug!("trial {trial}: duplicate schedule dropped");
            } else {
                schedules.push(schedule);
            }
        }

        Ok(schedules)
    }
}
