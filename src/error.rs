//! Error taxonomy for schedule generation.
//!
//! Every failure is an expected, recoverable-by-caller condition; the
//! engine signals through return values, never panics. The `Display`
//! texts are the sentences the registration front end shows verbatim,
//! kept as a display-layer concern — callers branch on the variant, not
//! the string.

use thiserror::Error;

/// Why schedule generation (or one of its phases) failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleError {
    /// The cart names no courses at all.
    #[error("No courses given.")]
    EmptyCart,

    /// The required courses alone exceed the cart's credit ceiling.
    #[error("Your required classes exceed your max credit limit.")]
    CreditLimitExceeded,

    /// No assignment of required courses avoids a time overlap.
    #[error("Your required classes do not fit.")]
    RequiredConflict,

    /// One augmentation trial could not extend the course list.
    ///
    /// Internal to a single trial: the orchestrator swallows it and
    /// retries, so it never aborts a run on its own.
    #[error("No valid schedule found.")]
    NoValidAugmentation,
}
