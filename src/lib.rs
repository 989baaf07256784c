//! Course schedule generation engine.
//!
//! Given a student's cart — required courses, a free-choice pool,
//! mutually-exclusive alternatives, and a target credit range — produces
//! a deduplicated list of non-conflicting weekly schedules, or a typed
//! failure explaining why none exists.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `Section`, `SectionGroup`,
//!   `Course`, `Cart`, `Schedule`
//! - **`solver`**: The search engine — conflict predicates, the
//!   required-course backtracking solver, randomized pool augmentation
//! - **`generator`**: Orchestration — cart-to-schedules with bounded
//!   randomized trials and structural dedup
//! - **`validation`**: Cart pre-flight checks
//! - **`error`**: The failure taxonomy
//!
//! # Architecture
//!
//! The engine is a pure, single-threaded library: it consumes an
//! in-memory catalog snapshot (the cart's courses carry their candidate
//! sections) and performs no I/O. Catalog acquisition, persistence, and
//! presentation belong to the surrounding application. Randomness is the
//! only non-determinism and is injected via `rand::Rng`, so runs are
//! reproducible under a seeded generator.

pub mod error;
pub mod generator;
pub mod models;
pub mod solver;
pub mod validation;
