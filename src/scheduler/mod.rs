//! Rotation scheduler and fairness metrics.
//!
//! # Algorithm
//!
//! `RotationScheduler` drives the rounds of one run in order: queue-based
//! bench rotation, beam-search match assembly, then a ledger update. It is a
//! heuristic bounded by the beam width and does not guarantee the globally
//! minimal number of repeated pairings.
//!
//! # Fairness
//!
//! `FairnessReport` summarizes play/bench spreads and the most repeated
//! teammate and opponent pairs of a finished schedule.

mod report;
mod rotation;

pub use report::{FairnessReport, DEFAULT_TOP_PAIRS};
pub use rotation::{build_schedule, RotationScheduler};
