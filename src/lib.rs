//! Seeded doubles rotation scheduling.
//!
//! Assigns players to repeated rounds of two-versus-two matches across
//! several courts, keeping repeated teammates and opponents rare and spreading
//! court and bench time evenly. A seed text makes every run reproducible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Player`, `PairKey`, `Team`, `Match`,
//!   `Round`, `Schedule`, `PairingLedger`
//! - **`random`**: Seed hashing and the platform-independent random stream
//! - **`scoring`**: Repeat and load scoring of teams and matches
//! - **`bench`**: Queue-based bench rotation
//! - **`search`**: Beam search assembling the matches of one round
//! - **`scheduler`**: Round-by-round orchestration and fairness metrics
//! - **`validation`**: Roster normalization and input checks
//! - **`config`**: Engine options and replayable run configuration
//! - **`format`**: Player-list parsing and plain-text export
//!
//! # Example
//!
//! ```
//! use court_rotation::{build_schedule, ScheduleOptions};
//!
//! let players = ["Ann", "Bob", "Cy", "Dee", "Eve", "Fay", "Gus", "Hal"];
//! let schedule = build_schedule(&players, 2, 3, "tuesday", &ScheduleOptions::default()).unwrap();
//!
//! assert_eq!(schedule.rounds.len(), 3);
//! assert!(schedule.rounds.iter().all(|r| r.matches.len() == 2));
//! ```
//!
//! # References
//!
//! - Lowerre (1976), "The HARPY Speech Recognition System" (beam search)
//! - Knuth (1997), "The Art of Computer Programming", Vol. 2, §3.4.2 (shuffling)

pub mod bench;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod random;
pub mod scheduler;
pub mod scoring;
pub mod search;
pub mod validation;

pub use config::{ScheduleConfig, ScheduleOptions};
pub use error::ScheduleError;
pub use models::{Match, PairKey, PairingLedger, Player, Round, Schedule, Team};
pub use scheduler::{build_schedule, FairnessReport, RotationScheduler};
