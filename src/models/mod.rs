//! Rotation domain models.
//!
//! Provides the core data types for describing a doubles rotation and its
//! result.
//!
//! # Domain Mappings
//!
//! | court-rotation | Pickleball / Padel | Badminton | Table tennis |
//! |----------------|--------------------|-----------|--------------|
//! | Player | Player | Player | Player |
//! | Team | Doubles side | Pair | Doubles pair |
//! | Match | Court game | Court game | Table game |
//! | Round | Rotation slot | Round | Round |
//! | PairingLedger | Who-played-whom sheet | Scorecard | Scorecard |

mod ledger;
mod player;
mod schedule;
mod team;

pub use ledger::PairingLedger;
pub use player::{PairKey, Player};
pub use schedule::{Round, Schedule};
pub use team::{Match, Team};
