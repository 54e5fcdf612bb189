//! Round assembly by bounded beam search.
//!
//! Choosing the matches of a round is a set-partitioning problem: 4k players
//! split into k matches, each with three possible team splits. The search
//! keeps only the best few partial rounds per step and prunes branching with
//! partner and opponent shortlists, so per-round work stays polynomial.
//!
//! # Usage
//!
//! ```
//! use court_rotation::models::{PairingLedger, Player};
//! use court_rotation::random::SeededStream;
//! use court_rotation::scoring::{MatchScorer, ScoreWeights};
//! use court_rotation::search::{BeamConfig, BeamSearch};
//!
//! let ledger = PairingLedger::new();
//! let scorer = MatchScorer::new(&ledger, ScoreWeights::default());
//! let search = BeamSearch::new(scorer, BeamConfig::default());
//!
//! let pool: Vec<Player> = ["a", "b", "c", "d"].into_iter().map(Player::from).collect();
//! let mut stream = SeededStream::from_seed_text("demo");
//! let outcome = search.assemble(&pool, 1, &mut stream);
//! assert_eq!(outcome.matches.len(), 1);
//! ```
//!
//! # Reference
//! Lowerre (1976), "The HARPY Speech Recognition System" (beam search)

mod beam;

pub use beam::{BeamOutcome, BeamSearch, OpponentRank, LOAD_LOOKAHEAD, OPPONENT_SHORTLIST};

use serde::{Deserialize, Serialize};

/// Search breadth parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BeamConfig {
    /// Partial rounds kept between steps (at least 1).
    pub beam_width: usize,
    /// Partner shortlist size per player (at least 2 are always kept).
    pub partner_k: usize,
}

impl BeamConfig {
    /// Creates a config; the beam width is clamped to at least 1.
    pub fn new(beam_width: usize, partner_k: usize) -> Self {
        Self {
            beam_width: beam_width.max(1),
            partner_k,
        }
    }
}

impl Default for BeamConfig {
    fn default() -> Self {
        Self {
            beam_width: 80,
            partner_k: 10,
        }
    }
}
