//! Schedule (solution) model.
//!
//! A schedule is the ordered list of rounds produced by one run, together
//! with a snapshot of the pairing ledger for diagnostics. It is built once
//! and not modified after it is returned.

use serde::{Deserialize, Serialize};

use super::{Match, PairingLedger, Player};

/// One round: the matches played and the players sitting out.
///
/// Every roster player appears in exactly one match or on the bench.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Matches in court order.
    pub matches: Vec<Match>,
    /// Players sitting out, in selection order.
    pub benched: Vec<Player>,
    /// Whether the bench rotation had to bench someone two rounds in a row.
    #[serde(default)]
    pub bench_forced: bool,
}

impl Round {
    /// Creates a round.
    pub fn new(matches: Vec<Match>, benched: Vec<Player>) -> Self {
        Self {
            matches,
            benched,
            bench_forced: false,
        }
    }

    /// Marks whether back-to-back benching was forced.
    pub fn with_bench_forced(mut self, forced: bool) -> Self {
        self.bench_forced = forced;
        self
    }

    /// Number of matches played.
    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// All players on court this round.
    pub fn active_players(&self) -> impl Iterator<Item = &Player> {
        self.matches.iter().flat_map(|m| m.players())
    }

    /// Whether `player` sat out this round.
    pub fn is_benched(&self, player: &Player) -> bool {
        self.benched.contains(player)
    }

    /// The match `player` took part in, if any.
    pub fn match_for(&self, player: &Player) -> Option<&Match> {
        self.matches.iter().find(|m| m.contains(player))
    }
}

/// A complete rotation schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schedule {
    /// The roster in the order it was scheduled (normalized, then shuffled).
    pub players: Vec<Player>,
    /// Courts requested by the caller.
    pub num_courts: usize,
    /// Rounds in play order.
    pub rounds: Vec<Round>,
    /// Final ledger state.
    pub diagnostics: PairingLedger,
}

impl Schedule {
    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total matches across all rounds.
    pub fn match_count(&self) -> usize {
        self.rounds.iter().map(Round::match_count).sum()
    }

    /// Matches that can run per round given the roster and courts.
    pub fn matches_per_round(&self) -> usize {
        self.num_courts.min(self.players.len() / 4)
    }

    /// Whether the caller asked for more courts than the roster can fill.
    pub fn courts_capped(&self) -> bool {
        self.matches_per_round() < self.num_courts
    }

    /// Rounds in which `player` sat out (0-based indices).
    pub fn bench_rounds(&self, player: &Player) -> Vec<usize> {
        self.rounds
            .iter()
            .enumerate()
            .filter(|(_, r)| r.is_benched(player))
            .map(|(i, _)| i)
            .collect()
    }
}
