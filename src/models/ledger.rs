//! Pairing history ledger.
//!
//! Counts how often players have been teamed, faced each other, played, and
//! sat out. One ledger belongs to one schedule run; it is updated only after
//! a round's matches are final, so every score computed during a round's
//! search sees the same history.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Match, PairKey, Player};

/// Mutable pairing and load counters for one schedule run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PairingLedger {
    /// Times two players have been teammates.
    #[serde(with = "pair_counts")]
    pub teammate_count: HashMap<PairKey, u32>,
    /// Times two players have been opponents.
    #[serde(with = "pair_counts")]
    pub opponent_count: HashMap<PairKey, u32>,
    /// Rounds played per player.
    pub plays_count: HashMap<Player, u32>,
    /// Rounds benched per player.
    pub bench_count: HashMap<Player, u32>,
    /// Most recent round index (0-based) each player sat out.
    pub last_benched_round: HashMap<Player, usize>,
}

impl PairingLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Times `a` and `b` have been teammates.
    #[inline]
    pub fn teammates(&self, a: &Player, b: &Player) -> u32 {
        self.teammate_count
            .get(&PairKey::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Times `a` and `b` have been opponents.
    #[inline]
    pub fn opponents(&self, a: &Player, b: &Player) -> u32 {
        self.opponent_count
            .get(&PairKey::new(a, b))
            .copied()
            .unwrap_or(0)
    }

    /// Rounds played by `player`.
    #[inline]
    pub fn plays(&self, player: &Player) -> u32 {
        self.plays_count.get(player).copied().unwrap_or(0)
    }

    /// Rounds benched for `player`.
    #[inline]
    pub fn benches(&self, player: &Player) -> u32 {
        self.bench_count.get(player).copied().unwrap_or(0)
    }

    /// Adds `amount` to the teammate counter of a pair.
    pub fn add_teammates(&mut self, key: PairKey, amount: u32) {
        *self.teammate_count.entry(key).or_insert(0) += amount;
    }

    /// Adds `amount` to the opponent counter of a pair.
    pub fn add_opponents(&mut self, key: PairKey, amount: u32) {
        *self.opponent_count.entry(key).or_insert(0) += amount;
    }

    /// Adds `amount` to a player's play counter.
    pub fn add_plays(&mut self, player: &Player, amount: u32) {
        *self.plays_count.entry(player.clone()).or_insert(0) += amount;
    }

    /// Adds `amount` to a player's bench counter.
    pub fn add_benches(&mut self, player: &Player, amount: u32) {
        *self.bench_count.entry(player.clone()).or_insert(0) += amount;
    }

    /// Records a finished match: both teammate pairs, the four opponent
    /// pairs, and one play for each participant.
    pub fn record_match(&mut self, m: &Match) {
        for team in m.teams() {
            self.add_teammates(team.pair_key(), 1);
        }
        for key in m.opponent_pairs() {
            self.add_opponents(key, 1);
        }
        for player in m.players() {
            self.add_plays(player, 1);
        }
    }

    /// Records that `player` sat out round `round`.
    pub fn record_bench(&mut self, player: &Player, round: usize) {
        self.add_benches(player, 1);
        self.last_benched_round.insert(player.clone(), round);
    }
}

/// Serializes pair-keyed maps as a list of `{pair, count}` entries sorted by
/// key, since JSON objects only take string keys.
mod pair_counts {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    use crate::models::PairKey;

    #[derive(Serialize, Deserialize)]
    struct Entry {
        pair: PairKey,
        count: u32,
    }

    pub fn serialize<S: Serializer>(
        map: &HashMap<PairKey, u32>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        let mut entries: Vec<Entry> = map
            .iter()
            .map(|(pair, &count)| Entry {
                pair: pair.clone(),
                count,
            })
            .collect();
        entries.sort_by(|a, b| a.pair.cmp(&b.pair));
        serializer.collect_seq(entries)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<HashMap<PairKey, u32>, D::Error> {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| (e.pair, e.count)).collect())
    }
}
