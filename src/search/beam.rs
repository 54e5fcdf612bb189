//! Beam search over the matches of one round.
//!
//! # Algorithm
//!
//! 1. Deduplicate the pool and keep the first `4 × target` players.
//! 2. Rank every player's potential partners by team score
//!    (shuffle, then stable sort) and keep the top `max(2, partner_k)`.
//! 3. Repeat `target` times: for every beam state pick a pivot (most plays,
//!    ties by shuffle order), try each shortlisted partner, rank opponents by
//!    [`OpponentRank`], and expand every opponent pair of the top 12 into a
//!    candidate state scored by its best split plus a small load term.
//! 4. Keep the `beam_width` lowest-scoring candidates (stable sort).
//! 5. Return the final state with the most matches, then the lowest score.
//!
//! Every tie is broken by a prior shuffle from the run's stream, never by
//! insertion or alphabetical order, so results vary with the seed but are
//! reproducible for a fixed one.
//!
//! # Complexity
//! Per step O(W · K · C(12, 2)) candidate expansions, where W is the beam
//! width and K the partner shortlist size.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::trace;

use super::BeamConfig;
use crate::models::{Match, Player};
use crate::random::SeededStream;
use crate::scoring::MatchScorer;

/// Maximum opponents considered per pivot/partner pair.
pub const OPPONENT_SHORTLIST: usize = 12;

/// Weight of the in-search load term added per match.
pub const LOAD_LOOKAHEAD: f64 = 0.05;

/// Ranking key for opponent candidates, compared field by field.
///
/// 1. `repeat_sum` ascending: times already faced the pivot plus the partner.
/// 2. `plays` ascending: rounds the candidate has played.
///
/// Remaining ties keep the shuffled order (the sort is stable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OpponentRank {
    /// Opponent repeats against the pivot and the partner.
    pub repeat_sum: u32,
    /// Rounds played.
    pub plays: u32,
}

/// Result of assembling one round.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BeamOutcome {
    /// Matches found, in assembly order. May be fewer than requested.
    pub matches: Vec<Match>,
    /// Pool players beyond `4 × target` that were never considered.
    pub overflow: Vec<Player>,
    /// Accumulated score of the chosen state.
    pub score: f64,
}

#[derive(Debug, Clone)]
struct BeamState {
    score: f64,
    matches: Vec<Match>,
    remaining: Vec<Player>,
}

/// Round assembler over a fixed ledger snapshot.
#[derive(Debug, Clone, Copy)]
pub struct BeamSearch<'a> {
    scorer: MatchScorer<'a>,
    config: BeamConfig,
}

impl<'a> BeamSearch<'a> {
    /// Creates a search.
    pub fn new(scorer: MatchScorer<'a>, config: BeamConfig) -> Self {
        Self { scorer, config }
    }

    /// Finds up to `target` disjoint matches among `pool`.
    ///
    /// Returns an empty outcome when `target` is zero or the pool has fewer
    /// than four players.
    pub fn assemble(
        &self,
        pool: &[Player],
        target: usize,
        stream: &mut SeededStream,
    ) -> BeamOutcome {
        if target == 0 || pool.len() < 4 {
            return BeamOutcome {
                overflow: pool.to_vec(),
                ..BeamOutcome::default()
            };
        }

        let mut seen = HashSet::new();
        let mut unique: Vec<Player> = pool
            .iter()
            .filter(|p| seen.insert((*p).clone()))
            .cloned()
            .collect();
        let overflow = if unique.len() > 4 * target {
            unique.split_off(4 * target)
        } else {
            Vec::new()
        };

        let shortlists = self.partner_shortlists(&unique, stream);

        let mut beam = vec![BeamState {
            score: 0.0,
            matches: Vec::new(),
            remaining: unique,
        }];

        for step in 0..target {
            let mut candidates = Vec::new();
            for state in &beam {
                self.expand(state, &shortlists, stream, &mut candidates);
            }

            if candidates.is_empty() {
                trace!("beam step {step}: no candidates, stopping early");
                break;
            }
            let generated = candidates.len();
            candidates.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
            candidates.truncate(self.config.beam_width.max(1));
            trace!(
                "beam step {step}: {generated} candidates, kept {}, best score {:.3}",
                candidates.len(),
                candidates[0].score
            );
            beam = candidates;
        }

        let best = beam.into_iter().reduce(|best, state| {
            let more = state.matches.len() > best.matches.len();
            let cheaper = state.matches.len() == best.matches.len() && state.score < best.score;
            if more || cheaper {
                state
            } else {
                best
            }
        });

        match best {
            Some(state) => BeamOutcome {
                matches: state.matches,
                overflow,
                score: state.score,
            },
            None => BeamOutcome {
                overflow,
                ..BeamOutcome::default()
            },
        }
    }

    /// Ranks each player's partners by team score, keeping ties in shuffle
    /// order.
    fn partner_shortlists(
        &self,
        pool: &[Player],
        stream: &mut SeededStream,
    ) -> HashMap<Player, Vec<Player>> {
        let mut shortlists = HashMap::with_capacity(pool.len());
        for player in pool {
            let others: Vec<Player> = pool.iter().filter(|q| *q != player).cloned().collect();
            let mut ranked: Vec<(f64, Player)> = stream
                .shuffled(&others)
                .into_iter()
                .map(|q| (self.scorer.team_score(player, &q), q))
                .collect();
            ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

            let keep = self.config.partner_k.min(ranked.len()).max(2);
            ranked.truncate(keep);
            shortlists.insert(player.clone(), ranked.into_iter().map(|(_, q)| q).collect());
        }
        shortlists
    }

    /// Most-played remaining player; ties go to the earliest in shuffle order.
    fn pick_pivot(&self, remaining: &[Player], stream: &mut SeededStream) -> Option<Player> {
        let ledger = self.scorer.ledger();
        let mut best: Option<(Player, u32)> = None;
        for player in stream.shuffled(remaining) {
            let plays = ledger.plays(&player);
            match &best {
                Some((_, best_plays)) if plays <= *best_plays => {}
                _ => best = Some((player, plays)),
            }
        }
        best.map(|(player, _)| player)
    }

    /// Opponent candidates for a pivot/partner pair, best first.
    fn opponent_shortlist(
        &self,
        pivot: &Player,
        partner: &Player,
        pool: &[Player],
        stream: &mut SeededStream,
    ) -> Vec<Player> {
        let ledger = self.scorer.ledger();
        let mut ranked: Vec<(OpponentRank, Player)> = stream
            .shuffled(pool)
            .into_iter()
            .map(|x| {
                let rank = OpponentRank {
                    repeat_sum: ledger.opponents(pivot, &x) + ledger.opponents(partner, &x),
                    plays: ledger.plays(&x),
                };
                (rank, x)
            })
            .collect();
        ranked.sort_by_key(|(rank, _)| *rank);
        ranked.truncate(OPPONENT_SHORTLIST);
        ranked.into_iter().map(|(_, x)| x).collect()
    }

    fn expand(
        &self,
        state: &BeamState,
        shortlists: &HashMap<Player, Vec<Player>>,
        stream: &mut SeededStream,
        out: &mut Vec<BeamState>,
    ) {
        if state.remaining.len() < 4 {
            return;
        }
        let Some(pivot) = self.pick_pivot(&state.remaining, stream) else {
            return;
        };

        let mut partners: Vec<Player> = shortlists
            .get(&pivot)
            .map(|list| {
                list.iter()
                    .filter(|q| state.remaining.contains(q))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        if partners.is_empty() {
            partners = state
                .remaining
                .iter()
                .filter(|q| **q != pivot)
                .cloned()
                .collect();
        }
        stream.shuffle(&mut partners);

        let ledger = self.scorer.ledger();
        for partner in partners.iter().filter(|q| **q != pivot) {
            let rest: Vec<Player> = state
                .remaining
                .iter()
                .filter(|x| **x != pivot && *x != partner)
                .cloned()
                .collect();
            if rest.len() < 2 {
                continue;
            }

            let shortlist = self.opponent_shortlist(&pivot, partner, &rest, stream);
            let mut pairs = Vec::with_capacity(shortlist.len() * shortlist.len() / 2);
            for i in 0..shortlist.len() {
                for j in (i + 1)..shortlist.len() {
                    pairs.push((i, j));
                }
            }
            stream.shuffle(&mut pairs);

            for (i, j) in pairs {
                let (r, s) = (&shortlist[i], &shortlist[j]);
                let choice = self.scorer.best_split([&pivot, partner, r, s]);
                let load = ledger.plays(&pivot) + ledger.plays(partner) + ledger.plays(r) + ledger.plays(s);
                let lookahead = LOAD_LOOKAHEAD * f64::from(load);

                let mut matches = Vec::with_capacity(state.matches.len() + 1);
                matches.extend(state.matches.iter().cloned());
                matches.push(choice.matchup);

                out.push(BeamState {
                    score: state.score + choice.score + lookahead,
                    matches,
                    remaining: state
                        .remaining
                        .iter()
                        .filter(|x| **x != pivot && *x != partner && *x != r && *x != s)
                        .cloned()
                        .collect(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PairKey, PairingLedger};
    use crate::scoring::ScoreWeights;

    fn roster(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("P{i:02}"))).collect()
    }

    fn assert_disjoint(matches: &[Match]) {
        let mut seen = HashSet::new();
        for m in matches {
            for p in m.players() {
                assert!(seen.insert(p.clone()), "{p} appears twice");
            }
        }
    }

    #[test]
    fn test_opponent_rank_field_order() {
        let fewer_repeats = OpponentRank { repeat_sum: 0, plays: 9 };
        let more_repeats = OpponentRank { repeat_sum: 1, plays: 0 };
        assert!(fewer_repeats < more_repeats);

        let fewer_plays = OpponentRank { repeat_sum: 2, plays: 1 };
        let more_plays = OpponentRank { repeat_sum: 2, plays: 3 };
        assert!(fewer_plays < more_plays);
    }

    #[test]
    fn test_fills_all_courts() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let players = roster(12);
        let mut stream = SeededStream::from_seed_text("fill");

        let outcome = search.assemble(&players, 3, &mut stream);
        assert_eq!(outcome.matches.len(), 3);
        assert!(outcome.overflow.is_empty());
        assert_disjoint(&outcome.matches);
    }

    #[test]
    fn test_truncates_pool_to_target() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let players = roster(10);
        let mut stream = SeededStream::from_seed_text("trunc");

        let outcome = search.assemble(&players, 2, &mut stream);
        assert_eq!(outcome.matches.len(), 2);
        assert_eq!(outcome.overflow, players[8..].to_vec());
        for m in &outcome.matches {
            for p in m.players() {
                assert!(!outcome.overflow.contains(p));
            }
        }
    }

    #[test]
    fn test_deduplicates_pool() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let mut players = roster(4);
        players.push(players[0].clone());
        let mut stream = SeededStream::from_seed_text("dup");

        let outcome = search.assemble(&players, 1, &mut stream);
        assert_eq!(outcome.matches.len(), 1);
        assert_disjoint(&outcome.matches);
    }

    #[test]
    fn test_small_pool_or_zero_target() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let mut stream = SeededStream::from_seed_text("small");
        assert!(search.assemble(&roster(3), 1, &mut stream).matches.is_empty());
        assert!(search.assemble(&roster(8), 0, &mut stream).matches.is_empty());
    }

    #[test]
    fn test_partial_when_pool_short() {
        // Target 2 but only 6 distinct players: one match is the best possible.
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let mut stream = SeededStream::from_seed_text("short");
        let outcome = search.assemble(&roster(6), 2, &mut stream);
        assert_eq!(outcome.matches.len(), 1);
    }

    #[test]
    fn test_avoids_repeat_teammates() {
        let players = roster(4);
        let mut ledger = PairingLedger::new();
        ledger.add_teammates(PairKey::new(&players[0], &players[1]), 3);
        ledger.add_teammates(PairKey::new(&players[2], &players[3]), 3);

        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::default(),
        );
        let mut stream = SeededStream::from_seed_text("repeat");
        let outcome = search.assemble(&players, 1, &mut stream);

        let team_keys: Vec<PairKey> = outcome.matches[0]
            .teams()
            .iter()
            .map(|t| t.pair_key())
            .collect();
        assert!(!team_keys.contains(&PairKey::new(&players[0], &players[1])));
        assert!(!team_keys.contains(&PairKey::new(&players[2], &players[3])));
    }

    #[test]
    fn test_reproducible_for_seed() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::new(20, 4),
        );
        let players = roster(16);

        let a = search.assemble(&players, 4, &mut SeededStream::from_seed_text("same"));
        let b = search.assemble(&players, 4, &mut SeededStream::from_seed_text("same"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_beam_width_one() {
        let ledger = PairingLedger::new();
        let search = BeamSearch::new(
            MatchScorer::new(&ledger, ScoreWeights::default()),
            BeamConfig::new(1, 2),
        );
        let mut stream = SeededStream::from_seed_text("narrow");
        let outcome = search.assemble(&roster(8), 2, &mut stream);
        assert_eq!(outcome.matches.len(), 2);
        assert_disjoint(&outcome.matches);
    }
}
