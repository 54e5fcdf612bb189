//! Schedule fairness metrics.
//!
//! Summarizes how evenly a schedule spreads court time and how often
//! pairings repeat, computed from the schedule's ledger snapshot.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Plays spread | max(plays) − min(plays) over the roster |
//! | Bench spread | max(benches) − min(benches) over the roster |
//! | Top teammate repeats | Pairs teamed most often (count > 0) |
//! | Top opponent repeats | Pairs opposed most often (count > 0) |

use std::collections::HashMap;
use std::fmt;

use crate::models::{PairKey, Player, Schedule};

/// Default number of pairs listed per repeat table.
pub const DEFAULT_TOP_PAIRS: usize = 15;

/// Fairness indicators for a finished schedule.
#[derive(Debug, Clone, PartialEq)]
pub struct FairnessReport {
    /// Fewest rounds played by any player.
    pub min_plays: u32,
    /// Most rounds played by any player.
    pub max_plays: u32,
    /// Fewest rounds benched by any player.
    pub min_benches: u32,
    /// Most rounds benched by any player.
    pub max_benches: u32,
    /// Rounds played per player, sorted by name.
    pub plays_by_player: Vec<(Player, u32)>,
    /// Rounds benched per player, sorted by name.
    pub benches_by_player: Vec<(Player, u32)>,
    /// Most repeated teammate pairs, highest count first.
    pub top_teammates: Vec<(PairKey, u32)>,
    /// Most repeated opponent pairs, highest count first.
    pub top_opponents: Vec<(PairKey, u32)>,
}

impl FairnessReport {
    /// Computes the report, listing at most `top_pairs` pairs per table.
    pub fn calculate(schedule: &Schedule, top_pairs: usize) -> Self {
        let ledger = &schedule.diagnostics;

        let mut roster: Vec<&Player> = schedule.players.iter().collect();
        roster.sort();

        let plays_by_player: Vec<(Player, u32)> = roster
            .iter()
            .map(|p| ((*p).clone(), ledger.plays(p)))
            .collect();
        let benches_by_player: Vec<(Player, u32)> = roster
            .iter()
            .map(|p| ((*p).clone(), ledger.benches(p)))
            .collect();

        let (min_plays, max_plays) = min_max(plays_by_player.iter().map(|(_, n)| *n));
        let (min_benches, max_benches) = min_max(benches_by_player.iter().map(|(_, n)| *n));

        Self {
            min_plays,
            max_plays,
            min_benches,
            max_benches,
            plays_by_player,
            benches_by_player,
            top_teammates: top_pairs_of(&ledger.teammate_count, top_pairs),
            top_opponents: top_pairs_of(&ledger.opponent_count, top_pairs),
        }
    }

    /// max(plays) − min(plays).
    pub fn plays_spread(&self) -> u32 {
        self.max_plays - self.min_plays
    }

    /// max(benches) − min(benches).
    pub fn bench_spread(&self) -> u32 {
        self.max_benches - self.min_benches
    }

    /// Whether both spreads are within the given tolerances.
    pub fn within_tolerance(&self, max_plays_spread: u32, max_bench_spread: u32) -> bool {
        self.plays_spread() <= max_plays_spread && self.bench_spread() <= max_bench_spread
    }
}

fn min_max(values: impl Iterator<Item = u32>) -> (u32, u32) {
    values
        .fold(None, |acc: Option<(u32, u32)>, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
        .unwrap_or((0, 0))
}

/// Positive counts, descending by count then ascending by pair.
fn top_pairs_of(counts: &HashMap<PairKey, u32>, limit: usize) -> Vec<(PairKey, u32)> {
    let mut pairs: Vec<(PairKey, u32)> = counts
        .iter()
        .filter(|(_, n)| **n > 0)
        .map(|(k, &n)| (k.clone(), n))
        .collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    pairs.truncate(limit);
    pairs
}

fn join_counts<'a, K: fmt::Display + 'a>(
    entries: impl Iterator<Item = (&'a K, &'a u32)>,
    separator: &str,
) -> String {
    let joined = entries
        .map(|(k, n)| format!("{k}:{n}"))
        .collect::<Vec<_>>()
        .join(separator);
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

impl fmt::Display for FairnessReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plays: min={}, max={}", self.min_plays, self.max_plays)?;
        writeln!(f, "Benches: min={}, max={}", self.min_benches, self.max_benches)?;
        writeln!(
            f,
            "Plays per player: {}",
            join_counts(self.plays_by_player.iter().map(|(p, n)| (p, n)), ", ")
        )?;
        writeln!(
            f,
            "Benches per player: {}",
            join_counts(self.benches_by_player.iter().map(|(p, n)| (p, n)), ", ")
        )?;
        let teammates = self
            .top_teammates
            .iter()
            .map(|(k, n)| format!("{}&{}:{n}", k.first(), k.second()))
            .collect::<Vec<_>>();
        writeln!(
            f,
            "Top teammate repeats: {}",
            if teammates.is_empty() { "none".to_string() } else { teammates.join(", ") }
        )?;
        let opponents = self
            .top_opponents
            .iter()
            .map(|(k, n)| format!("{} vs {}:{n}", k.first(), k.second()))
            .collect::<Vec<_>>();
        write!(
            f,
            "Top opponent repeats: {}",
            if opponents.is_empty() { "none".to_string() } else { opponents.join(", ") }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Match, PairingLedger, Round, Team};

    fn p(name: &str) -> Player {
        Player::new(name)
    }

    fn sample_schedule() -> Schedule {
        let m = Match::new(Team::new(p("a"), p("b")), Team::new(p("c"), p("d")));
        let mut diagnostics = PairingLedger::new();
        diagnostics.record_match(&m);
        diagnostics.record_match(&m);
        diagnostics.record_bench(&p("e"), 0);
        diagnostics.record_bench(&p("e"), 1);
        Schedule {
            players: ["e", "d", "c", "b", "a"].into_iter().map(p).collect(),
            num_courts: 1,
            rounds: vec![
                Round::new(vec![m.clone()], vec![p("e")]),
                Round::new(vec![m], vec![p("e")]),
            ],
            diagnostics,
        }
    }

    #[test]
    fn test_spreads() {
        let report = FairnessReport::calculate(&sample_schedule(), DEFAULT_TOP_PAIRS);
        assert_eq!(report.min_plays, 0);
        assert_eq!(report.max_plays, 2);
        assert_eq!(report.min_benches, 0);
        assert_eq!(report.max_benches, 2);
        assert_eq!(report.plays_spread(), 2);
        assert!(report.within_tolerance(2, 2));
        assert!(!report.within_tolerance(1, 2));
    }

    #[test]
    fn test_sorted_by_name() {
        let report = FairnessReport::calculate(&sample_schedule(), DEFAULT_TOP_PAIRS);
        let order: Vec<&str> = report.plays_by_player.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_top_pairs_order_and_limit() {
        let report = FairnessReport::calculate(&sample_schedule(), 1);
        assert_eq!(report.top_teammates.len(), 1);
        assert_eq!(report.top_teammates[0], (PairKey::new(&p("a"), &p("b")), 2));
        assert_eq!(report.top_opponents[0], (PairKey::new(&p("a"), &p("c")), 2));
    }

    #[test]
    fn test_display() {
        let text = FairnessReport::calculate(&sample_schedule(), 2).to_string();
        assert!(text.starts_with("Plays: min=0, max=2\n"));
        assert!(text.contains("Plays per player: a:2, b:2, c:2, d:2, e:0"));
        assert!(text.contains("Top teammate repeats: a&b:2, c&d:2"));
        assert!(text.contains("Top opponent repeats: a vs c:2, a vs d:2"));
    }

    #[test]
    fn test_empty_schedule() {
        let report = FairnessReport::calculate(&Schedule::default(), DEFAULT_TOP_PAIRS);
        assert_eq!(report.plays_spread(), 0);
        assert!(report.top_teammates.is_empty());
        assert!(report.to_string().contains("Top teammate repeats: none"));
    }
}
