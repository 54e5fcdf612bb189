//! Match scoring.
//!
//! Scores are undesirability values: **lower is better**. A score combines
//! repeat penalties (teammates, opponents) with a load term that favors
//! players who have played fewer rounds.
//!
//! # Formulas
//!
//! | Term | Definition |
//! |------|-----------|
//! | `penalty(x)` | `x²` in square-repeats mode, else `x` |
//! | team score | `wT · penalty(teammates(a,b)) + wP · (plays(a) + plays(b))` |
//! | opponent score | `wO · Σ penalty(opponents(p,q))` over the four cross pairs |
//! | split score | team score × 2 + opponent score |

use serde::{Deserialize, Serialize};

use crate::models::{Match, PairingLedger, Player, Team};

/// Weights and penalty shape used by [`MatchScorer`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Repeat-teammate weight (`wT`).
    pub team: f64,
    /// Repeat-opponent weight (`wO`).
    pub opponent: f64,
    /// Load-balancing weight (`wP`).
    pub play: f64,
    /// Square repeat counts instead of using them linearly.
    pub square_repeats: bool,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            team: 5.0,
            opponent: 2.0,
            play: 1.0,
            square_repeats: true,
        }
    }
}

impl ScoreWeights {
    /// Repeat penalty for a count.
    #[inline]
    pub fn penalty(&self, count: u32) -> f64 {
        let x = f64::from(count);
        if self.square_repeats {
            x * x
        } else {
            x
        }
    }
}

/// The best way to split four players into two teams.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitChoice {
    /// The chosen match, teams in display order.
    pub matchup: Match,
    /// Its total score.
    pub score: f64,
}

/// Read-only scorer over a ledger snapshot.
#[derive(Debug, Clone, Copy)]
pub struct MatchScorer<'a> {
    ledger: &'a PairingLedger,
    weights: ScoreWeights,
}

impl<'a> MatchScorer<'a> {
    /// Creates a scorer.
    pub fn new(ledger: &'a PairingLedger, weights: ScoreWeights) -> Self {
        Self { ledger, weights }
    }

    /// The ledger being scored against.
    pub fn ledger(&self) -> &'a PairingLedger {
        self.ledger
    }

    /// The active weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Score of `a` and `b` playing as teammates.
    pub fn team_score(&self, a: &Player, b: &Player) -> f64 {
        let repeats = self.weights.penalty(self.ledger.teammates(a, b));
        let load = f64::from(self.ledger.plays(a) + self.ledger.plays(b));
        self.weights.team * repeats + self.weights.play * load
    }

    /// Score of team `(a, b)` facing team `(c, d)`.
    pub fn opponent_score(&self, a: &Player, b: &Player, c: &Player, d: &Player) -> f64 {
        let sum = [(a, c), (a, d), (b, c), (b, d)]
            .into_iter()
            .map(|(x, y)| self.weights.penalty(self.ledger.opponents(x, y)))
            .fold(0.0, |acc, v| acc + v);
        self.weights.opponent * sum
    }

    /// Total score of the split `(a, b)` vs `(c, d)`.
    pub fn split_score(&self, a: &Player, b: &Player, c: &Player, d: &Player) -> f64 {
        self.team_score(a, b) + self.team_score(c, d) + self.opponent_score(a, b, c, d)
    }

    /// Picks the lowest-scoring of the three team splits of four players.
    ///
    /// Splits are tried in the order (ab|cd), (ac|bd), (ad|bc); on an exact
    /// tie the earlier split is kept.
    pub fn best_split(&self, four: [&Player; 4]) -> SplitChoice {
        let [a, b, c, d] = four;
        let splits = [(a, b, c, d), (a, c, b, d), (a, d, b, c)];

        let mut best_idx = 0;
        let mut best_score = f64::INFINITY;
        for (idx, &(x1, x2, y1, y2)) in splits.iter().enumerate() {
            let score = self.split_score(x1, x2, y1, y2);
            if score < best_score {
                best_score = score;
                best_idx = idx;
            }
        }

        let score = best_score;
        let (x1, x2, y1, y2) = splits[best_idx];
        SplitChoice {
            matchup: Match::new(
                Team::new(x1.clone(), x2.clone()),
                Team::new(y1.clone(), y2.clone()),
            ),
            score,
        }
    }
}
