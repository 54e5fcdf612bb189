//! Queue-based bench rotation.
//!
//! Players sit out in a fixed rotation order: the front of the queue is
//! benched and moved to the back, so everyone cycles through bench duty
//! before anyone repeats. When exactly one seat is needed, a player who sat
//! out last round is skipped if possible.
//!
//! # Termination
//! Skipping is bounded at three times the queue length. Past that bound the
//! remaining seats are filled from the front of the queue even if that
//! benches someone two rounds in a row; [`BenchSelection::forced`] reports
//! when this happened.

use std::collections::{HashSet, VecDeque};

use log::warn;

use crate::models::Player;

/// Players chosen to sit out one round.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchSelection {
    /// Benched players, in selection order.
    pub benched: Vec<Player>,
    /// Whether the attempt bound was hit and back-to-back benching was
    /// accepted to fill the seats.
    pub forced: bool,
}

/// Rotation queue owned across the rounds of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BenchRotation {
    queue: VecDeque<Player>,
    avoid_back_to_back: bool,
}

impl BenchRotation {
    /// Creates a rotation seeded with `order`.
    pub fn new(order: impl IntoIterator<Item = Player>) -> Self {
        Self {
            queue: order.into_iter().collect(),
            avoid_back_to_back: true,
        }
    }

    /// Enables or disables skipping last round's bench when one seat is needed.
    pub fn with_avoid_back_to_back(mut self, enabled: bool) -> Self {
        self.avoid_back_to_back = enabled;
        self
    }

    /// Current rotation order, front first.
    pub fn queue(&self) -> impl Iterator<Item = &Player> {
        self.queue.iter()
    }

    /// Number of players in the rotation.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Whether the rotation is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Chooses `seats` players to sit out and rotates them to the back.
    ///
    /// Players in `roster` missing from the queue are appended first.
    /// `seats == 0` returns an empty selection without touching the queue.
    pub fn select(
        &mut self,
        roster: &[Player],
        seats: usize,
        last_benched: &HashSet<Player>,
    ) -> BenchSelection {
        if seats == 0 {
            return BenchSelection::default();
        }

        let known: HashSet<&Player> = self.queue.iter().collect();
        let missing: Vec<Player> = roster
            .iter()
            .filter(|p| !known.contains(p))
            .cloned()
            .collect();
        self.queue.extend(missing);

        let mut selection = BenchSelection::default();
        let max_attempts = self.queue.len() * 3;
        let mut attempts = 0;

        while selection.benched.len() < seats && attempts < max_attempts {
            attempts += 1;
            let Some(player) = self.queue.pop_front() else {
                break;
            };

            let skip = self.avoid_back_to_back
                && seats == 1
                && !self.queue.is_empty()
                && last_benched.contains(&player);
            if !skip {
                selection.benched.push(player.clone());
            }
            self.queue.push_back(player);
        }

        if selection.benched.len() < seats {
            self.fill_forced(seats, &mut selection);
        }
        selection
    }

    /// Fills remaining seats from the queue front, ignoring last round.
    fn fill_forced(&mut self, seats: usize, selection: &mut BenchSelection) {
        let mut scanned = 0;
        while selection.benched.len() < seats && scanned < self.queue.len() {
            scanned += 1;
            let Some(player) = self.queue.pop_front() else {
                break;
            };
            if !selection.benched.contains(&player) {
                selection.benched.push(player.clone());
                selection.forced = true;
            }
            self.queue.push_back(player);
        }
        if selection.forced {
            warn!(
                "bench rotation exhausted its attempt bound; benching {} back-to-back",
                selection
                    .benched
                    .iter()
                    .map(Player::as_str)
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
    }
}
