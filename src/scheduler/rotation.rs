//! Round-by-round rotation scheduler.
//!
//! # Algorithm
//!
//! Before round 1 the roster is normalized, validated, and shuffled once with
//! the run's stream; the shuffled order seeds the bench rotation. Then, for
//! every round:
//!
//! 1. `target = min(courts, players / 4)`; `seats = players - 4 · target`.
//! 2. The bench rotation picks `seats` players to sit out.
//! 3. Beam search assembles up to `target` matches from everyone else.
//! 4. The ledger records teammates, opponents, and plays of every match.
//! 5. Players the search could not place join the bench; every benched
//!    player's bench count and last-benched round are recorded.
//!
//! The ledger is only written between rounds, so one round's search always
//! scores against a fixed history.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::bench::BenchRotation;
use crate::config::ScheduleOptions;
use crate::error::{Result, ScheduleError};
use crate::models::{PairingLedger, Player, Round, Schedule};
use crate::random::SeededStream;
use crate::scoring::MatchScorer;
use crate::search::BeamSearch;
use crate::validation::{normalize_players, validate_input, MIN_PLAYERS};

/// Doubles rotation scheduler.
///
/// # Example
///
/// ```
/// use court_rotation::config::ScheduleOptions;
/// use court_rotation::scheduler::RotationScheduler;
///
/// let players = ["Ann", "Bob", "Cy", "Dee", "Eve"];
/// let scheduler = RotationScheduler::new(ScheduleOptions::default());
/// let schedule = scheduler.schedule(&players, 1, 4, "club-night").unwrap();
///
/// assert_eq!(schedule.round_count(), 4);
/// for round in &schedule.rounds {
///     assert_eq!(round.matches.len(), 1);
///     assert_eq!(round.benched.len(), 1);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct RotationScheduler {
    options: ScheduleOptions,
}

impl RotationScheduler {
    /// Creates a scheduler.
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    /// The scheduler's options.
    pub fn options(&self) -> &ScheduleOptions {
        &self.options
    }

    /// Schedules `num_rounds` rounds on up to `num_courts` courts.
    ///
    /// Player names are trimmed; empty and duplicate names are dropped.
    ///
    /// # Errors
    /// [`ScheduleError::TooFewPlayers`] with fewer than four usable players,
    /// [`ScheduleError::InvalidInput`] for zero courts/rounds or invalid
    /// options. No partial schedule is produced.
    pub fn schedule<S: AsRef<str>>(
        &self,
        players: &[S],
        num_courts: usize,
        num_rounds: usize,
        seed_text: &str,
    ) -> Result<Schedule> {
        let mut roster = normalize_players(players);
        if roster.len() < MIN_PLAYERS {
            return Err(ScheduleError::TooFewPlayers {
                found: roster.len(),
            });
        }
        validate_input(&roster, num_courts, num_rounds, &self.options)
            .map_err(ScheduleError::InvalidInput)?;

        let mut stream = SeededStream::from_seed_text(seed_text);
        stream.shuffle(&mut roster);

        let target = num_courts.min(roster.len() / 4);
        if target < num_courts {
            warn!(
                "{} players can fill at most {target} court(s); scheduling {target} of {num_courts} per round",
                roster.len()
            );
        }

        let mut run = RotationRun {
            options: &self.options,
            roster: &roster,
            target,
            stream,
            rotation: BenchRotation::new(roster.iter().cloned())
                .with_avoid_back_to_back(self.options.avoid_back_to_back),
            ledger: PairingLedger::new(),
            last_benched: HashSet::new(),
        };

        let rounds: Vec<Round> = (0..num_rounds).map(|r| run.play_round(r)).collect();

        info!(
            "scheduled {} rounds for {} players on {target} court(s) (reproducible: {})",
            rounds.len(),
            roster.len(),
            run.stream.is_reproducible()
        );

        let diagnostics = run.ledger;
        Ok(Schedule {
            players: roster,
            num_courts,
            rounds,
            diagnostics,
        })
    }
}

/// State owned by one run: stream, ledger, and bench rotation.
struct RotationRun<'a> {
    options: &'a ScheduleOptions,
    roster: &'a [Player],
    target: usize,
    stream: SeededStream,
    rotation: BenchRotation,
    ledger: PairingLedger,
    last_benched: HashSet<Player>,
}

impl RotationRun<'_> {
    fn play_round(&mut self, round: usize) -> Round {
        let seats = self.roster.len() - 4 * self.target;
        let selection = self
            .rotation
            .select(self.roster, seats, &self.last_benched);

        let sitting: HashSet<&Player> = selection.benched.iter().collect();
        let playing: Vec<Player> = self
            .roster
            .iter()
            .filter(|p| !sitting.contains(p))
            .cloned()
            .collect();

        let outcome = {
            let scorer = MatchScorer::new(&self.ledger, self.options.weights());
            BeamSearch::new(scorer, self.options.beam_config()).assemble(
                &playing,
                self.target,
                &mut self.stream,
            )
        };
        if outcome.matches.len() < self.target {
            warn!(
                "round {}: only {} of {} matches assembled",
                round + 1,
                outcome.matches.len(),
                self.target
            );
        }

        let mut active = HashSet::new();
        for m in &outcome.matches {
            self.ledger.record_match(m);
            active.extend(m.players().cloned());
        }

        let mut benched = selection.benched;
        benched.extend(playing.into_iter().filter(|p| !active.contains(p)));
        let mut seen = HashSet::new();
        benched.retain(|p| seen.insert(p.clone()));

        for p in &benched {
            self.ledger.record_bench(p, round);
        }
        self.last_benched = benched.iter().cloned().collect();

        debug!(
            "round {}: {} match(es), benched [{}], score {:.3}",
            round + 1,
            outcome.matches.len(),
            benched
                .iter()
                .map(Player::as_str)
                .collect::<Vec<_>>()
                .join(", "),
            outcome.score
        );

        Round::new(outcome.matches, benched).with_bench_forced(selection.forced)
    }
}

/// Builds a schedule in one call.
///
/// Shorthand for `RotationScheduler::new(options.clone()).schedule(...)`.
pub fn build_schedule<S: AsRef<str>>(
    players: &[S],
    num_courts: usize,
    num_rounds: usize,
    seed_text: &str,
    options: &ScheduleOptions,
) -> Result<Schedule> {
    RotationScheduler::new(options.clone()).schedule(players, num_courts, num_rounds, seed_text)
}
