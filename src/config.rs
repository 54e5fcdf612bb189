//! Scheduling options and run configuration.
//!
//! [`ScheduleOptions`] holds the tuning knobs of the engine.
//! [`ScheduleConfig`] bundles a whole run (roster, courts, rounds, seed,
//! options) so it can be stored or exchanged as JSON and replayed exactly.
//!
//! Field names are camelCase; the short names used by shared links of the
//! original tool (`wT`, `wO`, `wP`, `square`, `avoidB2B`, `courts`,
//! `rounds`, `seed`) are accepted as aliases.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Schedule;
use crate::scheduler::RotationScheduler;
use crate::scoring::ScoreWeights;
use crate::search::BeamConfig;

/// Engine options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScheduleOptions {
    /// Repeat-teammate penalty weight.
    #[serde(alias = "wT")]
    pub weight_team: f64,
    /// Repeat-opponent penalty weight.
    #[serde(alias = "wO")]
    pub weight_opponent: f64,
    /// Load-balancing weight.
    #[serde(alias = "wP")]
    pub weight_play: f64,
    /// Partial rounds kept per search step.
    pub beam_width: usize,
    /// Partner shortlist size (at least 2).
    pub partner_k: usize,
    /// Penalize repeats quadratically instead of linearly.
    #[serde(alias = "square")]
    pub square_repeats: bool,
    /// Skip last round's bench when only one seat is needed.
    #[serde(alias = "avoidB2B")]
    pub avoid_back_to_back: bool,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        let weights = ScoreWeights::default();
        let beam = BeamConfig::default();
        Self {
            weight_team: weights.team,
            weight_opponent: weights.opponent,
            weight_play: weights.play,
            beam_width: beam.beam_width,
            partner_k: beam.partner_k,
            square_repeats: weights.square_repeats,
            avoid_back_to_back: true,
        }
    }
}

impl ScheduleOptions {
    /// Sets the repeat-teammate weight.
    pub fn with_weight_team(mut self, weight: f64) -> Self {
        self.weight_team = weight;
        self
    }

    /// Sets the repeat-opponent weight.
    pub fn with_weight_opponent(mut self, weight: f64) -> Self {
        self.weight_opponent = weight;
        self
    }

    /// Sets the load-balancing weight.
    pub fn with_weight_play(mut self, weight: f64) -> Self {
        self.weight_play = weight;
        self
    }

    /// Sets the beam width.
    pub fn with_beam_width(mut self, beam_width: usize) -> Self {
        self.beam_width = beam_width;
        self
    }

    /// Sets the partner shortlist size.
    pub fn with_partner_k(mut self, partner_k: usize) -> Self {
        self.partner_k = partner_k;
        self
    }

    /// Enables or disables quadratic repeat penalties.
    pub fn with_square_repeats(mut self, enabled: bool) -> Self {
        self.square_repeats = enabled;
        self
    }

    /// Enables or disables back-to-back bench avoidance.
    pub fn with_avoid_back_to_back(mut self, enabled: bool) -> Self {
        self.avoid_back_to_back = enabled;
        self
    }

    /// Scoring weights derived from these options.
    pub fn weights(&self) -> ScoreWeights {
        ScoreWeights {
            team: self.weight_team,
            opponent: self.weight_opponent,
            play: self.weight_play,
            square_repeats: self.square_repeats,
        }
    }

    /// Search parameters derived from these options.
    pub fn beam_config(&self) -> BeamConfig {
        BeamConfig::new(self.beam_width, self.partner_k)
    }
}

/// A complete, replayable run description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConfig {
    /// Roster, in entry order.
    pub players: Vec<String>,
    /// Courts available per round.
    #[serde(alias = "courts")]
    pub num_courts: usize,
    /// Rounds to schedule.
    #[serde(alias = "rounds")]
    pub num_rounds: usize,
    /// Seed text; empty means non-reproducible.
    #[serde(default, alias = "seed")]
    pub seed_text: String,
    /// Engine options.
    #[serde(flatten)]
    pub options: ScheduleOptions,
}

impl ScheduleConfig {
    /// Creates a config with default options.
    pub fn new(
        players: impl IntoIterator<Item = impl Into<String>>,
        num_courts: usize,
        num_rounds: usize,
        seed_text: impl Into<String>,
    ) -> Self {
        Self {
            players: players.into_iter().map(Into::into).collect(),
            num_courts,
            num_rounds,
            seed_text: seed_text.into(),
            options: ScheduleOptions::default(),
        }
    }

    /// Sets the engine options.
    pub fn with_options(mut self, options: ScheduleOptions) -> Self {
        self.options = options;
        self
    }

    /// Parses a config from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the config to compact JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Runs the scheduler on this config.
    pub fn run(&self) -> Result<Schedule> {
        RotationScheduler::new(self.options.clone()).schedule(
            &self.players,
            self.num_courts,
            self.num_rounds,
            &self.seed_text,
        )
    }
}
