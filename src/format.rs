//! Plain-text adapters around the engine.
//!
//! Parses free-form player lists and renders schedules as copyable text.
//! Nothing here touches engine state.

use crate::models::Schedule;

/// Splits a free-form player list on newlines and commas.
///
/// Names are trimmed and empty entries dropped. Duplicates are kept; the
/// scheduler removes them during normalization.
pub fn parse_players(text: &str) -> Vec<String> {
    text.lines()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from)
        .collect()
}

/// One-line summary of a run: roster size, courts, rounds, and seed.
pub fn summary_line(schedule: &Schedule, seed_text: &str) -> String {
    let mut line = format!(
        "Players: {} · Courts: {} (up to {}) · Rounds: {}",
        schedule.players.len(),
        schedule.num_courts,
        schedule.matches_per_round(),
        schedule.round_count()
    );
    let seed = seed_text.trim();
    if !seed.is_empty() {
        line.push_str(&format!(" · Seed: {seed}"));
    }
    line
}

/// Renders the schedule as plain text, one block per round.
///
/// ```text
/// Round 1
///   Ann & Bob vs Cy & Dee
///   Benched: Eve
/// ```
pub fn export_text(schedule: &Schedule) -> String {
    let mut lines = Vec::new();
    for (i, round) in schedule.rounds.iter().enumerate() {
        lines.push(format!("Round {}", i + 1));
        if round.matches.is_empty() {
            lines.push("  (No full matches possible)".to_string());
        } else {
            lines.extend(round.matches.iter().map(|m| format!("  {m}")));
        }
        if !round.benched.is_empty() {
            let names: Vec<&str> = round.benched.iter().map(|p| p.as_str()).collect();
            lines.push(format!("  Benched: {}", names.join(", ")));
        }
        lines.push(String::new());
    }
    lines.join("\n").trim().to_string()
}
