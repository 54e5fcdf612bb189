//! Input validation for rotation requests.
//!
//! Normalizes the roster and checks the request before scheduling.
//! Detects:
//! - Rosters with fewer than four usable players
//! - Zero courts or zero rounds
//! - Degenerate search parameters (zero beam width, partner shortlist below 2)
//! - Negative or non-finite score weights
//!
//! All problems are collected, not just the first one.

use std::collections::HashSet;

use crate::config::ScheduleOptions;
use crate::models::Player;

/// Minimum players for one match.
pub const MIN_PLAYERS: usize = 4;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Fewer than four usable players after normalization.
    TooFewPlayers,
    /// Zero courts requested.
    ZeroCourts,
    /// Zero rounds requested.
    ZeroRounds,
    /// Beam width of zero.
    ZeroBeamWidth,
    /// Partner shortlist smaller than two.
    PartnerShortlistTooSmall,
    /// A score weight is negative, NaN, or infinite.
    InvalidWeight,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Trims names, drops empty ones, and removes duplicates (first kept).
///
/// Roster order is otherwise preserved.
pub fn normalize_players<S: AsRef<str>>(players: &[S]) -> Vec<Player> {
    let mut seen = HashSet::new();
    players
        .iter()
        .map(|p| p.as_ref().trim())
        .filter(|name| !name.is_empty())
        .filter(|name| seen.insert(*name))
        .map(Player::from)
        .collect()
}

/// Validates a normalized roster and request parameters.
///
/// Checks:
/// 1. At least four players
/// 2. At least one court
/// 3. At least one round
/// 4. Beam width of at least one
/// 5. Partner shortlist of at least two
/// 6. Finite, non-negative weights
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(
    players: &[Player],
    num_courts: usize,
    num_rounds: usize,
    options: &ScheduleOptions,
) -> ValidationResult {
    let mut errors = Vec::new();

    if players.len() < MIN_PLAYERS {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooFewPlayers,
            format!(
                "Need at least {MIN_PLAYERS} players, got {}",
                players.len()
            ),
        ));
    }

    if num_courts == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroCourts,
            "Number of courts must be positive",
        ));
    }

    if num_rounds == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroRounds,
            "Number of rounds must be positive",
        ));
    }

    if options.beam_width == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::ZeroBeamWidth,
            "Beam width must be positive",
        ));
    }

    if options.partner_k < 2 {
        errors.push(ValidationError::new(
            ValidationErrorKind::PartnerShortlistTooSmall,
            format!("Partner shortlist must be at least 2, got {}", options.partner_k),
        ));
    }

    for (name, weight) in [
        ("weightTeam", options.weight_team),
        ("weightOpponent", options.weight_opponent),
        ("weightPlay", options.weight_play),
    ] {
        if !weight.is_finite() || weight < 0.0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                format!("Weight '{name}' must be a finite non-negative number, got {weight}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(n: usize) -> Vec<Player> {
        (0..n).map(|i| Player::new(format!("P{i}"))).collect()
    }

    #[test]
    fn test_normalize_trims_and_dedupes() {
        let players = normalize_players(&["  Ann ", "", "Bob", "Ann", "   ", "Cy\t"]);
        let names: Vec<&str> = players.iter().map(Player::as_str).collect();
        assert_eq!(names, vec!["Ann", "Bob", "Cy"]);
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_input(&roster(4), 1, 1, &ScheduleOptions::default()).is_ok());
    }

    #[test]
    fn test_too_few_players() {
        let errors = validate_input(&roster(3), 1, 1, &ScheduleOptions::default()).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::TooFewPlayers));
    }

    #[test]
    fn test_zero_courts_and_rounds() {
        let errors = validate_input(&roster(8), 0, 0, &ScheduleOptions::default()).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::ZeroCourts);
        assert_eq!(errors[1].kind, ValidationErrorKind::ZeroRounds);
    }

    #[test]
    fn test_search_parameters() {
        let options = ScheduleOptions::default()
            .with_beam_width(0)
            .with_partner_k(1);
        let errors = validate_input(&roster(8), 2, 2, &options).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBeamWidth));
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::PartnerShortlistTooSmall));
    }

    #[test]
    fn test_invalid_weights() {
        let options = ScheduleOptions::default()
            .with_weight_team(f64::NAN)
            .with_weight_play(-1.0);
        let errors = validate_input(&roster(8), 2, 2, &options).unwrap_err();
        let weight_errors: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ValidationErrorKind::InvalidWeight)
            .collect();
        assert_eq!(weight_errors.len(), 2);
        assert!(weight_errors[0].message.contains("weightTeam"));
    }

    #[test]
    fn test_multiple_errors() {
        let errors = validate_input(&roster(2), 0, 1, &ScheduleOptions::default()).unwrap_err();
        assert!(errors.len() >= 2);
    }
}
