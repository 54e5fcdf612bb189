//! Error types.

use crate::validation::ValidationError;

/// Fatal errors raised before any round is scheduled.
///
/// Imperfect but valid outcomes (capped courts, partial rounds, forced
/// back-to-back benching) are reported through the schedule itself, never
/// as errors.
#[derive(thiserror::Error, Debug)]
pub enum ScheduleError {
    #[error("Need at least 4 players, got {found}")]
    TooFewPlayers { found: usize },

    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for scheduling operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;
