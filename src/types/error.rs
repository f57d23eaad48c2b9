//! Roster error types

use thiserror::Error;

/// Outcomes of roster calls that the caller must surface to the client.
///
/// None of these indicate a fault in the service itself; they are
/// validation results for a single enroll or withdraw request.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Activity '{0}' not found")]
    UnknownActivity(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyEnrolled { email: String, activity: String },

    #[error("{activity} is full ({capacity} participants)")]
    ActivityFull { activity: String, capacity: usize },

    #[error("Email is required")]
    MissingEmail,

    #[error("Failed to load seed file {path}: {reason}")]
    SeedLoad { path: String, reason: String },
}

impl RosterError {
    /// Stable machine-readable code for API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownActivity(_) => "UNKNOWN_ACTIVITY",
            Self::AlreadyEnrolled { .. } => "ALREADY_ENROLLED",
            Self::ActivityFull { .. } => "ACTIVITY_FULL",
            Self::MissingEmail => "MISSING_EMAIL",
            Self::SeedLoad { .. } => "SEED_LOAD",
        }
    }
}

/// Result of a withdraw call that did not fail.
///
/// `NotEnrolled` is kept as a signal for logging; callers report it
/// the same way as `Removed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawOutcome {
    Removed,
    NotEnrolled,
}
