//! Data types for the activity roster
//!
//! This module contains the activity record and the error types shared by
//! the roster store and the HTTP layer.

mod activity;
mod error;

pub use activity::Activity;
pub use error::{RosterError, WithdrawOutcome};

/// Result type for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
