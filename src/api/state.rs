//! Shared application state for HTTP handlers

use std::path::PathBuf;
use std::sync::Arc;

use crate::roster::Roster;

/// State handed to every handler through axum's `State` extractor
pub struct AppState {
    /// The roster store
    pub roster: Arc<Roster>,

    /// Directory served under /static
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create a new AppState with the given roster
    pub fn new(roster: Arc<Roster>) -> Self {
        Self {
            roster,
            static_dir: PathBuf::from("static"),
        }
    }

    /// Serve the browser client from a different directory
    pub fn with_static_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.static_dir = dir.into();
        self
    }
}
