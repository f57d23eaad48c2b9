//! Roster Store - Core data engine
//!
//! Holds every activity and its participants in memory for the lifetime of
//! the process. All mutations go through a single write lock, so two
//! concurrent signups for the same activity can never lose an update.

mod enrollment;
mod seed;

use std::collections::BTreeMap;
use std::path::Path;

use parking_lot::RwLock;

use crate::types::{Activity, RosterResult, WithdrawOutcome};

pub use seed::default_activities;

/// In-memory registry mapping activity names to activities
pub struct Roster {
    pub(crate) activities: RwLock<BTreeMap<String, Activity>>,
}

impl Roster {
    /// Create a roster from an explicit set of activities
    pub fn new(activities: BTreeMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Create a roster holding the built-in activity catalog
    pub fn seeded() -> Self {
        Self::new(default_activities())
    }

    /// Create a roster from a JSON seed file (activity name -> activity)
    pub fn from_seed_file(path: impl AsRef<Path>) -> RosterResult<Self> {
        let activities = seed::load_seed_file(path.as_ref())?;
        Ok(Self::new(activities))
    }

    /// Snapshot of every activity, taken under the read lock
    pub fn list_activities(&self) -> BTreeMap<String, Activity> {
        self.activities.read().clone()
    }

    /// Snapshot of a single activity
    pub fn get_activity(&self, name: &str) -> Option<Activity> {
        self.activities.read().get(name).cloned()
    }

    /// Number of activities in the catalog
    pub fn activity_count(&self) -> usize {
        self.activities.read().len()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded()
    }
}

// Mutations live in enrollment.rs
impl Roster {
    pub fn enroll(&self, activity_name: &str, email: &str) -> RosterResult<()> {
        enrollment::enroll(self, activity_name, email)
    }

    pub fn withdraw(&self, activity_name: &str, email: &str) -> RosterResult<WithdrawOutcome> {
        enrollment::withdraw(self, activity_name, email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_roster_contains_chess_club() {
        let roster = Roster::seeded();
        let activities = roster.list_activities();
        let chess = activities.get("Chess Club").unwrap();
        assert!(chess.participants.is_empty());
        assert_eq!(roster.activity_count(), activities.len());
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let roster = Roster::seeded();
        let before = roster.list_activities();
        roster.enroll("Chess Club", "late@example.com").unwrap();

        assert!(!before["Chess Club"].has_participant("late@example.com"));
        assert!(roster
            .get_activity("Chess Club")
            .unwrap()
            .has_participant("late@example.com"));
    }

    #[test]
    fn test_get_unknown_activity() {
        let roster = Roster::new(BTreeMap::new());
        assert!(roster.get_activity("Chess Club").is_none());
    }
}
