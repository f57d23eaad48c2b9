//! Activity record for the roster

use serde::{Deserialize, Serialize};

/// A named activity with its schedule, capacity and current participants
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Maximum number of participants
    #[serde(rename = "max_participants")]
    pub capacity: usize,
    /// Participant emails in signup order, without duplicates
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with an empty participant list
    pub fn new(description: impl Into<String>, schedule: impl Into<String>, capacity: usize) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            capacity,
            participants: Vec::new(),
        }
    }

    /// Create a new activity with pre-seeded participants
    pub fn with_participants(
        description: impl Into<String>,
        schedule: impl Into<String>,
        capacity: usize,
        participants: &[&str],
    ) -> Self {
        let mut activity = Self::new(description, schedule, capacity);
        for email in participants {
            if !activity.has_participant(email) {
                activity.participants.push((*email).to_string());
            }
        }
        activity
    }

    /// Check whether an email is on this activity's roster
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Remaining free spots (zero when at or over capacity)
    pub fn spots_left(&self) -> usize {
        self.capacity.saturating_sub(self.participants.len())
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_participants_drops_duplicates() {
        let activity = Activity::with_participants(
            "Weekly games",
            "Fridays",
            5,
            &["a@example.com", "b@example.com", "a@example.com"],
        );
        assert_eq!(activity.participants, vec!["a@example.com", "b@example.com"]);
        assert_eq!(activity.spots_left(), 3);
        assert!(!activity.is_full());
    }

    #[test]
    fn test_capacity_serializes_as_max_participants() {
        let activity = Activity::new("Board games", "Mondays", 2);
        let json = serde_json::to_value(&activity).unwrap();
        assert_eq!(json["max_participants"], 2);
        assert!(json["participants"].as_array().unwrap().is_empty());
        assert!(json.get("capacity").is_none());
    }

    #[test]
    fn test_deserialize_without_participants() {
        let activity: Activity = serde_json::from_str(
            r#"{"description":"Chess","schedule":"Fridays","max_participants":12}"#,
        )
        .unwrap();
        assert!(activity.participants.is_empty());
        assert_eq!(activity.capacity, 12);
    }

    #[test]
    fn test_over_capacity_has_no_spots() {
        let activity = Activity::with_participants("Tiny", "Never", 1, &["a@x.io", "b@x.io"]);
        assert!(activity.is_full());
        assert_eq!(activity.spots_left(), 0);
    }
}
