//! Initial roster contents

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use tracing::info;

use crate::types::{Activity, RosterError, RosterResult};

/// Built-in activity catalog used when no seed file is configured
pub fn default_activities() -> BTreeMap<String, Activity> {
    let catalog = [
        (
            "Chess Club",
            Activity::new(
                "Learn strategies and compete in chess tournaments",
                "Fridays, 3:30 PM - 5:00 PM",
                12,
            ),
        ),
        (
            "Programming Class",
            Activity::with_participants(
                "Learn programming fundamentals and build software projects",
                "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                20,
                &["emma@mergington.edu", "sophia@mergington.edu"],
            ),
        ),
        (
            "Gym Class",
            Activity::with_participants(
                "Physical education and sports activities",
                "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                30,
                &["john@mergington.edu", "olivia@mergington.edu"],
            ),
        ),
        (
            "Soccer Team",
            Activity::with_participants(
                "Practice drills and compete in inter-school matches",
                "Tuesdays and Thursdays, 4:00 PM - 6:00 PM",
                22,
                &["liam@mergington.edu"],
            ),
        ),
        (
            "Basketball Team",
            Activity::new(
                "Team practice and weekend league games",
                "Wednesdays, 4:00 PM - 6:00 PM",
                15,
            ),
        ),
        (
            "Art Club",
            Activity::with_participants(
                "Explore drawing, painting and mixed media",
                "Mondays, 3:30 PM - 5:00 PM",
                18,
                &["ava@mergington.edu"],
            ),
        ),
        (
            "Drama Club",
            Activity::new(
                "Rehearse and perform plays for the school",
                "Thursdays, 3:30 PM - 5:30 PM",
                25,
            ),
        ),
        (
            "Math Club",
            Activity::with_participants(
                "Solve challenging problems and prepare for competitions",
                "Tuesdays, 3:30 PM - 4:30 PM",
                10,
                &["noah@mergington.edu"],
            ),
        ),
        (
            "Debate Team",
            Activity::new(
                "Build argumentation skills and compete in debates",
                "Fridays, 4:00 PM - 5:30 PM",
                12,
            ),
        ),
    ];

    catalog
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity))
        .collect()
}

/// Read a JSON object of activity name -> activity.
///
/// Participant lists are de-duplicated on load. Lists longer than the
/// capacity are kept as they are; such an activity simply accepts no new
/// signups.
pub(crate) fn load_seed_file(path: &Path) -> RosterResult<BTreeMap<String, Activity>> {
    let seed_error = |reason: String| RosterError::SeedLoad {
        path: path.display().to_string(),
        reason,
    };

    let content = fs::read_to_string(path).map_err(|e| seed_error(e.to_string()))?;
    let mut activities: BTreeMap<String, Activity> =
        serde_json::from_str(&content).map_err(|e| seed_error(e.to_string()))?;

    for (name, activity) in activities.iter_mut() {
        if name.trim().is_empty() {
            return Err(seed_error("activity names must not be empty".to_string()));
        }
        if activity.capacity == 0 {
            return Err(seed_error(format!("{} must have a positive max_participants", name)));
        }
        let mut seen = HashSet::with_capacity(activity.participants.len());
        activity.participants.retain(|p| seen.insert(p.clone()));
    }

    info!(path = %path.display(), activities = activities.len(), "loaded roster seed file");
    Ok(activities)
}
