//! Enroll and withdraw operations for the roster

use tracing::{debug, info};

use crate::types::{RosterError, RosterResult, WithdrawOutcome};

use super::Roster;

fn normalize_email(email: &str) -> RosterResult<&str> {
    let email = email.trim();
    if email.is_empty() {
        return Err(RosterError::MissingEmail);
    }
    Ok(email)
}

/// Add an email to an activity (thread-safe: holds write lock during entire operation)
///
/// A repeated signup is rejected, not silently accepted. The duplicate check
/// runs before the capacity check so a member of a full activity still gets
/// `AlreadyEnrolled`.
pub fn enroll(roster: &Roster, activity_name: &str, email: &str) -> RosterResult<()> {
    let email = normalize_email(email)?;
    let mut activities = roster.activities.write();

    let activity = activities
        .get_mut(activity_name)
        .ok_or_else(|| RosterError::UnknownActivity(activity_name.to_string()))?;

    if activity.has_participant(email) {
        return Err(RosterError::AlreadyEnrolled {
            email: email.to_string(),
            activity: activity_name.to_string(),
        });
    }

    if activity.is_full() {
        return Err(RosterError::ActivityFull {
            activity: activity_name.to_string(),
            capacity: activity.capacity,
        });
    }

    activity.participants.push(email.to_string());
    info!(
        activity = activity_name,
        email,
        participants = activity.participants.len(),
        "participant enrolled"
    );
    Ok(())
}

/// Remove an email from an activity (thread-safe: holds write lock during entire operation)
///
/// Withdrawing someone who is not enrolled is not an error.
pub fn withdraw(roster: &Roster, activity_name: &str, email: &str) -> RosterResult<WithdrawOutcome> {
    let email = normalize_email(email)?;
    let mut activities = roster.activities.write();

    let activity = activities
        .get_mut(activity_name)
        .ok_or_else(|| RosterError::UnknownActivity(activity_name.to_string()))?;

    let before = activity.participants.len();
    activity.participants.retain(|p| p != email);

    if activity.participants.len() == before {
        debug!(activity = activity_name, email, "withdraw for non-participant ignored");
        return Ok(WithdrawOutcome::NotEnrolled);
    }

    info!(
        activity = activity_name,
        email,
        participants = activity.participants.len(),
        "participant withdrawn"
    );
    Ok(WithdrawOutcome::Removed)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::types::Activity;

    fn small_roster() -> Roster {
        let mut activities = BTreeMap::new();
        activities.insert(
            "Chess Club".to_string(),
            Activity::new("Learn strategies", "Fridays, 3:30 PM - 5:00 PM", 2),
        );
        Roster::new(activities)
    }

    #[test]
    fn test_enroll_then_duplicate() {
        let roster = small_roster();
        enroll(&roster, "Chess Club", "dup@example.com").unwrap();

        let err = enroll(&roster, "Chess Club", "dup@example.com").unwrap_err();
        assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));
        assert_eq!(roster.get_activity("Chess Club").unwrap().participants.len(), 1);
    }

    #[test]
    fn test_enroll_trims_email() {
        let roster = small_roster();
        enroll(&roster, "Chess Club", "  pad@example.com ").unwrap();

        let err = enroll(&roster, "Chess Club", "pad@example.com").unwrap_err();
        assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));
    }

    #[test]
    fn test_enroll_rejects_blank_email() {
        let roster = small_roster();
        assert!(matches!(
            enroll(&roster, "Chess Club", "   "),
            Err(RosterError::MissingEmail)
        ));
        assert!(matches!(
            withdraw(&roster, "Chess Club", ""),
            Err(RosterError::MissingEmail)
        ));
    }

    #[test]
    fn test_enroll_full_activity() {
        let roster = small_roster();
        enroll(&roster, "Chess Club", "a@example.com").unwrap();
        enroll(&roster, "Chess Club", "b@example.com").unwrap();

        let err = enroll(&roster, "Chess Club", "c@example.com").unwrap_err();
        assert!(matches!(err, RosterError::ActivityFull { capacity: 2, .. }));

        // A member of a full activity is told they are already enrolled
        let err = enroll(&roster, "Chess Club", "a@example.com").unwrap_err();
        assert!(matches!(err, RosterError::AlreadyEnrolled { .. }));
    }

    #[test]
    fn test_withdraw_outcomes() {
        let roster = small_roster();
        enroll(&roster, "Chess Club", "a@example.com").unwrap();

        assert_eq!(
            withdraw(&roster, "Chess Club", "a@example.com").unwrap(),
            WithdrawOutcome::Removed
        );
        assert_eq!(
            withdraw(&roster, "Chess Club", "a@example.com").unwrap(),
            WithdrawOutcome::NotEnrolled
        );
    }

    #[test]
    fn test_unknown_activity() {
        let roster = small_roster();
        assert!(matches!(
            enroll(&roster, "Nonexistent Club", "a@example.com"),
            Err(RosterError::UnknownActivity(name)) if name == "Nonexistent Club"
        ));
        assert!(matches!(
            withdraw(&roster, "Nonexistent Club", "a@example.com"),
            Err(RosterError::UnknownActivity(_))
        ));
    }
}
