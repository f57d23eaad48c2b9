//! Activity endpoints

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use super::{EmailParams, MessageResponse};
use crate::api::state::AppState;
use crate::types::{Activity, RosterError, WithdrawOutcome};

fn required_email(params: EmailParams) -> Result<String, RosterError> {
    params
        .email
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or(RosterError::MissingEmail)
}

/// GET /activities - Every activity with its participants
pub async fn list_activities(
    State(state): State<Arc<AppState>>,
) -> Json<BTreeMap<String, Activity>> {
    Json(state.roster.list_activities())
}

/// POST /activities/:activity_name/signup?email= - Sign a participant up
pub async fn signup(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Response {
    let result = required_email(params)
        .and_then(|email| state.roster.enroll(&name, &email).map(|()| email));

    match result {
        Ok(email) => Json(MessageResponse::new(format!("Signed up {} for {}", email, name)))
            .into_response(),
        Err(err) => {
            warn!(activity = %name, error = %err, "signup rejected");
            err.into_response()
        }
    }
}

/// DELETE /activities/:activity_name/participants?email= - Unregister a participant
///
/// Succeeds whether or not the email was on the roster.
pub async fn unregister(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Query(params): Query<EmailParams>,
) -> Response {
    let result = required_email(params).and_then(|email| {
        state
            .roster
            .withdraw(&name, &email)
            .map(|outcome| (email, outcome))
    });

    match result {
        Ok((email, WithdrawOutcome::Removed | WithdrawOutcome::NotEnrolled)) => Json(
            MessageResponse::new(format!("Unregistered {} from {}", email, name)),
        )
        .into_response(),
        Err(err) => {
            warn!(activity = %name, error = %err, "unregister rejected");
            err.into_response()
        }
    }
}
