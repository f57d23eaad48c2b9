//! REST API module for HTTP endpoints
//!
//! - `GET /activities` - Full roster snapshot
//! - `POST /activities/:name/signup?email=` - Enroll a participant
//! - `DELETE /activities/:name/participants?email=` - Withdraw a participant

pub mod activities;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::types::RosterError;

/// Query parameters carrying the participant email
#[derive(Debug, Deserialize)]
pub struct EmailParams {
    pub email: Option<String>,
}

/// Body returned by successful mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// API error response
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Human-readable reason, shown by the browser client
    pub detail: String,
    pub code: String,
}

impl ApiError {
    pub fn bad_request(detail: impl Into<String>, code: &str) -> Self {
        Self {
            detail: detail.into(),
            code: code.to_string(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            code: "INTERNAL_ERROR".to_string(),
        }
    }
}

impl IntoResponse for RosterError {
    fn into_response(self) -> Response {
        let (status, error) = match &self {
            RosterError::SeedLoad { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, ApiError::internal(self.to_string()))
            }
            _ => (
                StatusCode::BAD_REQUEST,
                ApiError::bad_request(self.to_string(), self.code()),
            ),
        };
        (status, Json(error)).into_response()
    }
}
