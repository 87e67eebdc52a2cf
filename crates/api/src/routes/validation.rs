//! Dry-run validation route.
//!
//! Mirrors the create/update rules without persisting anything, so clients
//! can surface conflicts before submitting.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::post};
use serde::{Deserialize, Serialize};
use worklog_core::validation::ValidationError;

use super::non_accounting_entries::NonAccountingEntryRequest;
use super::time_entries::TimeEntryRequest;
use super::today;
use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the validation routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/entries/validate", post(validate_entry))
}

/// Request body: exactly one candidate kind.
#[derive(Debug, Deserialize)]
pub struct ValidationRequest {
    /// Candidate time entry.
    pub time_entry: Option<TimeEntryRequest>,
    /// Candidate non-accounting entry.
    pub non_accounting_entry: Option<NonAccountingEntryRequest>,
}

/// Validation verdict.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// True when every rule passed.
    pub is_valid: bool,
    /// Human-readable reasons for rejection, empty when valid.
    pub conflicts: Vec<String>,
}

/// POST `/entries/validate` - Check a candidate without persisting it.
///
/// Rule violations come back as conflicts; a store failure stays an error
/// response and is never reported as "valid".
async fn validate_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<ValidationRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let owner = auth.user_id();

    let outcome = if let Some(time_entry) = body.time_entry {
        let draft = worklog_core::entry::TimeEntryDraft {
            date: time_entry.date,
            start_time: time_entry.start_time,
            end_time: time_entry.end_time,
            comment: time_entry.comment,
        };
        state
            .validation
            .validate_time_entry(owner, &draft, today(), None)
            .await
    } else if let Some(absence) = body.non_accounting_entry {
        let draft = worklog_core::entry::NonAccountingEntryDraft {
            start_date: absence.start_date,
            days: absence.days,
            kind: absence.kind,
            comment: absence.comment,
        };
        state
            .validation
            .validate_non_accounting_entry(owner, &draft, today(), None)
            .await
    } else {
        return Err(ApiError::bad_request(
            "either time_entry or non_accounting_entry is required",
        ));
    };

    match outcome {
        Ok(()) => Ok(Json(ValidationResponse {
            is_valid: true,
            conflicts: vec![],
        })),
        Err(err @ ValidationError::Store(_)) => Err(err.into()),
        Err(rejection) => Ok(Json(ValidationResponse {
            is_valid: false,
            conflicts: vec![rejection.to_string()],
        })),
    }
}
