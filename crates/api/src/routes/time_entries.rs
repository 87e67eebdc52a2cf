//! Time entry CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post, put},
};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use worklog_core::entry::{TimeEntry, TimeEntryDraft};
use worklog_shared::types::TimeEntryId;

use super::today;
use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the time entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries/time", post(create_time_entry))
        .route("/entries/time/{entry_id}", put(update_time_entry))
        .route("/entries/time/{entry_id}", delete(delete_time_entry))
}

/// Request body for creating or updating a time entry.
///
/// Month and year are derived from `date` server-side; they are not part
/// of the payload.
#[derive(Debug, Deserialize)]
pub struct TimeEntryRequest {
    /// Calendar date of the shift (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Start time of day (HH:MM:SS).
    pub start_time: NaiveTime,
    /// End time of day (HH:MM:SS).
    pub end_time: NaiveTime,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl TimeEntryRequest {
    fn into_draft(self) -> TimeEntryDraft {
        TimeEntryDraft {
            date: self.date,
            start_time: self.start_time,
            end_time: self.end_time,
            comment: self.comment,
        }
    }
}

/// Response for a time entry.
#[derive(Debug, Serialize)]
pub struct TimeEntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// Calendar date.
    pub date: NaiveDate,
    /// Start time of day.
    pub start_time: NaiveTime,
    /// End time of day.
    pub end_time: NaiveTime,
    /// Comment.
    pub comment: Option<String>,
    /// Month derived from the date.
    pub month: u32,
    /// Year derived from the date.
    pub year: i32,
}

impl From<TimeEntry> for TimeEntryResponse {
    fn from(entry: TimeEntry) -> Self {
        let (month, year) = (entry.month(), entry.year());
        Self {
            id: entry.id.into_inner(),
            date: entry.date,
            start_time: entry.start_time,
            end_time: entry.end_time,
            comment: entry.comment,
            month,
            year,
        }
    }
}

/// POST `/entries/time` - Validate and record a shift.
async fn create_time_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<TimeEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .entries
        .create_time_entry(auth.user_id(), body.into_draft(), today())
        .await?;

    info!(entry_id = %entry.id, owner = %entry.owner, "time entry created");
    Ok((StatusCode::CREATED, Json(TimeEntryResponse::from(entry))))
}

/// PUT `/entries/time/{entry_id}` - Validate and rewrite a shift.
async fn update_time_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<Uuid>,
    Json(body): Json<TimeEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .entries
        .update_time_entry(
            auth.user_id(),
            TimeEntryId::from_uuid(entry_id),
            body.into_draft(),
            today(),
        )
        .await?;

    Ok(Json(TimeEntryResponse::from(entry)))
}

/// DELETE `/entries/time/{entry_id}` - Remove a shift. No rule checks.
async fn delete_time_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .entries
        .delete_time_entry(auth.user_id(), TimeEntryId::from_uuid(entry_id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Entry deleted successfully" })))
}
