//! Non-accounting (absence) entry CRUD routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, post, put},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;
use worklog_core::entry::{AbsenceType, NonAccountingEntry, NonAccountingEntryDraft};
use worklog_shared::types::NonAccountingEntryId;

use super::today;
use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the non-accounting entry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/entries/non-accounting", post(create_entry))
        .route("/entries/non-accounting/{entry_id}", put(update_entry))
        .route("/entries/non-accounting/{entry_id}", delete(delete_entry))
}

/// Request body for creating or updating a non-accounting entry.
#[derive(Debug, Deserialize)]
pub struct NonAccountingEntryRequest {
    /// First day of the absence (YYYY-MM-DD).
    pub start_date: NaiveDate,
    /// Number of days covered.
    pub days: u32,
    /// Kind of absence.
    #[serde(rename = "type")]
    pub kind: AbsenceType,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

impl NonAccountingEntryRequest {
    fn into_draft(self) -> NonAccountingEntryDraft {
        NonAccountingEntryDraft {
            start_date: self.start_date,
            days: self.days,
            kind: self.kind,
            comment: self.comment,
        }
    }
}

/// Response for a non-accounting entry.
#[derive(Debug, Serialize)]
pub struct NonAccountingEntryResponse {
    /// Entry ID.
    pub id: Uuid,
    /// First day of the absence.
    pub start_date: NaiveDate,
    /// Last day of the absence (inclusive).
    pub end_date: NaiveDate,
    /// Number of days covered.
    pub days: u32,
    /// Kind of absence.
    #[serde(rename = "type")]
    pub kind: AbsenceType,
    /// Comment.
    pub comment: Option<String>,
}

impl From<NonAccountingEntry> for NonAccountingEntryResponse {
    fn from(entry: NonAccountingEntry) -> Self {
        let end_date = entry.end_date();
        Self {
            id: entry.id.into_inner(),
            start_date: entry.start_date,
            end_date,
            days: entry.days,
            kind: entry.kind,
            comment: entry.comment,
        }
    }
}

/// POST `/entries/non-accounting` - Validate and record an absence.
async fn create_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(body): Json<NonAccountingEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .entries
        .create_non_accounting_entry(auth.user_id(), body.into_draft(), today())
        .await?;

    info!(entry_id = %entry.id, owner = %entry.owner, kind = %entry.kind, "absence recorded");
    Ok((
        StatusCode::CREATED,
        Json(NonAccountingEntryResponse::from(entry)),
    ))
}

/// PUT `/entries/non-accounting/{entry_id}` - Validate and rewrite an absence.
async fn update_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<Uuid>,
    Json(body): Json<NonAccountingEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = state
        .entries
        .update_non_accounting_entry(
            auth.user_id(),
            NonAccountingEntryId::from_uuid(entry_id),
            body.into_draft(),
            today(),
        )
        .await?;

    Ok(Json(NonAccountingEntryResponse::from(entry)))
}

/// DELETE `/entries/non-accounting/{entry_id}` - Remove an absence. No rule
/// checks.
async fn delete_entry(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(entry_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    state
        .entries
        .delete_non_accounting_entry(auth.user_id(), NonAccountingEntryId::from_uuid(entry_id))
        .await?;

    Ok(Json(serde_json::json!({ "message": "Entry deleted successfully" })))
}
