//! Summary routes: monthly detail, yearly summary, yearly totals.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use worklog_core::summary::{MonthDetail, MonthlySummary};

use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the summary routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/years/{year}", get(get_year_summary))
        .route("/years/{year}/totals", get(get_year_totals))
        .route("/years/{year}/months/{month}", get(get_month_detail))
}

/// GET `/years/{year}` - Twelve monthly summaries, keyed by month number.
async fn get_year_summary(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let summaries: BTreeMap<u32, MonthlySummary> =
        state.summaries.year_summary(auth.user_id(), year).await?;
    Ok(Json(summaries))
}

/// GET `/years/{year}/totals` - Field-wise totals across the year.
async fn get_year_totals(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let totals: MonthlySummary = state.summaries.year_totals(auth.user_id(), year).await?;
    Ok(Json(totals))
}

/// GET `/years/{year}/months/{month}` - Summary plus the raw entries.
async fn get_month_detail(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((year, month)): Path<(i32, u32)>,
) -> Result<impl IntoResponse, ApiError> {
    let detail: MonthDetail = state
        .summaries
        .month_detail(auth.user_id(), year, month)
        .await?;
    Ok(Json(detail))
}
