//! Holiday table and calendar query routes.

use std::collections::BTreeMap;

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::get,
};
use chrono::NaiveDate;
use serde::Serialize;
use worklog_core::calendar::{HolidayCalendar, is_business_day};
use worklog_db::HolidayRepository;

use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the holiday routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/holidays/{year}", get(get_year_holidays))
        .route("/calendar/{date}", get(get_calendar_day))
}

/// GET `/holidays/{year}` - The year's holidays as an ISO-date-to-name map.
async fn get_year_holidays(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(year): Path<i32>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = HolidayRepository::new((*state.db).clone());
    let holidays = repo.list_for_year(year).await?;

    let by_date: BTreeMap<String, String> = holidays
        .into_iter()
        .map(|h| (h.holiday_date.to_string(), h.name))
        .collect();
    Ok(Json(by_date))
}

/// Calendar classification of a single day.
#[derive(Debug, Serialize)]
pub struct CalendarDayResponse {
    /// The queried date.
    pub date: NaiveDate,
    /// Weekday and not a holiday.
    pub business_day: bool,
    /// Present in the holiday table.
    pub holiday: bool,
}

/// GET `/calendar/{date}` - Whether a day counts as a business day.
///
/// Served from the holiday set loaded at startup.
async fn get_calendar_day(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(date): Path<NaiveDate>,
) -> impl IntoResponse {
    Json(CalendarDayResponse {
        date,
        business_day: is_business_day(date, state.holidays.as_ref()),
        holiday: state.holidays.is_holiday(date),
    })
}
