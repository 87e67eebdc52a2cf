//! Per-user derived values.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use worklog_core::validation::VacationBalance;

use super::today;
use crate::{AppState, error::ApiError, middleware::AuthUser};

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/user/vacation-balance", get(get_vacation_balance))
}

/// GET `/user/vacation-balance` - Remaining vacation days this year.
///
/// Always recomputed from the entry history; no counter is stored.
async fn get_vacation_balance(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<impl IntoResponse, ApiError> {
    let balance: VacationBalance = state
        .validation
        .vacation_balance(auth.user_id(), today())
        .await?;
    Ok(Json(balance))
}
