//! API route definitions.

use axum::{Router, middleware};
use chrono::NaiveDate;

use crate::{AppState, middleware::auth::auth_middleware};

/// Current date in the service's single implicit calendar.
pub(crate) fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

pub mod auth;
pub mod health;
pub mod holidays;
pub mod non_accounting_entries;
pub mod summaries;
pub mod time_entries;
pub mod user;
pub mod validation;

/// Creates the API router with protected routes that need state for middleware.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    // Protected routes that require authentication
    let protected_routes = Router::new()
        .merge(time_entries::routes())
        .merge(non_accounting_entries::routes())
        .merge(validation::routes())
        .merge(summaries::routes())
        .merge(holidays::routes())
        .merge(user::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    // Combine public and protected routes
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(protected_routes)
}
