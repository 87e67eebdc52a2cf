//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes
//! - Authentication middleware
//! - Request/response types
//! - Error-to-HTTP mapping

pub mod error;
pub mod middleware;
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use worklog_core::calendar::HolidaySet;
use worklog_core::entry::EntryService;
use worklog_core::summary::SummaryService;
use worklog_core::validation::ValidationService;
use worklog_db::SeaOrmEntryStore;
use worklog_shared::JwtService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Entry mutations (validate-then-persist).
    pub entries: Arc<EntryService<SeaOrmEntryStore>>,
    /// Dry-run validation and vacation balance.
    pub validation: Arc<ValidationService<SeaOrmEntryStore>>,
    /// Monthly and yearly summaries.
    pub summaries: Arc<SummaryService<SeaOrmEntryStore>>,
    /// Holiday table, loaded once at startup.
    pub holidays: Arc<HolidaySet>,
}

impl AppState {
    /// Wires the services over one shared entry store.
    #[must_use]
    pub fn new(
        db: DatabaseConnection,
        jwt_service: JwtService,
        holidays: HolidaySet,
        store_timeout: Duration,
    ) -> Self {
        let store = Arc::new(SeaOrmEntryStore::new(db.clone(), store_timeout));
        Self {
            db: Arc::new(db),
            jwt_service: Arc::new(jwt_service),
            entries: Arc::new(EntryService::new(Arc::clone(&store))),
            validation: Arc::new(ValidationService::new(Arc::clone(&store))),
            summaries: Arc::new(SummaryService::new(store)),
            holidays: Arc::new(holidays),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
