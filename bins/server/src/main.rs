//! Worklog API Server
//!
//! Main entry point for the Worklog backend service.

use std::time::Duration;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use worklog_api::{AppState, create_router};
use worklog_core::calendar::HolidaySet;
use worklog_db::{HolidayRepository, connect};
use worklog_shared::{AppConfig, JwtConfig, JwtService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "worklog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // The holiday fact table is read once at startup and injected into the
    // calendar utilities; rows added later need a restart to take effect.
    let holiday_rows = HolidayRepository::new(db.clone()).list_all().await?;
    let holidays: HolidaySet = holiday_rows.into_iter().map(|h| h.holiday_date).collect();
    info!(count = holidays.len(), "Loaded holiday table");

    // Create JWT service
    let jwt_config = JwtConfig {
        secret: config.jwt.secret.clone(),
        #[allow(clippy::cast_possible_wrap)]
        access_token_expires_minutes: (config.jwt.access_token_expiry_secs / 60) as i64,
    };
    let jwt_service = JwtService::new(jwt_config);

    // Create application state
    let state = AppState::new(
        db,
        jwt_service,
        holidays,
        Duration::from_millis(config.database.store_timeout_ms),
    );

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
