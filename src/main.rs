//! Weather Station API - Main Application Entry Point
//!
//! This is a REST API server for registering weather stations, accepting authenticated temperature readings, and serving aggregate queries over a trailing time window.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries)
//! - **Authentication**: per-station API key, stored as a bcrypt hash
//! - **Format**: JSON requests/responses
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create database connection pool
//! 3. Run database migrations
//! 4. Build HTTP router
//! 5. Start server on configured port

mod config;
mod db;
mod error;
mod handlers;
mod models;
mod services;

use tracing_subscriber::EnvFilter;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with tracing subscriber. Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Load configuration
    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Create database pool
    let pool = db::create_pool(&config.database_url).await?;
    tracing::info!("Database pool created");

    // Run migrations
    db::run_migrations(&pool).await?;
    tracing::info!("Database migrations complete");

    // Build the router. Reading submission authenticates inside the handler
    // (the x-api-key check is ordered against body validation and the
    // station lookup); everything else is public.
    let app = Router::new()
        .route("/", get(handlers::health::index))
        .route("/health", get(handlers::health::health_check))
        .route("/stations", post(handlers::stations::create_station))
        .route("/readings", post(handlers::readings::submit_reading))
        .route(
            "/stations/{id}/readings",
            get(handlers::readings::list_readings),
        )
        .route(
            "/stations/{id}/summary",
            get(handlers::summary::get_summary),
        )
        // Add distributed tracing middleware for observability
        .layer(TraceLayer::new_for_http())
        // Share database pool with all handlers via State extraction
        .with_state(pool);

    // Bind to network address and start server
    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    // Start serving HTTP requests
    // This blocks forever, handling requests concurrently with tokio
    axum::serve(listener, app).await?;

    Ok(())
}
