//! Status banner and health check endpoints for service monitoring.
//!
//! This module implements:
//! - GET / - Fixed banner confirming the API is up
//! - GET /health - Liveness plus database connectivity

use crate::{db::DbPool, error::AppError};
use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Fixed status banner returned from the root path.
#[derive(Debug, Serialize)]
pub struct StatusMessage {
    pub message: String,
}

/// Root handler.
///
/// `GET /` - confirms the API is up without touching the database.
pub async fn index() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: "Weather Station API is running!".to_string(),
    })
}

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall service status
    pub status: String,

    /// Database connection status
    pub database: String,

    /// Server timestamp at check time
    pub timestamp: DateTime<Utc>,
}

/// Health check handler.
///
/// # Endpoint
///
/// `GET /health`
///
/// Round-trips a trivial query so "healthy" means the pool can actually
/// reach PostgreSQL, not just that the process is alive.
///
/// # Response (200 OK)
///
/// ```json
/// {
///   "status": "healthy",
///   "database": "connected",
///   "timestamp": "2026-08-04T12:00:00Z"
/// }
/// ```
///
/// An unreachable database surfaces as the standard 500 error body.
pub async fn health_check(State(pool): State<DbPool>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query("SELECT 1").execute(&pool).await?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        timestamp: Utc::now(),
    }))
}
