//! Aggregate summary HTTP handler.
//!
//! This module implements:
//! - GET /stations/{id}/summary - Count/avg/max/min over the trailing window

use crate::{
    db::DbPool,
    error::AppError,
    models::reading::SummaryResponse,
    services::summary_service,
};
use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

/// Summarize a station's readings over the last 24 hours.
///
/// # Endpoint
///
/// `GET /stations/{id}/summary`
///
/// # Response (200 OK)
///
/// Aggregates when the window contains readings:
///
/// ```json
/// {
///   "station_id": "550e8400-e29b-41d4-a716-446655440000",
///   "reading_count": 3,
///   "average_temp_last_24h": 20.0,
///   "max_temp_last_24h": 30.0,
///   "min_temp_last_24h": 10.0
/// }
/// ```
///
/// Otherwise the distinct no-data body (still 200; an empty window is not
/// an error and must not look like a zero-valued aggregate):
///
/// ```json
/// { "message": "No readings for this station in the last 24 hours." }
/// ```
///
/// # Errors
///
/// - 404 if the station does not exist
pub async fn get_summary(
    State(pool): State<DbPool>,
    Path(station_id): Path<Uuid>,
) -> Result<Json<SummaryResponse>, AppError> {
    let summary =
        summary_service::summarize(&pool, station_id, summary_service::DEFAULT_WINDOW_HOURS)
            .await?;

    Ok(Json(summary))
}
