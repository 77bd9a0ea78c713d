//! Station registration HTTP handler.
//!
//! This module implements:
//! - POST /stations - Register a new station and issue its API key

use crate::{
    db::DbPool,
    error::AppError,
    models::station::{CreateStationRequest, StationCreatedResponse},
    services::station_service,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

/// Register a new station.
///
/// # Endpoint
///
/// `POST /stations`
///
/// # Authentication
///
/// None. Registration is open; the issued key protects submission.
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Rooftop North",
///   "location_text": "Building 4, north mast"  // optional
/// }
/// ```
///
/// # Response
///
/// - **Success (201 Created)**: Returns the station id and the plaintext
///   API key. The key is shown exactly once and cannot be recovered later;
///   only its bcrypt hash is stored.
/// - **Error (400)**: Missing or empty name, or malformed JSON
/// - **Error (500)**: Database error
///
/// ```json
/// {
///   "message": "Station created successfully. Save your API key!",
///   "station_id": "550e8400-e29b-41d4-a716-446655440000",
///   "api_key": "9f3a...c1"
/// }
/// ```
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool (injected by Axum)
/// * `payload` - JSON body, with rejections mapped to 400 so every failure
///   carries the standard `{"error": ...}` shape
pub async fn create_station(
    State(pool): State<DbPool>,
    payload: Result<Json<CreateStationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<StationCreatedResponse>), AppError> {
    let Json(request) =
        payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;

    let response = station_service::create_station(&pool, request).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
