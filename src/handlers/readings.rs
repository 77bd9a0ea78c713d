//! Reading HTTP handlers.
//!
//! This module implements reading-related API endpoints:
//! - POST /readings - Submit an authenticated temperature reading
//! - GET /stations/{id}/readings - List a station's readings, newest first

use crate::{
    db::DbPool,
    error::AppError,
    models::reading::{ReadingCreatedResponse, ReadingResponse, SubmitReadingRequest},
    services::{credentials, reading_service},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Submit a temperature reading.
///
/// # Endpoint
///
/// `POST /readings`
///
/// # Authentication
///
/// The `x-api-key` header must carry the plaintext key issued when the
/// station was registered.
///
/// # Request Body
///
/// ```json
/// {
///   "station_id": "550e8400-e29b-41d4-a716-446655440000",
///   "temperature_celsius": 21.75
/// }
/// ```
///
/// # Order of Checks
///
/// 1. Missing `x-api-key` header → 401, before the body is inspected
/// 2. Missing `station_id` or `temperature_celsius` → 400
/// 3. Unknown station → 404, regardless of whether the key would verify
/// 4. Key does not match the station's stored hash → 401, nothing written
/// 5. Insert inside a transaction → 201
///
/// # Response (201 Created)
///
/// ```json
/// {
///   "message": "Reading submitted successfully",
///   "reading_id": 42
/// }
/// ```
///
/// # Arguments
///
/// * `State(pool)` - Database connection pool (injected by Axum)
/// * `headers` - Request headers, read before the body is touched
/// * `payload` - JSON body, with rejections mapped to 400
pub async fn submit_reading(
    State(pool): State<DbPool>,
    headers: HeaderMap,
    payload: Result<Json<SubmitReadingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ReadingCreatedResponse>), AppError> {
    // A missing key fails before the body is looked at
    let api_key = headers
        .get("x-api-key")
        .and_then(|value| value.to_str().ok())
        .ok_or(AppError::InvalidApiKey)?;

    let Json(request) = payload.map_err(|rejection| AppError::Validation(rejection.body_text()))?;
    let (station_id, temperature) = validate_fields(request)?;

    // Resolves 404 (unknown station) before 401 (bad key)
    credentials::authenticate(&pool, station_id, api_key).await?;

    let reading = reading_service::submit_reading(&pool, station_id, temperature).await?;

    tracing::info!(%station_id, reading_id = reading.reading_id, "Reading stored");

    Ok((
        StatusCode::CREATED,
        Json(ReadingCreatedResponse {
            message: "Reading submitted successfully".to_string(),
            reading_id: reading.reading_id,
        }),
    ))
}

/// Require both body fields to be present.
fn validate_fields(request: SubmitReadingRequest) -> Result<(Uuid, Decimal), AppError> {
    match (request.station_id, request.temperature_celsius) {
        (Some(station_id), Some(temperature)) => Ok((station_id, temperature)),
        _ => Err(AppError::Validation(
            "station_id and temperature_celsius are required".to_string(),
        )),
    }
}

/// List all readings for a station.
///
/// # Endpoint
///
/// `GET /stations/{id}/readings`
///
/// # Authentication
///
/// None. Readings are public; only submission requires the key.
///
/// # Response (200 OK)
///
/// Readings ordered newest first. An existing station with no readings
/// returns an empty array.
///
/// ```json
/// [
///   { "reading_id": 42, "temperature_celsius": 21.75, "timestamp": "2026-08-04T12:00:00Z" }
/// ]
/// ```
///
/// # Errors
///
/// - 404 if the station does not exist
pub async fn list_readings(
    State(pool): State<DbPool>,
    Path(station_id): Path<Uuid>,
) -> Result<Json<Vec<ReadingResponse>>, AppError> {
    let readings = reading_service::list_readings(&pool, station_id).await?;

    Ok(Json(readings.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn missing_station_id_is_rejected() {
        let request = SubmitReadingRequest {
            station_id: None,
            temperature_celsius: Some("21.75".parse().unwrap()),
        };

        assert!(matches!(
            validate_fields(request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn missing_temperature_is_rejected() {
        let request = SubmitReadingRequest {
            station_id: Some(Uuid::new_v4()),
            temperature_celsius: None,
        };

        assert!(matches!(
            validate_fields(request),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn complete_request_passes_validation() {
        let station_id = Uuid::new_v4();
        let request = SubmitReadingRequest {
            station_id: Some(station_id),
            temperature_celsius: Some("21.75".parse().unwrap()),
        };

        let (id, temperature) = validate_fields(request).unwrap();
        assert_eq!(id, station_id);
        assert_eq!(temperature, "21.75".parse().unwrap());
    }
}
