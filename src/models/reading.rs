//! Reading data models and API request/response types.
//!
//! This module defines:
//! - `Reading`: Database entity representing one temperature observation
//! - `SubmitReadingRequest`: Request body for authenticated submission
//! - `ReadingResponse` / `ReadingCreatedResponse`: Response bodies
//! - `StationSummary` / `SummaryResponse`: Aggregate query results

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a reading record from the database.
///
/// # Database Table
///
/// Maps to the `readings` table. Each reading:
/// - Belongs to exactly one station (enforced by a foreign key)
/// - Stores the temperature as `NUMERIC`, decoded as `Decimal` (never a float)
/// - Carries a timestamp assigned by the database at insert time
///
/// Readings are immutable once created; no update or delete path exists.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reading {
    /// Auto-incrementing identifier
    pub reading_id: i64,

    /// Station that submitted this reading
    pub station_id: Uuid,

    /// Temperature in degrees Celsius, fixed-point with 2 decimal places
    pub temperature_celsius: Decimal,

    /// Ingestion time, assigned by the database clock (never client-supplied)
    pub timestamp: DateTime<Utc>,
}

/// Request body for submitting a reading.
///
/// # JSON Example
///
/// ```json
/// {
///   "station_id": "550e8400-e29b-41d4-a716-446655440000",
///   "temperature_celsius": 21.75
/// }
/// ```
///
/// Both fields are declared optional so that a missing field surfaces as a
/// 400 validation error with a JSON body. The temperature arrives as a JSON
/// number and is parsed into a `Decimal` at the boundary; it is rounded to
/// 2 decimal places before storage.
#[derive(Debug, Deserialize)]
pub struct SubmitReadingRequest {
    /// Station the reading belongs to
    #[serde(default)]
    pub station_id: Option<Uuid>,

    /// Observed temperature in degrees Celsius
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub temperature_celsius: Option<Decimal>,
}

/// Response body for successful reading submission.
#[derive(Debug, Serialize)]
pub struct ReadingCreatedResponse {
    pub message: String,

    /// Identifier of the stored reading
    pub reading_id: i64,
}

/// One reading as returned by the readings list endpoint.
///
/// # JSON Example
///
/// ```json
/// {
///   "reading_id": 42,
///   "temperature_celsius": 21.75,
///   "timestamp": "2026-08-04T12:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ReadingResponse {
    pub reading_id: i64,

    /// Serialized as a plain JSON number
    #[serde(with = "rust_decimal::serde::float")]
    pub temperature_celsius: Decimal,

    pub timestamp: DateTime<Utc>,
}

/// Convert database Reading to API ReadingResponse.
///
/// This transformation drops the `station_id` field, which is already part
/// of the request path.
impl From<Reading> for ReadingResponse {
    fn from(reading: Reading) -> Self {
        Self {
            reading_id: reading.reading_id,
            temperature_celsius: reading.temperature_celsius,
            timestamp: reading.timestamp,
        }
    }
}

/// Aggregate statistics over a station's trailing time window.
///
/// # JSON Example
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
#[derive(Debug, Serialize)]
pub struct StationSummary {
    pub station_id: Uuid,

    /// Number of readings inside the window
    pub reading_count: i64,

    /// Average temperature, rounded to 2 decimal places for display
    #[serde(with = "rust_decimal::serde::float")]
    pub average_temp_last_24h: Decimal,

    /// Maximum temperature at stored precision
    #[serde(with = "rust_decimal::serde::float")]
    pub max_temp_last_24h: Decimal,

    /// Minimum temperature at stored precision
    #[serde(with = "rust_decimal::serde::float")]
    pub min_temp_last_24h: Decimal,
}

/// Summary endpoint response.
///
/// A window with zero readings produces the `NoData` message body, which is
/// distinct from any zero-valued aggregate.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SummaryResponse {
    /// Aggregates over a non-empty window
    Window(StationSummary),

    /// No readings fell inside the window
    NoData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn submit_request_tolerates_missing_fields() {
        let request: SubmitReadingRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request.station_id, None);
        assert_eq!(request.temperature_celsius, None);
    }

    #[test]
    fn submit_request_parses_numeric_temperature() {
        let request: SubmitReadingRequest =
            serde_json::from_str(r#"{"temperature_celsius": 21.75}"#).unwrap();
        assert_eq!(
            request.temperature_celsius,
            Some("21.75".parse::<Decimal>().unwrap())
        );

        // Integers are numeric too
        let request: SubmitReadingRequest =
            serde_json::from_str(r#"{"temperature_celsius": -3}"#).unwrap();
        assert_eq!(
            request.temperature_celsius,
            Some("-3".parse::<Decimal>().unwrap())
        );
    }

    #[test]
    fn submit_request_rejects_non_numeric_temperature() {
        let result =
            serde_json::from_str::<SubmitReadingRequest>(r#"{"temperature_celsius": "warm"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn reading_response_serializes_temperature_as_number() {
        let response = ReadingResponse {
            reading_id: 7,
            temperature_celsius: "21.75".parse().unwrap(),
            timestamp: DateTime::parse_from_rfc3339("2026-08-04T12:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["reading_id"], serde_json::json!(7));
        assert_eq!(value["temperature_celsius"], serde_json::json!(21.75));
    }

    #[test]
    fn no_data_summary_serializes_to_message_object() {
        let response = SummaryResponse::NoData {
            message: "No readings for this station in the last 24 hours.".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "No readings for this station in the last 24 hours."
            })
        );
    }
}
