//! Station data models and API request/response types.
//!
//! This module defines:
//! - `Station`: Database entity representing a weather station
//! - `CreateStationRequest`: Request body for registering stations
//! - `StationCreatedResponse`: Response body carrying the one-time API key

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a station record from the database.
///
/// # Database Table
///
/// Maps to the `stations` table. Each station:
/// - Is identified by a random UUID generated at registration
/// - Owns the readings submitted with its API key
///
/// # Credential Storage
///
/// The API key issued at registration is stored only as a bcrypt hash.
/// The hash embeds its own salt and cost factor, so two stations with the
/// same key material still store different hashes.
///
/// This struct deliberately does not derive `Serialize`: the stored hash
/// must never appear in a response body.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Station {
    /// Unique identifier for this station
    pub station_id: Uuid,

    /// Human-readable display name (required, non-empty)
    pub name: String,

    /// Optional free-text location description
    pub location_text: Option<String>,

    /// bcrypt hash of the station's API key (includes salt and cost)
    ///
    /// When a reading is submitted, the presented key is verified against
    /// this hash. The plaintext key is never persisted anywhere.
    pub api_key_hash: String,

    /// Timestamp when the station was registered
    pub created_at: DateTime<Utc>,
}

/// Request body for registering a new station.
///
/// # JSON Example
///
/// ```json
/// {
///   "name": "Rooftop North",
///   "location_text": "Building 4, north mast"
/// }
/// ```
///
/// # Validation
///
/// - `name`: Required, must be non-empty after trimming
/// - `location_text`: Optional free text
///
/// Both fields are declared optional so that a missing `name` surfaces as a
/// 400 validation error with a JSON body rather than a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct CreateStationRequest {
    /// Display name for the new station
    #[serde(default)]
    pub name: Option<String>,

    /// Optional location description
    #[serde(default)]
    pub location_text: Option<String>,
}

/// Response body for successful station registration.
///
/// This is the only place the plaintext API key ever appears. It cannot be
/// retrieved again through any endpoint; clients must save it.
///
/// # JSON Example
///
/// ```json
/// {
///   "message": "Station created successfully. Save your API key!",
///   "station_id": "550e8400-e29b-41d4-a716-446655440000",
///   "api_key": "9f3a...48 hex characters...c1"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct StationCreatedResponse {
    /// Reminder that the key is shown exactly once
    pub message: String,

    /// Identifier of the new station
    pub station_id: Uuid,

    /// Plaintext API key (24 random bytes, hex-encoded)
    pub api_key: String,
}
