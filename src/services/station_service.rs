//! Station registry - registration and credential issuance.
//!
//! # Process
//!
//! 1. Validate the display name
//! 2. Issue a fresh API key and bcrypt-hash it
//! 3. Insert the station inside a database transaction
//! 4. Return the plaintext key to the caller, exactly once

use crate::{
    db::DbPool,
    error::AppError,
    models::station::{CreateStationRequest, StationCreatedResponse},
    services::credentials,
};
use uuid::Uuid;

/// Register a new station and issue its one-time API key.
///
/// # Errors
///
/// - `Validation`: name absent or empty after trimming
/// - `Hash`: bcrypt failed while hashing the new key
/// - `Database`: insert failed; the transaction rolls back and no row persists
pub async fn create_station(
    pool: &DbPool,
    request: CreateStationRequest,
) -> Result<StationCreatedResponse, AppError> {
    let name = validate_name(request.name.as_deref())?;

    // Generate the key before touching the database; a failed insert must
    // not leave a half-issued credential behind.
    let api_key = credentials::issue_api_key();
    let api_key_hash = credentials::hash_api_key(&api_key)?;

    let station_id = Uuid::new_v4();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO stations (station_id, name, location_text, api_key_hash)
        VALUES ($1, $2, $3, $4)
        "#,
    )
    .bind(station_id)
    .bind(name)
    .bind(&request.location_text)
    .bind(&api_key_hash)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::info!(%station_id, "Station registered");

    Ok(StationCreatedResponse {
        message: "Station created successfully. Save your API key!".to_string(),
        station_id,
        api_key,
    })
}

/// Require a non-empty display name.
fn validate_name(name: Option<&str>) -> Result<&str, AppError> {
    match name.map(str::trim) {
        Some(trimmed) if !trimmed.is_empty() => Ok(trimmed),
        _ => Err(AppError::Validation(
            "Station name is required".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepts_and_trims_valid_name() {
        assert_eq!(validate_name(Some("  Rooftop North ")).unwrap(), "Rooftop North");
    }

    #[test]
    fn rejects_absent_name() {
        assert!(matches!(
            validate_name(None),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn rejects_empty_and_whitespace_names() {
        assert!(validate_name(Some("")).is_err());
        assert!(validate_name(Some("   ")).is_err());
    }
}
