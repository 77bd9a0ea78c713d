//! Reading ledger - append-only storage of temperature observations.
//!
//! Readings are written inside database transactions with a
//! database-assigned timestamp, and read back newest first. Nothing in the
//! API mutates a reading after it exists.

use crate::{db::DbPool, error::AppError, models::reading::Reading};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Stored temperatures carry exactly this many decimal places.
const TEMPERATURE_SCALE: u32 = 2;

/// Round an incoming temperature to the stored fixed-point scale.
///
/// The `NUMERIC` column is unconstrained, so this is the only thing
/// keeping stored values at 2 decimal places.
fn normalize_temperature(temperature: Decimal) -> Decimal {
    temperature.round_dp(TEMPERATURE_SCALE)
}

/// Append one reading for an already-authenticated station.
///
/// The temperature is rounded to 2 decimal places before binding, so the
/// unconstrained `NUMERIC` column only ever holds fixed-point values. The
/// timestamp is assigned by `now()` inside the database, never taken from
/// the client.
///
/// # Errors
///
/// `Database` on any insert failure; the transaction rolls back and no row
/// persists.
pub async fn submit_reading(
    pool: &DbPool,
    station_id: Uuid,
    temperature_celsius: Decimal,
) -> Result<Reading, AppError> {
    let temperature = normalize_temperature(temperature_celsius);

    let mut tx = pool.begin().await?;

    let reading = sqlx::query_as::<_, Reading>(
        r#"
        INSERT INTO readings (station_id, temperature_celsius)
        VALUES ($1, $2)
        RETURNING reading_id, station_id, temperature_celsius, "timestamp"
        "#,
    )
    .bind(station_id)
    .bind(temperature)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(reading)
}

/// Fetch all readings for a station, most recent first.
///
/// # Errors
///
/// `StationNotFound` if the station does not exist. An existing station
/// with no readings returns an empty list, not an error.
pub async fn list_readings(pool: &DbPool, station_id: Uuid) -> Result<Vec<Reading>, AppError> {
    ensure_station_exists(pool, station_id).await?;

    // Full scan of the station's readings; the API has no pagination.
    let readings = sqlx::query_as::<_, Reading>(
        r#"
        SELECT reading_id, station_id, temperature_celsius, "timestamp"
        FROM readings
        WHERE station_id = $1
        ORDER BY "timestamp" DESC, reading_id DESC
        "#,
    )
    .bind(station_id)
    .fetch_all(pool)
    .await?;

    Ok(readings)
}

/// Return `StationNotFound` unless the station id exists.
pub async fn ensure_station_exists(pool: &DbPool, station_id: Uuid) -> Result<(), AppError> {
    let exists: bool =
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM stations WHERE station_id = $1)")
            .bind(station_id)
            .fetch_one(pool)
            .await?;

    if exists {
        Ok(())
    } else {
        Err(AppError::StationNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn normalizes_high_precision_input_to_two_places() {
        assert_eq!(normalize_temperature(dec("21.7549")), dec("21.75"));
        assert_eq!(normalize_temperature(dec("21.7551")), dec("21.76"));
    }

    #[test]
    fn midpoints_round_to_even() {
        // round_dp ties to the even neighbor
        assert_eq!(normalize_temperature(dec("21.755")), dec("21.76"));
        assert_eq!(normalize_temperature(dec("-3.005")), dec("-3.00"));
    }

    #[test]
    fn leaves_fixed_point_input_unchanged() {
        assert_eq!(normalize_temperature(dec("21.75")), dec("21.75"));
        assert_eq!(normalize_temperature(dec("-40")), dec("-40"));
    }
}
