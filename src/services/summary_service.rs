//! Aggregation queries over a station's trailing time window.
//!
//! The aggregates run entirely inside PostgreSQL over the `NUMERIC`
//! temperature column, so count, average, max, and min stay exact
//! fixed-point values end to end. No float conversion happens before the
//! display rounding of the average.

use crate::{
    db::DbPool,
    error::AppError,
    models::reading::{StationSummary, SummaryResponse},
    services::reading_service,
};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Trailing window, in hours, when the caller does not specify one.
pub const DEFAULT_WINDOW_HOURS: i32 = 24;

/// Decimal places shown for the average temperature.
const DISPLAY_SCALE: u32 = 2;

/// Raw aggregate row. The `Option`s are NULL when no rows fall inside the
/// window; `reading_count` is 0 in that case.
#[derive(Debug, sqlx::FromRow)]
struct SummaryRow {
    reading_count: i64,
    avg_temp: Option<Decimal>,
    max_temp: Option<Decimal>,
    min_temp: Option<Decimal>,
}

/// Compute count/avg/max/min over the station's trailing window.
///
/// The window's lower bound is `now() - window_hours`, evaluated with the
/// database clock inside the query. Reading timestamps come from the same
/// clock, so the comparison is skew-free.
///
/// # Errors
///
/// `StationNotFound` if the station does not exist; `Database` on query
/// failure. An empty window is not an error: it yields the no-data body.
pub async fn summarize(
    pool: &DbPool,
    station_id: Uuid,
    window_hours: i32,
) -> Result<SummaryResponse, AppError> {
    reading_service::ensure_station_exists(pool, station_id).await?;

    let row = sqlx::query_as::<_, SummaryRow>(
        r#"
        SELECT COUNT(reading_id) AS reading_count,
               AVG(temperature_celsius) AS avg_temp,
               MAX(temperature_celsius) AS max_temp,
               MIN(temperature_celsius) AS min_temp
        FROM readings
        WHERE station_id = $1
          AND "timestamp" >= now() - make_interval(hours => $2)
        "#,
    )
    .bind(station_id)
    .bind(window_hours)
    .fetch_one(pool)
    .await?;

    Ok(build_summary(station_id, row))
}

/// Shape the raw aggregates into a response.
///
/// Zero readings produce the explicit no-data message, never a zero-valued
/// aggregate. The average is rounded to 2 decimal places; max and min keep
/// their stored precision.
fn build_summary(station_id: Uuid, row: SummaryRow) -> SummaryResponse {
    match (row.avg_temp, row.max_temp, row.min_temp) {
        (Some(avg), Some(max), Some(min)) if row.reading_count > 0 => {
            SummaryResponse::Window(StationSummary {
                station_id,
                reading_count: row.reading_count,
                average_temp_last_24h: avg.round_dp(DISPLAY_SCALE),
                max_temp_last_24h: max,
                min_temp_last_24h: min,
            })
        }
        _ => SummaryResponse::NoData {
            message: "No readings for this station in the last 24 hours.".to_string(),
        },
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
    fn summarizes_three_readings() {
        let row = SummaryRow {
            reading_count: 3,
            avg_temp: Some(dec("20.0000000000")),
            max_temp: Some(dec("30.00")),
            min_temp: Some(dec("10.00")),
        };

        match build_summary(Uuid::new_v4(), row) {
            SummaryResponse::Window(summary) => {
                assert_eq!(summary.reading_count, 3);
                assert_eq!(summary.average_temp_last_24h, dec("20.00"));
                assert_eq!(summary.max_temp_last_24h, dec("30.00"));
                assert_eq!(summary.min_temp_last_24h, dec("10.00"));
            }
            SummaryResponse::NoData { .. } => panic!("expected aggregates"),
        }
    }

    #[test]
    fn rounds_high_precision_average_to_two_places() {
        // AVG over NUMERIC comes back at high scale, e.g. 5/3 degrees
        let row = SummaryRow {
            reading_count: 3,
            avg_temp: Some(dec("1.6666666666666667")),
            max_temp: Some(dec("2.00")),
            min_temp: Some(dec("1.00")),
        };

        match build_summary(Uuid::new_v4(), row) {
            SummaryResponse::Window(summary) => {
                assert_eq!(summary.average_temp_last_24h, dec("1.67"));
            }
            SummaryResponse::NoData { .. } => panic!("expected aggregates"),
        }
    }

    #[test]
    fn empty_window_yields_no_data_message() {
        let row = SummaryRow {
            reading_count: 0,
            avg_temp: None,
            max_temp: None,
            min_temp: None,
        };

        match build_summary(Uuid::new_v4(), row) {
            SummaryResponse::NoData { message } => {
                assert_eq!(message, "No readings for this station in the last 24 hours.");
            }
            SummaryResponse::Window(_) => panic!("expected no-data message"),
        }
    }
}
