//! Error types and HTTP error response handling.
//!
//! This module defines all application errors and how they are converted
//! into HTTP responses with appropriate status codes and JSON bodies.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
///
/// This enum represents all possible errors that can occur in the application.
/// Each variant maps to a specific HTTP status code and error message.
///
/// # Error Categories
///
/// - **Database Errors**: Any sqlx::Error from database operations
/// - **Authentication Errors**: Missing or invalid API keys
/// - **Resource Errors**: Requested station not found
/// - **Validation Errors**: Missing or malformed request data
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (e.g., connection error, query error).
    ///
    /// This wraps any sqlx::Error using the `#[from]` attribute, which
    /// automatically implements `From<sqlx::Error> for AppError`.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// API key is missing from the request or does not match the
    /// station's stored hash.
    ///
    /// Returns HTTP 401 Unauthorized.
    #[error("Invalid or missing API key")]
    InvalidApiKey,

    /// Requested station does not exist.
    ///
    /// Returns HTTP 404 Not Found. Callers distinguish this from an
    /// authentication failure by the status code alone.
    #[error("Station not found")]
    StationNotFound,

    /// Request body or parameters are invalid.
    ///
    /// Returns HTTP 400 Bad Request.
    /// The String contains details about what was invalid.
    #[error("{0}")]
    Validation(String),

    /// bcrypt failed while hashing a newly issued API key.
    ///
    /// Returns HTTP 500 Internal Server Error. Verification failures never
    /// produce this variant; they surface as `InvalidApiKey`.
    #[error("Hashing error: {0}")]
    Hash(#[from] bcrypt::BcryptError),
}

/// Convert AppError into an HTTP response.
///
/// This implementation allows Axum handlers to return `Result<T, AppError>`
/// and have errors automatically converted to proper HTTP responses.
///
/// # Response Format
///
/// All errors return a flat JSON object with an `error` key:
/// ```json
/// { "error": "Station not found" }
/// ```
///
/// Store failures additionally carry a `details` field with the driver's
/// diagnostic message:
/// ```json
/// { "error": "Database operation failed", "details": "..." }
/// ```
///
/// # Status Code Mapping
///
/// - `Validation` → 400 Bad Request
/// - `InvalidApiKey` → 401 Unauthorized
/// - `StationNotFound` → 404 Not Found
/// - `Database` → 500 Internal Server Error
/// - `Hash` → 500 Internal Server Error (no details exposed)
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(ref msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            AppError::InvalidApiKey => {
                (StatusCode::UNAUTHORIZED, json!({ "error": self.to_string() }))
            }
            AppError::StationNotFound => {
                (StatusCode::NOT_FOUND, json!({ "error": self.to_string() }))
            }
            AppError::Database(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({
                    "error": "Database operation failed",
                    "details": err.to_string()
                }),
            ),
            AppError::Hash(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": "Internal server error" }),
            ),
        };

        // Return the response with status code and JSON body
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn validation_maps_to_400() {
        let response = AppError::Validation("Station name is required".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_api_key_maps_to_401() {
        let response = AppError::InvalidApiKey.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn station_not_found_maps_to_404() {
        let response = AppError::StationNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn database_error_maps_to_500() {
        let response = AppError::Database(sqlx::Error::PoolClosed).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
