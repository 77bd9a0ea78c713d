//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, URL params, etc.)
//! 2. Performs business logic (database queries, validation)
//! 3. Returns HTTP response (JSON, status code)

/// Status banner and health check endpoints
pub mod health;
/// Reading submission and listing endpoints
pub mod readings;
/// Station registration endpoint
pub mod stations;
/// Aggregate summary endpoint
pub mod summary;
