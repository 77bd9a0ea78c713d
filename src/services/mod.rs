//! Business logic services.
//!
//! Services contain core business logic separated from HTTP handlers.
//! They handle database transactions, validation, and credential checks.

pub mod credentials;
pub mod reading_service;
pub mod station_service;
pub mod summary_service;
