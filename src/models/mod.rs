//! Data models representing database entities.
//!
//! This module contains all data structures that map to database tables.

/// Temperature reading model and summary types
pub mod reading;
/// Weather station model
pub mod station;
