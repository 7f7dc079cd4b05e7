//! Niyyah Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Niyyah: goal definitions,
//! the daily target calculator, idempotent task materialization, progress
//! aggregation, and carry-over. It is database-agnostic and defines traits
//! that are implemented by the `storage-sqlite` crate.

pub mod constants;
pub mod errors;
pub mod goals;
pub mod period;
pub mod progress;
pub mod tasks;
pub mod utils;

// Re-export the period type used by every date calculation
pub use period::{day_of_week, Period};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
