//! SQLite storage implementation for Niyyah.
//!
//! This crate provides all database-related functionality using Diesel ORM
//! with SQLite. It implements the repository traits defined in `niyyah-core`
//! and contains:
//! - Database connection pooling and management
//! - Diesel migrations
//! - Repository implementations for goals and daily tasks
//! - Database-specific model types (with Diesel derives)
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist; `core` is database-agnostic and works with traits.
//!
//! The `daily_tasks` table carries a partial unique index on
//! `(goal_id, date)` for organically generated rows. The generator's
//! read-then-insert cycle is not a storage transaction, so two concurrent
//! sessions can both decide a pair is missing; the index is the backstop
//! that keeps the second insert from duplicating the pair. Carried-over
//! rows are exempt so a deferred task can land on a date that already has
//! an organic one.

pub mod db;
pub mod errors;
pub mod schema;

// Repository implementations
pub mod goals;
pub mod tasks;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, run_migrations, spawn_writer, DbConnection, DbPool,
    WriteHandle,
};

// Re-export storage errors
pub use errors::StorageError;

// Re-export from niyyah-core for convenience
pub use niyyah_core::errors::{DatabaseError, Error, Result};
