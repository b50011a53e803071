//! Driver-specific implementations
//!
//! This module contains driver-specific implementations for each supported database driver.
//! Each submodule provides CLI commands, introspection, and push functionality for its driver.

#[cfg(feature = "rusqlite")]
pub mod rusqlite;

#[cfg(feature = "libsql")]
pub mod libsql;

#[cfg(feature = "turso")]
pub mod turso;

#[cfg(feature = "tokio-postgres")]
pub mod tokio_postgres;

#[cfg(feature = "postgres-sync")]
pub mod postgres_sync;
