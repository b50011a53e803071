//! Programmatic migration generation API.
//!
//! Diff two schema snapshots and get SQL statements — no file I/O, no CLI needed.
//!
//! # Example
//!
//! ```rust
//! use drizzle_migrations::{Snapshot, generate};
//!
//! let prev = Snapshot::empty(drizzle_types::Dialect::SQLite);
//! let current = Snapshot::empty(drizzle_types::Dialect::SQLite);
//! let statements = generate(&prev, &current).unwrap();
//! assert!(statements.is_empty());
//! ```

use crate::schema::Snapshot;
use crate::writer::MigrationError;

/// Diff two snapshots and return the migration SQL statements.
///
/// Both snapshots must be for the same dialect (e.g., both SQLite or both PostgreSQL).
/// Returns `Ok(vec![])` if no changes are detected.
///
/// This is a pure function — no file I/O, no side effects.
pub fn generate(prev: &Snapshot, current: &Snapshot) -> Result<Vec<String>, MigrationError> {
    match (prev, current) {
        (Snapshot::Sqlite(p), Snapshot::Sqlite(c)) => {
            let prev_ddl = crate::sqlite::collection::SQLiteDDL::from_entities(p.ddl.clone());
            let cur_ddl = crate::sqlite::collection::SQLiteDDL::from_entities(c.ddl.clone());
            let diff = crate::sqlite::diff::compute_migration(&prev_ddl, &cur_ddl);
            Ok(diff.sql_statements)
        }
        (Snapshot::Postgres(p), Snapshot::Postgres(c)) => {
            let diff = crate::postgres::diff::compute_migration_from_snapshots(p, c);
            Ok(diff.sql_statements)
        }
        _ => Err(MigrationError::DialectMismatch),
    }
}
