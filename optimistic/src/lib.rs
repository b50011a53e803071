//! Optimistic concurrency control as a pluggable extension to drizzle-rs.
//!
//! For persisted records that designate a version attribute, this crate
//! guarantees that an `UPDATE` succeeds only if the row's version in storage
//! matches the version the caller last observed; otherwise the update is
//! rejected with [`error::ConflictError`] and optionally handed to a
//! caller-supplied reconciliation handler ([`resolve::Conflict`]). On
//! `INSERT`, the version attribute is seeded with an initial value drawn
//! from its semantic type's domain.
//!
//! SQL generation, dialect quoting, statement execution, transaction
//! management, connection pooling, and schema migration are the host ORM's
//! job; this crate only ever reads from or writes through the small
//! [`statement::Statement`] / [`statement::Session`] interfaces a host
//! integration implements.

pub mod diff;
pub mod error;
pub mod plugin;
pub mod resolve;
pub mod rewrite;
pub mod schema;
pub mod seed;
pub mod statement;
pub mod value;
pub mod verify;
pub mod version;

pub use diff::{diff, Diff, DiffEntry, Diffable};
pub use error::{ConflictError, OptimisticError};
pub use plugin::{OptimisticLock, OptimisticLockConfig};
pub use resolve::{Conflict, ResolveOutcome, Resolver};
pub use rewrite::Rewriter;
pub use schema::{FieldMeta, FieldType, Introspector, ModelSchema, VersionField, VersionedRecord};
pub use seed::{InsertContext, Seeder};
pub use statement::{AssignmentExpr, ScratchValue, Session, Statement, UpdateOutcome};
pub use value::Value;
pub use verify::Verifier;
pub use version::{Clock, SystemClock, TimestampPrecision, UlidGenerator, VersionKind, VersionValue};
