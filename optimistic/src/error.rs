//! Error types for the optimistic-concurrency plugin.

use thiserror::Error;

/// The sentinel raised whenever an optimistic-lock invariant is violated.
///
/// Callers test for this by identity (`matches!(err, OptimisticError::Conflict)`),
/// per the spec's "Error surface": one error kind, added to the statement's
/// error chain rather than thrown.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("optimistic-lock conflict")]
pub struct ConflictError;

/// Crate-wide error type. Wraps [`ConflictError`] plus the lower-level failures
/// that can occur while the plugin talks to the host session (reloads, retries).
#[derive(Debug, Error)]
pub enum OptimisticError {
    /// A targeted update's affected-row count was zero, or its returned version
    /// did not match the computed next value, or the resolver cancelled /
    /// accepted-current.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// The session reported an error unrelated to version mismatch (driver
    /// error, connection failure, etc). Carries the host's own error message
    /// since the plugin does not know the driver's concrete error type.
    #[error("session error: {0}")]
    Session(String),

    /// A create's seeded version attribute did not persist.
    #[error("create did not persist a version attribute")]
    SeedNotPersisted,
}

impl OptimisticError {
    /// True if this is the distinguished conflict sentinel.
    pub fn is_conflict(&self) -> bool {
        matches!(self, OptimisticError::Conflict(_))
    }
}

pub type Result<T> = core::result::Result<T, OptimisticError>;
