//! Conflict Resolver (spec §4.5) and the public `Conflict` clause.

use tracing::{info, warn};

use crate::diff::{diff, Diff, Diffable};
use crate::error::OptimisticError;
use crate::schema::VersionedRecord;
use crate::statement::Session;
use crate::value::Value;

/// A caller-supplied resolver clause. `resolve` is called with the freshly
/// reloaded current row and the diff between it and the value the caller
/// tried to write; it returns `None` to cancel, `Some(current)` (by value
/// equality) to accept the current row as-is, or `Some(other)` to retry with
/// a merged value.
///
/// Multiple clauses compose associatively via [`Conflict::merge`]: the first
/// handler's output becomes the new "attempted" value for the second, each
/// re-diffed against the original current row (spec §4.5).
pub struct Conflict<T> {
    handlers: Vec<Box<dyn Fn(&T, &Diff) -> Option<T> + Send + Sync>>,
}

impl<T> Conflict<T> {
    pub fn new(handler: impl Fn(&T, &Diff) -> Option<T> + Send + Sync + 'static) -> Self {
        Self { handlers: vec![Box::new(handler)] }
    }

    pub fn merge(mut self, other: Conflict<T>) -> Self {
        self.handlers.extend(other.handlers);
        self
    }
}

impl<T: Diffable + Clone> Conflict<T> {
    /// Runs the handler chain. `current` is the freshly reloaded row;
    /// `attempted` is the value the caller originally tried to persist.
    fn resolve(&self, current: &T, attempted: &T) -> Option<T> {
        let mut effective_attempted = attempted.clone();
        for handler in &self.handlers {
            let d = diff(&effective_attempted, current);
            match handler(current, &d) {
                None => return None,
                Some(next) => effective_attempted = next,
            }
        }
        Some(effective_attempted)
    }
}

/// The resolver protocol's final disposition.
pub enum ResolveOutcome<T> {
    /// The conflict signal stands; nothing was written; the in-memory model
    /// is left untouched.
    Cancelled,
    /// The conflict signal stands; the in-memory model should be overwritten
    /// with `T` (the freshly reloaded row).
    AcceptedCurrent(T),
    /// The conflict signal is cleared; the in-memory model should be
    /// overwritten with `T` (the retried write's result).
    Retried(T),
    /// The retry itself failed (a session/driver error distinct from the
    /// original conflict, or the retry matched zero rows). Propagated rather
    /// than folded into `Cancelled` (spec §4.5 disposition 3).
    Failed(OptimisticError),
}

pub struct Resolver;

impl Resolver {
    /// Runs the resolver protocol (spec §4.5) for a model of type `T`, given
    /// the row the caller tried to write (`attempted`) and the handler
    /// chain. `T` must also implement [`VersionedRecord`] so the retry path
    /// can compute its non-PK, non-version assignment set.
    pub fn run<T, S>(
        session: &mut S,
        table: &str,
        primary_key: &[(&'static str, Value)],
        attempted: &T,
        clause: &Conflict<T>,
    ) -> ResolveOutcome<T>
    where
        T: Diffable + Clone + PartialEq + VersionedRecord,
        S: Session,
    {
        let reloaded = match session.reload(table, primary_key) {
            Ok(Some(row)) => row,
            // Internal errors during the reload are swallowed; the original
            // conflict signal is what the caller should see (spec §7).
            Ok(None) | Err(_) => return ResolveOutcome::Cancelled,
        };

        let current = match reconstruct(attempted, &reloaded) {
            Some(model) => model,
            None => return ResolveOutcome::Cancelled,
        };

        let Some(decided) = clause.resolve(&current, attempted) else {
            info!("resolver cancelled the conflicting update");
            return ResolveOutcome::Cancelled;
        };

        if decided == current {
            info!("resolver accepted the current persisted row");
            return ResolveOutcome::AcceptedCurrent(current);
        }

        let assignments: Vec<(&'static str, Value)> = decided
            .schema()
            .fields()
            .iter()
            .filter(|f| f.updatable && !f.primary_key)
            .filter_map(|f| decided.get_field(f.column).map(|v| (f.column, v)))
            .collect();

        match session.update(table, primary_key, &assignments) {
            Ok(outcome) if outcome.affected > 0 => {
                let mut retried = decided;
                if let Some(returned) = outcome.returned_rows.into_iter().next() {
                    for (column, value) in returned {
                        retried.set_field(&column, value);
                    }
                }
                info!("resolver retried the update against the merged value");
                ResolveOutcome::Retried(retried)
            }
            Ok(_) => {
                warn!("resolver's retry affected zero rows");
                ResolveOutcome::Failed(crate::error::ConflictError.into())
            }
            Err(message) => {
                warn!(error = %message, "resolver's retry failed");
                ResolveOutcome::Failed(OptimisticError::Session(message))
            }
        }
    }
}

/// Applies a reloaded row's columns onto a clone of `attempted`'s shape to
/// produce the "current" model the resolver sees. A real integration would
/// instead construct `T` via its `FromRow` impl; here, since `T` only
/// exposes `set_field`, cloning the attempted value's shape and overwriting
/// every column from the reload is equivalent.
fn reconstruct<T: Clone + VersionedRecord>(
    attempted: &T,
    reloaded: &std::collections::HashMap<String, Value>,
) -> Option<T> {
    let mut model = attempted.clone();
    for (column, value) in reloaded {
        model.set_field(column, value.clone());
    }
    Some(model)
}
