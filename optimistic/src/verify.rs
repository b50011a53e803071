//! Update-phase Verifier (spec §4.4).

use tracing::warn;

use crate::error::{ConflictError, OptimisticError};
use crate::schema::{Introspector, VersionedRecord};
use crate::statement::{ScratchValue, Session, Statement, UpdateOutcome};
use crate::version::VersionValue;

pub struct Verifier<'a> {
    introspector: &'a Introspector,
}

impl<'a> Verifier<'a> {
    pub fn new(introspector: &'a Introspector) -> Self {
        Self { introspector }
    }

    /// After-update hook for a single targeted model. On success, overwrites
    /// `model`'s in-memory version (and, when RETURNING wasn't used, every
    /// returned column) to reflect the persisted row.
    pub fn after_update(
        &self,
        stmt: &dyn Statement,
        outcome: &UpdateOutcome,
        model: &mut dyn VersionedRecord,
        fallback: &mut dyn Session,
        table: &str,
    ) -> Result<(), OptimisticError> {
        self.after_update_many(stmt, outcome, &mut [model], fallback, table)
    }

    /// After-update hook for a targeted update spanning a non-empty ordered
    /// sequence of models sharing one statement (spec §4.3 precondition 3,
    /// Glossary "Targeted update"). `after_update` is the `models.len() == 1`
    /// case of this.
    pub fn after_update_many(
        &self,
        stmt: &dyn Statement,
        outcome: &UpdateOutcome,
        models: &mut [&mut dyn VersionedRecord],
        fallback: &mut dyn Session,
        table: &str,
    ) -> Result<(), OptimisticError> {
        if stmt.is_dry_run() || stmt.is_unscoped() {
            return Ok(());
        }
        if models.is_empty() || !models.iter().all(|m| m.has_nonzero_primary_key()) {
            return Ok(());
        }

        let attempted_bump = scratch_to_version_for(stmt, 0).is_some();

        if (outcome.affected as usize) < models.len() {
            if !attempted_bump {
                // The Rewriter chose not to bump; nothing was attempted.
                return Ok(());
            }
            warn!("update affected fewer rows than targeted; raising conflict");
            return Err(ConflictError.into());
        }

        let Some(version) = self.introspector.discover(models[0].schema()) else {
            return Ok(());
        };

        if !outcome.returned_rows.is_empty() {
            for (index, (model, returned)) in
                models.iter_mut().zip(outcome.returned_rows.iter()).enumerate()
            {
                if let Some(to_version) = scratch_to_version_for(stmt, index) {
                    let observed = returned
                        .get(version.meta.column)
                        .and_then(|v| VersionValue::from_value(version.kind, v));
                    let matches = observed.is_some_and(|o| version.kind.eq(o, to_version));
                    if !matches {
                        warn!("returned version did not match expected next value");
                        return Err(ConflictError.into());
                    }
                }
                for (column, value) in returned {
                    model.set_field(column, value.clone());
                }
            }
            return Ok(());
        }

        // RETURNING wasn't used: fall back to a fresh per-model reload.
        for model in models.iter_mut() {
            let pk = model.primary_key();
            match fallback.reload(table, &pk) {
                Ok(Some(row)) => {
                    for (column, value) in row {
                        model.set_field(&column, value);
                    }
                }
                Ok(None) => return Err(ConflictError.into()),
                Err(message) => return Err(OptimisticError::Session(message)),
            }
        }
        Ok(())
    }
}

fn scratch_to_version_for(stmt: &dyn Statement, index: usize) -> Option<VersionValue> {
    match stmt.scratch_snapshot().get("to-version") {
        Some(ScratchValue::Version(v)) => Some(*v),
        Some(ScratchValue::Versions(vs)) => vs.get(index).copied(),
        None => None,
    }
}
