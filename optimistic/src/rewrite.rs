//! Update-phase Rewriter (spec §4.3) — the central component.

use tracing::debug;

use crate::schema::{Introspector, VersionedRecord};
use crate::statement::{AssignmentExpr, ScratchValue, Statement};
use crate::value::Value;
use crate::version::{Clock, UlidGenerator};

pub struct Rewriter<'a> {
    introspector: &'a Introspector,
    clock: &'a dyn Clock,
    ulid: &'a UlidGenerator,
    disable_returning: bool,
}

impl<'a> Rewriter<'a> {
    pub fn new(introspector: &'a Introspector, clock: &'a dyn Clock, ulid: &'a UlidGenerator) -> Self {
        Self { introspector, clock, ulid, disable_returning: false }
    }

    pub fn with_disable_returning(mut self, disable_returning: bool) -> Self {
        self.disable_returning = disable_returning;
        self
    }

    /// Before-update hook for a single targeted model. Returns `true` if the
    /// plugin contributed a version bump to the statement, `false` if it
    /// left the statement untouched (un-versioned model, mass update, no-op
    /// assignment set, dry-run, unscoped, or a repeat entry on an
    /// already-rewritten statement).
    pub fn before_update(&self, stmt: &mut dyn Statement, model: &dyn VersionedRecord) -> bool {
        self.before_update_many(stmt, &[model])
    }

    /// Before-update hook for a targeted update spanning a non-empty ordered
    /// sequence of models sharing one statement (spec §4.3 precondition 3,
    /// Glossary "Targeted update"). `before_update` is the `models.len() == 1`
    /// case of this.
    ///
    /// A single UPDATE statement has one SET clause applied to every matched
    /// row, so the non-version assignment values are taken from the first
    /// model and shared across the batch; only the WHERE-side predicates and
    /// (for `VersionKind::Int64`) the bump expression vary per row. For the
    /// other version kinds, one fresh value is generated once and shared
    /// across every row in the batch: conflict *detection* stays correct
    /// since each row's own WHERE predicate still pins its own previously
    /// observed version, but freshness-uniqueness is pooled within the batch
    /// rather than unique per row.
    pub fn before_update_many(&self, stmt: &mut dyn Statement, models: &[&dyn VersionedRecord]) -> bool {
        let Some((&first, _)) = models.split_first() else {
            return false;
        };
        // Precondition 1: not dry-run, not unscoped.
        if stmt.is_dry_run() || stmt.is_unscoped() {
            return false;
        }
        // Idempotence sentinel: a second entry on the same statement is a no-op.
        if !stmt.mark_rewritten() {
            return false;
        }
        // Precondition 2: a version field exists on the model schema.
        let Some(version) = self.introspector.discover(first.schema()) else {
            return false;
        };
        // Precondition 3: the update is targeted (spec I6) — every model in
        // the sequence must carry a non-zero primary key.
        if !models.iter().all(|m| m.has_nonzero_primary_key()) {
            return false;
        }

        // Step A: capture each model's observed version.
        let mut observed_values = Vec::with_capacity(models.len());
        for model in models {
            let Some(raw) = model.get_field(version.meta.column) else {
                return false;
            };
            let Some(observed) = crate::version::VersionValue::from_value(version.kind, &raw) else {
                return false;
            };
            observed_values.push(observed);
        }

        // Step B: compute the shared assignment set from the first model.
        let mut assignments: Vec<(&'static str, AssignmentExpr)> = Vec::new();
        if let Some(map) = stmt.map_form() {
            for (column, value) in map {
                if *column == version.meta.column {
                    continue;
                }
                if let Some(meta) = first
                    .schema()
                    .fields()
                    .iter()
                    .find(|f| f.column == column.as_str())
                {
                    if meta.updatable {
                        assignments.push((meta.column, AssignmentExpr::Literal(value.clone())));
                    }
                }
            }
        } else {
            let (selected, restricted) = stmt.struct_selection();
            for meta in first.schema().fields() {
                if meta.primary_key || meta.column == version.meta.column || !meta.updatable {
                    continue;
                }
                let is_selected = selected.contains(&meta.column);
                if restricted && !is_selected {
                    continue;
                }
                let Some(value) = first.get_field(meta.column) else { continue };
                if !restricted && value.is_zero() && !is_selected {
                    // "don't overwrite with zero by default" rule.
                    continue;
                }
                assignments.push((meta.column, AssignmentExpr::Literal(value)));
            }
        }

        if assignments.is_empty() {
            debug!("no non-version assignments; leaving statement untouched");
            return false;
        }

        // Step C: bump.
        let to_versions: Vec<crate::version::VersionValue> = match version.kind {
            crate::version::VersionKind::Int64 => observed_values
                .iter()
                .map(|&observed| version.kind.next(observed, self.clock, self.ulid))
                .collect(),
            _ => {
                let shared = version.kind.next(observed_values[0], self.clock, self.ulid);
                vec![shared; models.len()]
            }
        };
        let bump_expr = match version.kind {
            crate::version::VersionKind::Int64 => AssignmentExpr::Increment,
            _ => AssignmentExpr::Literal(Value::from(to_versions[0])),
        };
        assignments.push((version.meta.column, bump_expr));

        for (column, expr) in assignments {
            stmt.add_assignment(column, expr);
        }

        if models.len() == 1 {
            stmt.scratch()
                .insert("from-version".to_string(), ScratchValue::Version(observed_values[0]));
            stmt.scratch()
                .insert("to-version".to_string(), ScratchValue::Version(to_versions[0]));
        } else {
            stmt.scratch()
                .insert("from-version".to_string(), ScratchValue::Versions(observed_values.clone()));
            stmt.scratch()
                .insert("to-version".to_string(), ScratchValue::Versions(to_versions.clone()));
        }

        // Step D: inject WHERE.
        if models.len() == 1 {
            let model = models[0];
            let observed = observed_values[0];
            let existing: Vec<String> = stmt.existing_predicate_columns().to_vec();
            for (column, value) in model.primary_key() {
                if !existing.iter().any(|c| c == column) {
                    stmt.add_where_eq(column, value);
                }
            }
            stmt.add_where_eq(version.meta.column, Value::from(observed));
        } else {
            for (model, &observed) in models.iter().zip(observed_values.iter()) {
                let mut group = model.primary_key();
                group.push((version.meta.column, Value::from(observed)));
                stmt.add_where_group(group);
            }
        }

        // Step E: request RETURNING where supported.
        if !self.disable_returning
            && crate::statement::dialect_supports_returning(stmt.dialect())
            && !stmt.returning_requested()
        {
            stmt.request_returning();
        }

        debug!(
            column = version.meta.column,
            models = models.len(),
            "rewrote update with version bump"
        );
        true
    }
}
