//! The hook seam (spec §9): since drizzle-rs's query builder has no runtime
//! before/after hook slots, the plugin defines its own minimal wrapping
//! builder that a host integration implements against the real
//! `drizzle_core::query::builder` types. The Rewriter and Verifier are
//! written entirely against this trait so they stay testable without a live
//! database (see `tests/scenarios.rs` for the in-memory fake).

use drizzle_core::dialect::Dialect;
use std::collections::HashMap;

use crate::value::Value;

/// One assignment's right-hand side. `Increment` expresses `col = col + 1`
/// as a column-referencing expression rather than a literal (spec §4.3 Step C).
#[derive(Debug, Clone, PartialEq)]
pub enum AssignmentExpr {
    Literal(Value),
    Increment,
}

/// Statement-local scratch values, keyed by the `"from-version"`/`"to-version"`
/// strings spec §5 names.
#[derive(Debug, Clone, PartialEq)]
pub enum ScratchValue {
    Version(crate::version::VersionValue),
    /// One entry per targeted model, in the same order passed to the
    /// Rewriter's batch entry point (spec §4.3 precondition 3's "non-empty
    /// ordered sequence" case).
    Versions(Vec<crate::version::VersionValue>),
}

/// The UPDATE statement under construction, as exposed to the Rewriter.
///
/// A host integration wraps its own update builder and implements this trait
/// by forwarding to the builder's `.set(...)`/`.where_(...)`/`.returning(...)`
/// calls, and backing the scratch map with the builder's own per-statement
/// context object.
pub trait Statement {
    fn dialect(&self) -> Dialect;

    fn is_dry_run(&self) -> bool;
    fn is_unscoped(&self) -> bool;

    /// `Some(entries)` if the caller supplied a map-form update (column name
    /// to value), as opposed to a struct-form update.
    fn map_form(&self) -> Option<&[(String, Value)]>;

    /// Struct-form selection state (spec §4.3 Step B). `selected` is the
    /// explicit column allowlist; `restricted` is true when the caller scoped
    /// the update to exactly that set.
    fn struct_selection(&self) -> (&[&'static str], bool);

    /// Column names already present as equality predicates in the statement's
    /// WHERE clause (dialect-normalized), for the PK tie-break in Step D.
    fn existing_predicate_columns(&self) -> &[String];

    fn add_assignment(&mut self, column: &'static str, expr: AssignmentExpr);
    fn add_where_eq(&mut self, column: &'static str, value: Value);

    /// Adds one OR'd group of AND'd equality predicates. Used by the
    /// Rewriter's multi-model batch entry point to target several rows with
    /// one statement (spec §4.3 precondition 3, Glossary "Targeted update").
    /// A single-model update never needs this: `add_where_eq` already ANDs
    /// its predicates into the statement's one WHERE clause.
    fn add_where_group(&mut self, predicates: Vec<(&'static str, Value)>);

    fn returning_requested(&self) -> bool;
    fn request_returning(&mut self);

    fn scratch(&mut self) -> &mut HashMap<String, ScratchValue>;
    fn scratch_snapshot(&self) -> &HashMap<String, ScratchValue>;

    /// Marks the statement as rewritten; returns `true` the first time it is
    /// called for a given statement, `false` on any re-entry (spec §4.3's
    /// idempotence sentinel).
    fn mark_rewritten(&mut self) -> bool;
}

/// MySQL is the one common dialect without `RETURNING` support (spec §4.3
/// Step E, §6 "Dialect probe").
pub fn dialect_supports_returning(dialect: Dialect) -> bool {
    !matches!(dialect, Dialect::MySQL)
}

/// The outcome of actually executing an UPDATE, as reported back by the ORM.
#[derive(Debug, Clone, Default)]
pub struct UpdateOutcome {
    pub affected: u64,
    /// The RETURNING rows' columns, one entry per matched row, in the same
    /// order as the targeted model(s); empty if RETURNING wasn't used or
    /// matched nothing.
    pub returned_rows: Vec<HashMap<String, Value>>,
}

/// A fresh, hook-skipping connection used by the Verifier's fallback reload
/// and the Resolver's reload/retry (spec §4.4 step 6, §4.5, §5).
pub trait Session {
    fn reload(
        &mut self,
        table: &str,
        primary_key: &[(&'static str, Value)],
    ) -> Result<Option<HashMap<String, Value>>, String>;

    fn update(
        &mut self,
        table: &str,
        primary_key: &[(&'static str, Value)],
        assignments: &[(&'static str, Value)],
    ) -> Result<UpdateOutcome, String>;
}
