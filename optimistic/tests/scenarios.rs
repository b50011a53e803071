//! End-to-end scenarios from the spec (§8), driven against an in-memory fake
//! session/statement pair instead of a live database.

use std::collections::HashMap;

use drizzle_core::dialect::Dialect;
use drizzle_optimistic::{
    diff, AssignmentExpr, Diffable, FieldMeta, FieldType, ModelSchema, OptimisticError,
    OptimisticLock, ResolveOutcome, Resolver, ScratchValue, Session, Statement, UpdateOutcome,
    Value, VersionedRecord,
};

// ---------------------------------------------------------------------
// A minimal "widget" model, versioned by a monotonic integer.
// ---------------------------------------------------------------------

struct WidgetSchema;

const WIDGET_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "id",
        column: "id",
        field_type: FieldType::Other,
        type_name: "u64",
        tags: &[],
        primary_key: true,
        updatable: false,
    },
    FieldMeta {
        name: "description",
        column: "description",
        field_type: FieldType::Other,
        type_name: "String",
        tags: &[],
        primary_key: false,
        updatable: true,
    },
    FieldMeta {
        name: "enabled",
        column: "enabled",
        field_type: FieldType::Other,
        type_name: "bool",
        tags: &[],
        primary_key: false,
        updatable: true,
    },
    FieldMeta {
        name: "version",
        column: "version",
        field_type: FieldType::Integer,
        type_name: "u64",
        tags: &["version"],
        primary_key: false,
        updatable: false,
    },
];

impl ModelSchema for WidgetSchema {
    fn table_name(&self) -> &'static str {
        "widgets"
    }
    fn fields(&self) -> &'static [FieldMeta] {
        WIDGET_FIELDS
    }
}

static WIDGET_SCHEMA: WidgetSchema = WidgetSchema;

#[derive(Debug, Clone, PartialEq)]
struct Widget {
    id: u64,
    description: String,
    enabled: bool,
    version: u64,
}

impl VersionedRecord for Widget {
    fn schema(&self) -> &dyn ModelSchema {
        &WIDGET_SCHEMA
    }

    fn primary_key(&self) -> Vec<(&'static str, Value)> {
        vec![("id", Value::UInt(self.id))]
    }

    fn get_field(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::UInt(self.id)),
            "description" => Some(Value::Text(self.description.clone())),
            "enabled" => Some(Value::Bool(self.enabled)),
            "version" => Some(Value::UInt(self.version)),
            _ => None,
        }
    }

    fn set_field(&mut self, column: &str, value: Value) {
        match (column, value) {
            ("id", Value::UInt(v)) => self.id = v,
            ("description", Value::Text(v)) => self.description = v,
            ("enabled", Value::Bool(v)) => self.enabled = v,
            ("version", Value::UInt(v)) => self.version = v,
            _ => {}
        }
    }
}

impl Diffable for Widget {
    fn diff_leaf_fields(&self) -> &'static [&'static str] {
        &["description", "enabled", "version"]
    }

    fn diff_leaf_value(&self, field: &str) -> Value {
        self.get_field(field).unwrap_or(Value::Null)
    }
}

// A second model, versioned by UUID, to exercise scenario 3.
struct GadgetSchema;

const GADGET_FIELDS: &[FieldMeta] = &[
    FieldMeta {
        name: "id",
        column: "id",
        field_type: FieldType::Other,
        type_name: "u64",
        tags: &[],
        primary_key: true,
        updatable: false,
    },
    FieldMeta {
        name: "label",
        column: "label",
        field_type: FieldType::Other,
        type_name: "String",
        tags: &[],
        primary_key: false,
        updatable: true,
    },
    FieldMeta {
        name: "version",
        column: "version",
        field_type: FieldType::Opaque16,
        type_name: "[u8; 16]",
        tags: &["version:uuid"],
        primary_key: false,
        updatable: false,
    },
];

impl ModelSchema for GadgetSchema {
    fn table_name(&self) -> &'static str {
        "gadgets"
    }
    fn fields(&self) -> &'static [FieldMeta] {
        GADGET_FIELDS
    }
}

static GADGET_SCHEMA: GadgetSchema = GadgetSchema;

#[derive(Debug, Clone)]
struct Gadget {
    id: u64,
    label: String,
    version: [u8; 16],
}

impl VersionedRecord for Gadget {
    fn schema(&self) -> &dyn ModelSchema {
        &GADGET_SCHEMA
    }
    fn primary_key(&self) -> Vec<(&'static str, Value)> {
        vec![("id", Value::UInt(self.id))]
    }
    fn get_field(&self, column: &str) -> Option<Value> {
        match column {
            "id" => Some(Value::UInt(self.id)),
            "label" => Some(Value::Text(self.label.clone())),
            "version" => Some(Value::Bytes(self.version.to_vec())),
            _ => None,
        }
    }
    fn set_field(&mut self, column: &str, value: Value) {
        match (column, value) {
            ("label", Value::Text(v)) => self.label = v,
            ("version", Value::Bytes(b)) => self.version.copy_from_slice(&b),
            _ => {}
        }
    }
}

// ---------------------------------------------------------------------
// Fake Statement + Session: a wrapping builder and an in-memory row store.
// ---------------------------------------------------------------------

#[derive(Default)]
struct FakeStatement {
    dialect: Dialect,
    dry_run: bool,
    unscoped: bool,
    map_form: Option<Vec<(String, Value)>>,
    selected: Vec<&'static str>,
    restricted: bool,
    existing_predicates: Vec<String>,
    assignments: Vec<(&'static str, AssignmentExpr)>,
    where_eqs: Vec<(&'static str, Value)>,
    where_groups: Vec<Vec<(&'static str, Value)>>,
    returning_requested: bool,
    scratch: HashMap<String, ScratchValue>,
    rewritten: bool,
}

impl Statement for FakeStatement {
    fn dialect(&self) -> Dialect {
        self.dialect
    }
    fn is_dry_run(&self) -> bool {
        self.dry_run
    }
    fn is_unscoped(&self) -> bool {
        self.unscoped
    }
    fn map_form(&self) -> Option<&[(String, Value)]> {
        self.map_form.as_deref()
    }
    fn struct_selection(&self) -> (&[&'static str], bool) {
        (&self.selected, self.restricted)
    }
    fn existing_predicate_columns(&self) -> &[String] {
        &self.existing_predicates
    }
    fn add_assignment(&mut self, column: &'static str, expr: AssignmentExpr) {
        self.assignments.push((column, expr));
    }
    fn add_where_eq(&mut self, column: &'static str, value: Value) {
        self.where_eqs.push((column, value));
    }
    fn add_where_group(&mut self, predicates: Vec<(&'static str, Value)>) {
        self.where_groups.push(predicates);
    }
    fn returning_requested(&self) -> bool {
        self.returning_requested
    }
    fn request_returning(&mut self) {
        self.returning_requested = true;
    }
    fn scratch(&mut self) -> &mut HashMap<String, ScratchValue> {
        &mut self.scratch
    }
    fn scratch_snapshot(&self) -> &HashMap<String, ScratchValue> {
        &self.scratch
    }
    fn mark_rewritten(&mut self) -> bool {
        if self.rewritten {
            false
        } else {
            self.rewritten = true;
            true
        }
    }
}

/// An in-memory row store standing in for the database. `execute` simulates
/// what a real dialect driver does with the statement the Rewriter built:
/// it checks every WHERE-equality predicate against the stored row, and only
/// applies the assignments (including the `Increment` expression) if all of
/// them match.
struct FakeDb {
    rows: HashMap<u64, HashMap<String, Value>>,
}

impl FakeDb {
    fn new() -> Self {
        Self { rows: HashMap::new() }
    }

    fn insert(&mut self, id: u64, row: HashMap<String, Value>) {
        self.rows.insert(id, row);
    }

    fn execute(&mut self, stmt: &FakeStatement) -> UpdateOutcome {
        if !stmt.where_groups.is_empty() {
            return self.execute_groups(stmt);
        }
        let Some((_, Value::UInt(id))) = stmt.where_eqs.iter().find(|(c, _)| *c == "id") else {
            // Mass update: no PK predicate. The fake DB just reports "applied
            // to everything", mirroring the core's refusal to touch it.
            return UpdateOutcome { affected: self.rows.len() as u64, returned_rows: vec![] };
        };
        let Some(row) = self.rows.get(id) else {
            return UpdateOutcome { affected: 0, returned_rows: vec![] };
        };
        for (column, expected) in &stmt.where_eqs {
            if row.get(*column) != Some(expected) {
                return UpdateOutcome { affected: 0, returned_rows: vec![] };
            }
        }
        let row = self.rows.get_mut(id).unwrap();
        apply_assignments(row, &stmt.assignments);
        let returned_rows = if stmt.returning_requested { vec![row.clone()] } else { vec![] };
        UpdateOutcome { affected: 1, returned_rows }
    }

    /// Each group is one OR'd, AND'd-within-itself predicate set (spec §4.3
    /// precondition 3's batch form). Every row matching its own group gets
    /// the statement's shared assignment set applied.
    fn execute_groups(&mut self, stmt: &FakeStatement) -> UpdateOutcome {
        let mut affected: u64 = 0;
        let mut returned_rows = Vec::new();
        for group in &stmt.where_groups {
            let Some((_, Value::UInt(id))) = group.iter().find(|(c, _)| *c == "id") else {
                continue;
            };
            let id = *id;
            let matches = self
                .rows
                .get(&id)
                .is_some_and(|row| group.iter().all(|(c, v)| row.get(*c) == Some(v)));
            if !matches {
                continue;
            }
            let row = self.rows.get_mut(&id).unwrap();
            apply_assignments(row, &stmt.assignments);
            affected += 1;
            if stmt.returning_requested {
                returned_rows.push(row.clone());
            }
        }
        UpdateOutcome { affected, returned_rows }
    }
}

fn apply_assignments(row: &mut HashMap<String, Value>, assignments: &[(&'static str, AssignmentExpr)]) {
    for (column, expr) in assignments {
        match expr {
            AssignmentExpr::Literal(v) => {
                row.insert(column.to_string(), v.clone());
            }
            AssignmentExpr::Increment => {
                let next = match row.get(*column) {
                    Some(Value::UInt(n)) => Value::UInt(n + 1),
                    _ => Value::UInt(1),
                };
                row.insert(column.to_string(), next);
            }
        }
    }
}

impl Session for FakeDb {
    fn reload(
        &mut self,
        _table: &str,
        primary_key: &[(&'static str, Value)],
    ) -> Result<Option<HashMap<String, Value>>, String> {
        let Some((_, Value::UInt(id))) = primary_key.iter().find(|(c, _)| *c == "id") else {
            return Ok(None);
        };
        Ok(self.rows.get(id).cloned())
    }

    fn update(
        &mut self,
        _table: &str,
        primary_key: &[(&'static str, Value)],
        assignments: &[(&'static str, Value)],
    ) -> Result<UpdateOutcome, String> {
        let Some((_, Value::UInt(id))) = primary_key.iter().find(|(c, _)| *c == "id") else {
            return Ok(UpdateOutcome { affected: 0, returned_rows: vec![] });
        };
        let Some(row) = self.rows.get_mut(id) else {
            return Ok(UpdateOutcome { affected: 0, returned_rows: vec![] });
        };
        // A fresh session bumps the version itself (spec §5: the retry
        // re-reads the current version rather than being version-gated).
        let next_version = match row.get("version") {
            Some(Value::UInt(n)) => n + 1,
            _ => 1,
        };
        for (column, value) in assignments {
            row.insert(column.to_string(), value.clone());
        }
        row.insert("version".to_string(), Value::UInt(next_version));
        Ok(UpdateOutcome { affected: 1, returned_rows: vec![row.clone()] })
    }
}

fn widget_row(w: &Widget) -> HashMap<String, Value> {
    let mut row = HashMap::new();
    row.insert("id".to_string(), Value::UInt(w.id));
    row.insert("description".to_string(), Value::Text(w.description.clone()));
    row.insert("enabled".to_string(), Value::Bool(w.enabled));
    row.insert("version".to_string(), Value::UInt(w.version));
    row
}

// ---------------------------------------------------------------------
// Scenario 1: create-then-update with integer version.
// ---------------------------------------------------------------------

#[test]
fn scenario_1_create_then_update() {
    let plugin = OptimisticLock::default();
    let mut widget = Widget { id: 0, description: "foo".to_string(), enabled: true, version: 0 };

    // Create.
    let mut record: &mut dyn VersionedRecord = &mut widget;
    plugin.seeder().before_insert(&AlwaysLive, std::slice::from_mut(&mut record));
    assert_eq!(widget.version, 1);

    widget.id = 1;
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&widget));

    // Update.
    widget.description = "bar".to_string();
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    let rewrote = plugin.rewriter().before_update(&mut stmt, &widget);
    assert!(rewrote);

    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 1);

    plugin
        .verifier()
        .after_update(&stmt, &outcome, &mut widget, &mut db, "widgets")
        .expect("update should succeed");

    assert_eq!(widget.version, 2);
    assert_eq!(widget.description, "bar");
}

// ---------------------------------------------------------------------
// Scenario 2: stale update raises conflict.
// ---------------------------------------------------------------------

#[test]
fn scenario_2_stale_update_conflicts() {
    let plugin = OptimisticLock::default();
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&Widget { id: 1, description: "bar".to_string(), enabled: true, version: 2 }));

    let mut stale = Widget { id: 1, description: "qux".to_string(), enabled: true, version: 1 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    assert!(plugin.rewriter().before_update(&mut stmt, &stale));

    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 0);

    let err = plugin
        .verifier()
        .after_update(&stmt, &outcome, &mut stale, &mut db, "widgets")
        .unwrap_err();
    assert!(matches!(err, OptimisticError::Conflict(_)));

    // In-memory copy is unchanged.
    assert_eq!(stale.version, 1);
    assert_eq!(stale.description, "qux");
}

// ---------------------------------------------------------------------
// Scenario 3: UUID version rotates.
// ---------------------------------------------------------------------

#[test]
fn scenario_3_uuid_version_rotates() {
    let plugin = OptimisticLock::default();
    let mut gadget = Gadget { id: 0, label: "v1".to_string(), version: [0u8; 16] };
    let mut record: &mut dyn VersionedRecord = &mut gadget;
    plugin.seeder().before_insert(&AlwaysLive, std::slice::from_mut(&mut record));
    assert_ne!(gadget.version, [0u8; 16]);

    let initial_version = gadget.version;
    gadget.id = 1;

    let mut db = FakeDb::new();
    let mut row = HashMap::new();
    row.insert("id".to_string(), Value::UInt(1));
    row.insert("label".to_string(), Value::Text("v1".to_string()));
    row.insert("version".to_string(), Value::Bytes(initial_version.to_vec()));
    db.insert(1, row);

    gadget.label = "v2".to_string();
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    assert!(plugin.rewriter().before_update(&mut stmt, &gadget));

    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 1);

    plugin
        .verifier()
        .after_update(&stmt, &outcome, &mut gadget, &mut db, "gadgets")
        .expect("update should succeed");

    assert_eq!(gadget.label, "v2");
    assert_ne!(gadget.version, initial_version);

    // A second attempt carrying the now-stale version never matches the
    // WHERE predicate the Rewriter builds from it.
    let mut stale = gadget.clone();
    stale.version = initial_version;
    stale.label = "v3".to_string();
    let mut stmt2 = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    assert!(plugin.rewriter().before_update(&mut stmt2, &stale));
    let outcome2 = db.execute(&stmt2);
    assert_eq!(outcome2.affected, 0);
    let err = plugin
        .verifier()
        .after_update(&stmt2, &outcome2, &mut stale, &mut db, "gadgets")
        .unwrap_err();
    assert!(err.is_conflict());
}

// ---------------------------------------------------------------------
// Scenario 4: resolver returns current.
// ---------------------------------------------------------------------

#[test]
fn scenario_4_resolver_accepts_current() {
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&Widget { id: 1, description: "bar".to_string(), enabled: true, version: 2 }));

    let attempted = Widget { id: 1, description: "qux".to_string(), enabled: true, version: 1 };
    let clause = drizzle_optimistic::Conflict::new(|current: &Widget, _diff| Some(current.clone()));

    let pk = attempted.primary_key();
    match Resolver::run(&mut db, "widgets", &pk, &attempted, &clause) {
        ResolveOutcome::AcceptedCurrent(current) => {
            assert_eq!(current.version, 2);
            assert_eq!(current.description, "bar");
        }
        _ => panic!("expected AcceptedCurrent"),
    }
}

// ---------------------------------------------------------------------
// Scenario 5: resolver returns a merged value, retries successfully.
// ---------------------------------------------------------------------

#[test]
fn scenario_5_resolver_retries_with_merge() {
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&Widget { id: 1, description: "bar".to_string(), enabled: true, version: 2 }));

    let attempted = Widget { id: 1, description: "qux".to_string(), enabled: true, version: 1 };
    let clause = drizzle_optimistic::Conflict::new(|current: &Widget, _diff| {
        let mut merged = current.clone();
        merged.description = "baz".to_string();
        Some(merged)
    });

    let pk = attempted.primary_key();
    match Resolver::run(&mut db, "widgets", &pk, &attempted, &clause) {
        ResolveOutcome::Retried(result) => {
            assert_eq!(result.version, 3);
            assert_eq!(result.description, "baz");
        }
        _ => panic!("expected Retried"),
    }
}

// ---------------------------------------------------------------------
// Scenario 6 / 7: zero-value field guard, and forced selection.
// ---------------------------------------------------------------------

#[test]
fn scenario_6_zero_value_does_not_force_increment() {
    let plugin = OptimisticLock::default();
    let widget = Widget { id: 1, description: String::new(), enabled: false, version: 1 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    let rewrote = plugin.rewriter().before_update(&mut stmt, &widget);
    assert!(!rewrote, "an all-zero struct-form update contributes nothing");
    assert_eq!(widget.version, 1);
}

#[test]
fn scenario_7_forced_selection_increments() {
    let plugin = OptimisticLock::default();
    let mut widget = Widget { id: 1, description: String::new(), enabled: false, version: 1 };
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&widget));

    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    stmt.selected = vec!["description", "enabled"];
    stmt.restricted = true;

    assert!(plugin.rewriter().before_update(&mut stmt, &widget));
    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 1);
    plugin
        .verifier()
        .after_update(&stmt, &outcome, &mut widget, &mut db, "widgets")
        .unwrap();
    assert_eq!(widget.version, 2);
    assert_eq!(widget.description, "");
    assert_eq!(widget.enabled, false);
}

// ---------------------------------------------------------------------
// I4 / I5 / I6: unscoped, dry-run, and mass-update bypass.
// ---------------------------------------------------------------------

#[test]
fn unscoped_updates_bypass_version_gating() {
    let plugin = OptimisticLock::default();
    let widget = Widget { id: 1, description: "x".to_string(), enabled: true, version: 7 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, unscoped: true, ..Default::default() };
    assert!(!plugin.rewriter().before_update(&mut stmt, &widget));
    assert!(stmt.where_eqs.is_empty());
}

#[test]
fn dry_run_updates_mutate_nothing() {
    let plugin = OptimisticLock::default();
    let widget = Widget { id: 1, description: "x".to_string(), enabled: true, version: 7 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, dry_run: true, ..Default::default() };
    assert!(!plugin.rewriter().before_update(&mut stmt, &widget));
    assert!(stmt.assignments.is_empty());
}

#[test]
fn mass_updates_are_left_untouched() {
    let plugin = OptimisticLock::default();
    // No primary key set (id == 0) models a predicate-only mass update.
    let widget = Widget { id: 0, description: "x".to_string(), enabled: true, version: 7 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    assert!(!plugin.rewriter().before_update(&mut stmt, &widget));
    assert!(stmt.where_eqs.is_empty());
    assert!(stmt.assignments.is_empty());
}

#[test]
fn rewriter_is_idempotent_per_statement() {
    let plugin = OptimisticLock::default();
    let widget = Widget { id: 1, description: "x".to_string(), enabled: true, version: 1 };
    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    assert!(plugin.rewriter().before_update(&mut stmt, &widget));
    let assignments_after_first = stmt.assignments.len();
    assert!(!plugin.rewriter().before_update(&mut stmt, &widget));
    assert_eq!(stmt.assignments.len(), assignments_after_first);
}

#[test]
fn diff_reports_changed_fields_only() {
    let a = Widget { id: 1, description: "foo".to_string(), enabled: true, version: 1 };
    let b = Widget { id: 1, description: "bar".to_string(), enabled: true, version: 2 };
    let d = diff(&a, &b);
    assert!(d.get("description").is_some());
    assert!(d.get("version").is_some());
    assert!(d.get("enabled").is_none());
}

// ---------------------------------------------------------------------
// Batch targeted update: a non-empty ordered sequence of models sharing
// one statement (spec §4.3 precondition 3, Glossary "Targeted update").
// ---------------------------------------------------------------------

#[test]
fn batch_update_gates_every_targeted_row() {
    let plugin = OptimisticLock::default();
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&Widget { id: 1, description: "a".to_string(), enabled: true, version: 1 }));
    db.insert(2, widget_row(&Widget { id: 2, description: "b".to_string(), enabled: true, version: 5 }));

    let mut first = Widget { id: 1, description: "a2".to_string(), enabled: true, version: 1 };
    let mut second = Widget { id: 2, description: "b2".to_string(), enabled: true, version: 5 };

    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    {
        let models: Vec<&dyn VersionedRecord> = vec![&first, &second];
        assert!(plugin.rewriter().before_update_many(&mut stmt, &models));
    }
    assert_eq!(stmt.where_groups.len(), 2);

    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 2);

    {
        let mut models: Vec<&mut dyn VersionedRecord> = vec![&mut first, &mut second];
        plugin
            .verifier()
            .after_update_many(&stmt, &outcome, &mut models, &mut db, "widgets")
            .expect("batch update should succeed");
    }

    assert_eq!(first.version, 2);
    assert_eq!(second.version, 6);
    assert_eq!(first.description, "a2");
    assert_eq!(second.description, "b2");
}

#[test]
fn batch_update_conflicts_when_one_row_is_stale() {
    let plugin = OptimisticLock::default();
    let mut db = FakeDb::new();
    db.insert(1, widget_row(&Widget { id: 1, description: "a".to_string(), enabled: true, version: 1 }));
    // Row 2 has already moved on; the batch's stale copy won't match it.
    db.insert(2, widget_row(&Widget { id: 2, description: "b".to_string(), enabled: true, version: 9 }));

    let mut first = Widget { id: 1, description: "a2".to_string(), enabled: true, version: 1 };
    let mut stale_second = Widget { id: 2, description: "b2".to_string(), enabled: true, version: 5 };

    let mut stmt = FakeStatement { dialect: Dialect::PostgreSQL, ..Default::default() };
    {
        let models: Vec<&dyn VersionedRecord> = vec![&first, &stale_second];
        assert!(plugin.rewriter().before_update_many(&mut stmt, &models));
    }

    let outcome = db.execute(&stmt);
    assert_eq!(outcome.affected, 1, "only the first row's WHERE group matches");

    let mut models: Vec<&mut dyn VersionedRecord> = vec![&mut first, &mut stale_second];
    let err = plugin
        .verifier()
        .after_update_many(&stmt, &outcome, &mut models, &mut db, "widgets")
        .unwrap_err();
    assert!(err.is_conflict());
}

/// A bare `InsertContext` that never skips.
struct AlwaysLive;
impl drizzle_optimistic::InsertContext for AlwaysLive {
    fn is_dry_run(&self) -> bool {
        false
    }
    fn is_unscoped(&self) -> bool {
        false
    }
}
