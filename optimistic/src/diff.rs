//! Diff Reporter (spec §4.6, §9 "Diff reporter").
//!
//! Since the plugin has no reflection into arbitrary structs, each model
//! type supplies its own walker via [`Diffable`] — the spec's own suggested
//! design ("implementations in strongly typed languages should expose a
//! protocol where each model type supplies its own walker").

use std::collections::BTreeMap;

use tracing::trace;

use crate::value::Value;

/// One leaf difference: the value the caller observed versus the value
/// currently on the other side of the comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffEntry {
    pub from: Value,
    pub to: Value,
}

/// A field-path-keyed (dotted) map of differences between two values of the
/// same model type. Deterministically ordered by path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diff(BTreeMap<String, DiffEntry>);

impl Diff {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&DiffEntry> {
        self.0.get(path)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &DiffEntry)> {
        self.0.iter()
    }
}

/// A model type that can enumerate its own leaf fields for diffing, and
/// recurse into nested diffable fields to build dotted paths.
pub trait Diffable {
    /// Leaf field names (not including nested diffable fields).
    fn diff_leaf_fields(&self) -> &'static [&'static str];
    fn diff_leaf_value(&self, field: &str) -> Value;

    /// Nested diffable fields, each contributing a path prefix. Empty by
    /// default; override for models with nested sub-models.
    fn diff_nested(&self) -> Vec<(&'static str, &dyn Diffable)> {
        Vec::new()
    }
}

/// Walks `from` and `to` (two values of the same model type) and returns
/// every leaf where they differ, keyed by dotted path.
pub fn diff(from: &dyn Diffable, to: &dyn Diffable) -> Diff {
    let mut out = BTreeMap::new();
    walk("", from, to, &mut out);
    Diff(out)
}

fn walk(prefix: &str, from: &dyn Diffable, to: &dyn Diffable, out: &mut BTreeMap<String, DiffEntry>) {
    for field in from.diff_leaf_fields() {
        let a = from.diff_leaf_value(field);
        let b = to.diff_leaf_value(field);
        if a != b {
            let full_path = path(prefix, field);
            trace!(field = %full_path, "field differs");
            out.insert(full_path, DiffEntry { from: a, to: b });
        }
    }
    for (name, nested_from) in from.diff_nested() {
        if let Some((_, nested_to)) = to.diff_nested().into_iter().find(|(n, _)| *n == name) {
            walk(&path(prefix, name), nested_from, nested_to, out);
        }
    }
}

fn path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{prefix}.{field}")
    }
}
