//! Schema Introspector (spec §4.1).
//!
//! Locates the version field on a model from declarative tag metadata and
//! classifies its semantic type. A real integration derives [`FieldMeta`]
//! from the host's own column metadata (e.g. `drizzle_core::traits::SQLColumnInfo`);
//! this module only needs the shape, not drizzle's const-generic column types,
//! so it stays usable against any ORM that can describe its fields this way.

use crate::value::Value;
use crate::version::VersionKind;

/// The Rust-level type classification of a field, as reported by the host.
/// `Opaque16` covers both UUID and ULID storage (a 16-byte array/blob);
/// disambiguating between them is the Introspector's job (spec §3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    Integer,
    Opaque16,
    Timestamp,
    Other,
}

/// Declarative metadata for one field of a model, as discovered from the
/// host's schema derivation (tag language, spec §6).
#[derive(Debug, Clone, Copy)]
pub struct FieldMeta {
    /// Rust field name.
    pub name: &'static str,
    /// Dialect-normalized database column name.
    pub column: &'static str,
    pub field_type: FieldType,
    /// Declared Rust type name, used only for the ULID substring fallback
    /// (spec §3: "case-insensitive substring match on the type name
    /// containing `ulid`").
    pub type_name: &'static str,
    /// Tag keywords attached to this field (e.g. `"version"`, `"version:uuid"`).
    pub tags: &'static [&'static str],
    pub primary_key: bool,
    pub updatable: bool,
}

/// The full field list of one model, plus its table name.
pub trait ModelSchema: Send + Sync {
    fn table_name(&self) -> &'static str;
    fn fields(&self) -> &'static [FieldMeta];
}

/// The discovered version field: its metadata plus its resolved semantic kind.
#[derive(Debug, Clone, Copy)]
pub struct VersionField {
    pub meta: FieldMeta,
    pub kind: VersionKind,
}

/// Discovers and classifies the version field on a model schema.
pub struct Introspector {
    tag_keyword: String,
}

impl Default for Introspector {
    fn default() -> Self {
        Self { tag_keyword: "version".to_string() }
    }
}

impl Introspector {
    pub fn new(tag_keyword: impl Into<String>) -> Self {
        Self { tag_keyword: tag_keyword.into() }
    }

    /// Walks all fields in declaration order and returns the first whose tag
    /// settings contain the configured keyword (spec §4.1). Returns `None`
    /// when no field carries the tag, or when the tagged field's type cannot
    /// be classified (the model is then treated as un-versioned).
    pub fn discover(&self, schema: &dyn ModelSchema) -> Option<VersionField> {
        for meta in schema.fields() {
            let Some(param) = self.tag_param(meta) else { continue };
            let kind = self.classify(meta, param)?;
            return Some(VersionField { meta: *meta, kind });
        }
        None
    }

    /// Returns `Some(param)` if this field carries the configured tag
    /// keyword, where `param` is the tag's value part (e.g. `"uuid"` for
    /// `version:uuid`), or `Some("")` when the tag carries no value.
    fn tag_param<'a>(&self, meta: &FieldMeta) -> Option<&'static str> {
        for tag in meta.tags {
            if let Some((keyword, rest)) = tag.split_once(':') {
                if keyword == self.tag_keyword {
                    return Some(rest);
                }
            } else if *tag == self.tag_keyword {
                return Some("");
            }
        }
        None
    }

    fn classify(&self, meta: &FieldMeta, param: &str) -> Option<VersionKind> {
        match meta.field_type {
            FieldType::Integer => Some(VersionKind::Int64),
            FieldType::Timestamp => Some(VersionKind::Timestamp(
                crate::version::TimestampPrecision::Micros,
            )),
            FieldType::Opaque16 => match param {
                "uuid" => Some(VersionKind::Uuid),
                "ulid" => Some(VersionKind::Ulid),
                _ if meta.type_name.to_lowercase().contains("ulid") => Some(VersionKind::Ulid),
                _ => Some(VersionKind::Uuid),
            },
            FieldType::Other => None,
        }
    }
}

/// A live model instance the plugin can read/write the version attribute and
/// other column values on. A derive macro in a real integration would
/// generate this from the same schema macro that produces [`ModelSchema`];
/// here it is a plain trait so the core state machine stays decoupled from
/// drizzle's compile-time column types.
pub trait VersionedRecord {
    fn schema(&self) -> &dyn ModelSchema;

    /// The model's primary-key columns bound to their current in-memory
    /// values, in schema order.
    fn primary_key(&self) -> Vec<(&'static str, Value)>;

    /// `true` if every primary-key column holds a non-zero value (spec §3
    /// "Targeted update").
    fn has_nonzero_primary_key(&self) -> bool {
        let pk = self.primary_key();
        !pk.is_empty() && pk.iter().all(|(_, v)| !v.is_zero())
    }

    fn get_field(&self, column: &str) -> Option<Value>;
    fn set_field(&mut self, column: &str, value: Value);
}
