//! A host-agnostic bound-parameter value.
//!
//! drizzle-core's own [`drizzle_core::traits::SQLParam`] is a generic,
//! dialect-typed trait bound meant for compile-time query construction. The
//! plugin's state machine runs against whatever row/column representation the
//! host happens to expose at hook time, so it talks in terms of this small
//! value enum instead; a host integration converts to/from `SQLParam` at the
//! `Statement`/`Session` boundary (see `statement.rs`).

use crate::version::VersionValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Bytes(Vec<u8>),
    Text(String),
}

impl Value {
    /// Whether this value is the zero value of its own shape (spec §4.3
    /// Step B: "the field's current value is the type's zero").
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !*b,
            Value::Int(i) => *i == 0,
            Value::UInt(u) => *u == 0,
            Value::Bytes(b) => b.iter().all(|byte| *byte == 0),
            Value::Text(s) => s.is_empty(),
        }
    }
}

impl From<VersionValue> for Value {
    fn from(v: VersionValue) -> Self {
        match v {
            VersionValue::Int64(n) => Value::UInt(n),
            VersionValue::Uuid(b) | VersionValue::Ulid(b) => Value::Bytes(b.to_vec()),
            VersionValue::Timestamp(t) => Value::Int(t),
        }
    }
}

impl VersionValue {
    /// Reinterprets a plain [`Value`] as a version value of the given kind.
    /// Used when reading a version attribute back off a model or a RETURNING
    /// row, where the host only hands back an untyped `Value`.
    pub fn from_value(kind: crate::version::VersionKind, value: &Value) -> Option<Self> {
        use crate::version::VersionKind as K;
        match (kind, value) {
            (K::Int64, Value::UInt(n)) => Some(VersionValue::Int64(*n)),
            (K::Int64, Value::Int(n)) if *n >= 0 => Some(VersionValue::Int64(*n as u64)),
            (K::Uuid, Value::Bytes(b)) if b.len() == 16 => {
                let mut arr = [0u8; 16];
                arr.copy_from_slice(b);
                Some(VersionValue::Uuid(arr))
            }
            (K::Ulid, Value::Bytes(b)) if b.len() == 16 => {
                let mut arr = [0u8; 16];
                arr.copy_from_slice(b);
                Some(VersionValue::Ulid(arr))
            }
            (K::Timestamp(_), Value::Int(n)) => Some(VersionValue::Timestamp(*n)),
            _ => None,
        }
    }
}
