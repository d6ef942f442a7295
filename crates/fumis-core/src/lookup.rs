//! Payload navigation — null-aware field access, id-keyed array lookup and
//! numeric coercion over an untyped [`serde_json::Value`] document.
//!
//! Two lookup policies coexist in the payload and both are explicit here:
//!
//! - Plain fields go through [`Section`], which distinguishes a missing key
//!   from an explicit `null` ([`Field`]) and lets the caller pick a default
//!   for each case. A legitimate `0` is never mistaken for "absent".
//! - Id-keyed entries go through [`find_by_id`], which fails with
//!   [`NormalizeError::MissingRequiredField`] when nothing matches.

use serde_json::{Map, Number, Value};

use crate::error::NormalizeError;

/// An object in the payload, as stored inside id-keyed arrays.
pub type Entry = Map<String, Value>;

// ---------------------------------------------------------------------------
// Field presence
// ---------------------------------------------------------------------------

/// Result of reading one key from an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Field<'a> {
    /// The key does not exist (or its parent does not).
    Absent,
    /// The key exists and holds `null`.
    Null,
    Present(&'a Value),
}

impl<'a> Field<'a> {
    pub fn value(self) -> Option<&'a Value> {
        match self {
            Field::Present(value) => Some(value),
            Field::Absent | Field::Null => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// A view onto one object of the document. A missing or non-object value is
/// an empty section, so descending never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Section<'a> {
    map: Option<&'a Entry>,
}

impl<'a> Section<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    pub fn entry(map: &'a Entry) -> Self {
        Self { map: Some(map) }
    }

    pub fn field(&self, key: &str) -> Field<'a> {
        match self.map.and_then(|map| map.get(key)) {
            None => Field::Absent,
            Some(Value::Null) => Field::Null,
            Some(value) => Field::Present(value),
        }
    }

    /// Nested object under `key`, empty if missing.
    pub fn section(&self, key: &str) -> Section<'a> {
        Section {
            map: self.field(key).value().and_then(Value::as_object),
        }
    }

    /// Array under `key`; missing, null and non-array values read as empty.
    pub fn array(&self, key: &str) -> &'a [Value] {
        self.field(key)
            .value()
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// String-ish field. Non-string scalars are rendered as JSON text.
    pub fn string_or(&self, key: &str, default: &str) -> String {
        match self.field(key) {
            Field::Present(Value::String(s)) => s.clone(),
            Field::Present(other) => other.to_string(),
            Field::Absent | Field::Null => default.to_string(),
        }
    }

    pub fn i64_or(&self, key: &str, field: &'static str, default: i64) -> Result<i64, NormalizeError> {
        match self.field(key) {
            Field::Present(value) => to_i64(field, value),
            Field::Absent | Field::Null => {
                tracing::trace!(snapshot_field = field, key, default, "integer field defaulted");
                Ok(default)
            }
        }
    }

    /// Table key under `key`. Absent and null read as `default`. Only an
    /// integer-valued number or a bool is a key; anything else is `None`
    /// and never selects a table entry.
    pub fn code_or(&self, key: &str, default: i64) -> Option<i64> {
        match self.field(key) {
            Field::Present(Value::Number(n)) => n.as_i64().or_else(|| {
                let f = n.as_f64()?;
                (f.fract() == 0.0).then(|| truncate(n)).flatten()
            }),
            Field::Present(Value::Bool(b)) => Some(i64::from(*b)),
            Field::Present(other) => {
                tracing::trace!(key, found = %other, "value is not a code");
                None
            }
            Field::Absent | Field::Null => Some(default),
        }
    }

    pub fn f64_or(&self, key: &str, field: &'static str, default: f64) -> Result<f64, NormalizeError> {
        match self.field(key) {
            Field::Present(value) => to_f64(field, value),
            Field::Absent | Field::Null => {
                tracing::trace!(snapshot_field = field, key, default, "numeric field defaulted");
                Ok(default)
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Id-keyed lookup
// ---------------------------------------------------------------------------

/// Return the first object in `entries` whose `id` equals `id`.
///
/// Entries that are not objects, or whose `id` is not a number, never match.
/// `field` and `path` only label the error.
pub fn find_by_id<'a>(
    entries: &'a [Value],
    id: i64,
    field: &'static str,
    path: &'static str,
) -> Result<&'a Entry, NormalizeError> {
    entries
        .iter()
        .filter_map(Value::as_object)
        .find(|entry| entry.get("id").is_some_and(|v| id_matches(v, id)))
        .ok_or(NormalizeError::MissingRequiredField { field, path, id })
}

fn id_matches(value: &Value, id: i64) -> bool {
    match value {
        Value::Number(n) => n.as_i64() == Some(id) || n.as_f64() == Some(id as f64),
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Read a number. Accepts JSON numbers, numeric strings and booleans (0/1).
pub fn to_f64(field: &'static str, value: &Value) -> Result<f64, NormalizeError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(f64::from(u8::from(*b))),
        _ => None,
    };
    parsed.ok_or_else(|| coercion_error(field, "number", value))
}

/// Read an integer. Floats truncate toward zero; strings must hold an
/// integer literal.
pub fn to_i64(field: &'static str, value: &Value) -> Result<i64, NormalizeError> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| truncate(n)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        Value::Bool(b) => Some(i64::from(*b)),
        _ => None,
    };
    parsed.ok_or_else(|| coercion_error(field, "integer", value))
}

fn truncate(n: &Number) -> Option<i64> {
    let f = n.as_f64()?.trunc();
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

pub(crate) fn coercion_error(field: &'static str, expected: &'static str, found: &Value) -> NormalizeError {
    NormalizeError::TypeCoercion {
        field,
        expected,
        found: found.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
