//! Test builders — ergonomic edits on top of a known-good payload.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use serde_json::{json, Value};

use super::fixtures::round_trip_payload;

// ---------------------------------------------------------------------------
// PayloadBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for status documents, addressed by JSON pointer.
///
/// # Example
///
/// ```rust
/// let payload = PayloadBuilder::new()
///     .status(31)
///     .rssi(-75)
///     .set("/controller/ecoMode", json!({ "ecoModeEnable": null }))
///     .build();
/// ```
pub struct PayloadBuilder {
    doc: Value,
}

impl PayloadBuilder {
    /// Start from the round-trip payload, which normalizes cleanly.
    pub fn new() -> Self {
        Self {
            doc: round_trip_payload(),
        }
    }

    pub fn from_value(doc: Value) -> Self {
        Self { doc }
    }

    /// Set `pointer` to `value`, creating missing intermediate objects.
    /// Numeric segments index into arrays.
    pub fn set(mut self, pointer: &str, value: Value) -> Self {
        let (parent, key) = pointer
            .rsplit_once('/')
            .unwrap_or_else(|| panic!("{pointer}: not a JSON pointer"));
        let mut node = &mut self.doc;
        for segment in parent.split('/').filter(|s| !s.is_empty()) {
            node = match node {
                Value::Array(items) => {
                    let index: usize = segment
                        .parse()
                        .unwrap_or_else(|_| panic!("{pointer}: {segment:?} is not an index"));
                    &mut items[index]
                }
                Value::Object(map) => map.entry(segment.to_string()).or_insert_with(|| json!({})),
                other => panic!("{pointer}: cannot descend into {other}"),
            };
        }
        match node {
            Value::Object(map) => {
                map.insert(key.to_string(), value);
            }
            other => panic!("{pointer}: parent is not an object: {other}"),
        }
        self
    }

    /// Remove the key at `pointer`. Removing a missing key is a no-op.
    pub fn remove(mut self, pointer: &str) -> Self {
        let (parent, key) = pointer
            .rsplit_once('/')
            .unwrap_or_else(|| panic!("{pointer}: not a JSON pointer"));
        if let Some(map) = self.doc.pointer_mut(parent).and_then(Value::as_object_mut) {
            map.remove(key);
        }
        self
    }

    pub fn status(self, id: i64) -> Self {
        self.set("/controller/status", json!(id))
    }

    pub fn command(self, id: i64) -> Self {
        self.set("/controller/command", json!(id))
    }

    pub fn rssi(self, rssi: i64) -> Self {
        self.set("/unit/rssi", json!(rssi))
    }

    pub fn variables(self, entries: Value) -> Self {
        self.set("/controller/diagnostic/variables", entries)
    }

    pub fn temperatures(self, entries: Value) -> Self {
        self.set("/controller/temperatures", entries)
    }

    /// Replace the stove fuel entry's quantity and quality.
    pub fn fuel(self, quantity: Value, quality: Value) -> Self {
        self.set("/controller/fuels/0/quantity", quantity)
            .set("/controller/fuels/0/quality", quality)
    }

    pub fn build(self) -> Value {
        self.doc
    }
}
