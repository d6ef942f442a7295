//! fumis-core — normalizer for Fumis WiRCU pellet-stove status payloads.
//!
//! The device reports its state as a loosely structured JSON document. This
//! crate turns one such document into a flat, immutable [`DeviceSnapshot`]:
//! it locates the id-keyed entries it needs, applies unit conversions and
//! maps numeric status codes to labels.
//!
//! # Architecture
//!
//! ```text
//! caller (transport) ──► Normalizer ──► DeviceSnapshot ──► caller (presentation)
//!                           │
//!                           └── tables (codes, ids, labels)
//! ```
//!
//! Normalization is synchronous and side-effect free apart from `tracing`
//! events; there is no I/O, caching or shared mutable state.

pub mod config;
pub mod error;
pub mod lookup;
pub mod normalizer;
pub mod tables;
pub mod types;

use serde_json::Value;

pub use error::NormalizeError;
pub use lookup::find_by_id;
pub use normalizer::{signal_strength, Normalizer};
pub use types::{DeviceInfo, DeviceSnapshot, Identifiers};

/// Normalize a parsed document using the shipped identifiers.
pub fn normalize(payload: &Value) -> Result<DeviceSnapshot, NormalizeError> {
    Normalizer::default().normalize(payload)
}

/// Parse and normalize a JSON string using the shipped identifiers.
pub fn normalize_str(payload: &str) -> Result<DeviceSnapshot, NormalizeError> {
    Normalizer::default().normalize_str(payload)
}

/// Parse and normalize raw JSON bytes using the shipped identifiers.
pub fn normalize_slice(payload: &[u8]) -> Result<DeviceSnapshot, NormalizeError> {
    Normalizer::default().normalize_slice(payload)
}
