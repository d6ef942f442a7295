//! Domain-specific assertion macros for fumis harnesses.
//!
//! These add context-rich failure messages that make it clear *which*
//! normalization contract was violated: a required lookup that should have
//! failed, a coercion that should have been rejected, or a snapshot whose
//! derived fields disagree with its raw ones.

use fumis_core::{signal_strength, DeviceSnapshot};

// ---------------------------------------------------------------------------
// Error assertions
// ---------------------------------------------------------------------------

/// Assert that a normalization result failed on a missing id-keyed entry.
///
/// ```rust
/// assert_missing_field!(normalize(&payload), "pressure");
/// ```
#[macro_export]
macro_rules! assert_missing_field {
    ($result:expr, $field:expr) => {{
        let expected: &str = $field;
        match $result {
            Err(fumis_core::NormalizeError::MissingRequiredField { field, .. }) if field == expected => {}
            Err(other) => panic!(
                "assert_missing_field! failed:\n  expected: MissingRequiredField({:?})\n  actual:   {:?}",
                expected, other
            ),
            Ok(snapshot) => panic!(
                "assert_missing_field! failed: normalization succeeded.\n  snapshot: {:#?}",
                snapshot
            ),
        }
    }};
}

/// Assert that a normalization result failed to coerce a numeric field.
///
/// ```rust
/// assert_coercion_error!(normalize(&payload), "fuel_quality");
/// ```
#[macro_export]
macro_rules! assert_coercion_error {
    ($result:expr, $field:expr) => {{
        let expected: &str = $field;
        match $result {
            Err(fumis_core::NormalizeError::TypeCoercion { field, .. }) if field == expected => {}
            Err(other) => panic!(
                "assert_coercion_error! failed:\n  expected: TypeCoercion({:?})\n  actual:   {:?}",
                expected, other
            ),
            Ok(snapshot) => panic!(
                "assert_coercion_error! failed: normalization succeeded.\n  snapshot: {:#?}",
                snapshot
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Snapshot invariants
// ---------------------------------------------------------------------------

/// Check the relations every snapshot must satisfy regardless of payload.
pub fn assert_snapshot_invariants(snapshot: &DeviceSnapshot) {
    assert!(
        snapshot.signal_strength <= 100,
        "signal_strength out of range: {}",
        snapshot.signal_strength
    );
    assert_eq!(
        snapshot.signal_strength,
        signal_strength(snapshot.rssi),
        "signal_strength must be derived from rssi {}",
        snapshot.rssi
    );
    assert!(!snapshot.status.is_empty(), "status label must never be empty");
    assert!(!snapshot.state.is_empty(), "state label must never be empty");
    assert!(
        !snapshot.ecomode_state.is_empty(),
        "ecomode_state label must never be empty"
    );
}
