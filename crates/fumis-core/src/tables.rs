//! Static code tables and fixed identifiers for the Fumis WiRCU payload.
//!
//! Everything here is part of the external contract: the identifiers select
//! entries from the id-keyed arrays of the status document, and the label
//! tables turn raw controller codes into the strings the host platform shows.
//! The maps are compile-time perfect hash maps, so lookups never allocate and
//! the tables can be shared freely across threads.

use phf::phf_map;

// ---------------------------------------------------------------------------
// Integration identity
// ---------------------------------------------------------------------------

pub const DOMAIN: &str = "fumis";
pub const MANUFACTURER: &str = "fumis";

/// Default for string fields that are missing from the payload.
pub const UNKNOWN: &str = "Unknown";

/// Default radio level when the unit does not report one.
pub const DEFAULT_RSSI: i64 = -100;

// ---------------------------------------------------------------------------
// Entry identifiers
// ---------------------------------------------------------------------------

/// Stove entry in `controller.temperatures` and `controller.fuels`.
pub const STOVE_ID: i64 = 1;
/// Burn-chamber entry in `controller.temperatures`.
pub const STOVE_BURN_ID: i64 = 7;
/// Combustion-chamber pressure in `controller.diagnostic.variables`.
pub const PRESSURE_ID: i64 = 35;
/// Exhaust fan speed in `controller.diagnostic.variables`.
pub const RPM_ID: i64 = 34;

// ---------------------------------------------------------------------------
// Host-platform attribute names
// ---------------------------------------------------------------------------

pub const ATTR_POWER: &str = "kw";
pub const ATTR_ACTUAL_POWER: &str = "actualpower";
pub const ATTR_STATUS: &str = "status";
pub const ATTR_STATUS_ID: &str = "status_id";
pub const ATTR_FUEL: &str = "fuel_quantity";
pub const ATTR_TEMPERATURE_BURN: &str = "temperature_burn";

// ---------------------------------------------------------------------------
// Labels
// ---------------------------------------------------------------------------

pub const STATUS_UNKNOWN: &str = "unknown";
pub const STATUS_OFF: &str = "off";
pub const STATUS_PRE_HEATING: &str = "pre_heating";
pub const STATUS_IGNITION: &str = "ignition";
pub const STATUS_COMBUSTION: &str = "combustion";
pub const STATUS_ECO: &str = "eco";
pub const STATUS_COOLING: &str = "cooling";
pub const STATUS_HYBRID_INIT: &str = "hybrid_init";
pub const STATUS_HYBRID_START: &str = "hybrid_start";
pub const STATUS_WOOD_START: &str = "wood_start";
pub const STATUS_COLD_START: &str = "cold_start";
pub const STATUS_WOOD_COMBUSTION: &str = "wood_combustion";

pub const STATE_UNKNOWN: &str = "unknown";
pub const STATE_OFF: &str = "off";
pub const STATE_ON: &str = "on";

/// `controller.status` → operating phase.
pub static STATUS_MAPPING: phf::Map<i64, &'static str> = phf_map! {
    0i64 => STATUS_OFF,
    1i64 => STATUS_OFF,
    2i64 => STATUS_OFF,
    10i64 => STATUS_PRE_HEATING,
    20i64 => STATUS_IGNITION,
    21i64 => STATUS_IGNITION,
    30i64 => STATUS_COMBUSTION,
    31i64 => STATUS_ECO,
    40i64 => STATUS_COOLING,
    50i64 => STATUS_HYBRID_INIT,
    51i64 => STATUS_HYBRID_START,
    52i64 => STATUS_WOOD_START,
    110i64 => STATUS_COLD_START,
    111i64 => STATUS_WOOD_COMBUSTION,
};

/// `controller.command` → requested power state.
pub static STATE_MAPPING: phf::Map<i64, &'static str> = phf_map! {
    1i64 => STATE_OFF,
    2i64 => STATE_ON,
};

/// `controller.ecoMode.ecoModeEnable` → eco mode state. Misses fall back to
/// [`STATE_UNKNOWN`].
pub static ECO_MAPPING: phf::Map<i64, &'static str> = phf_map! {
    0i64 => STATE_OFF,
    1i64 => STATE_ON,
};

/// Label for a `controller.status` code.
pub fn status_label(id: i64) -> &'static str {
    STATUS_MAPPING.get(&id).copied().unwrap_or(STATUS_UNKNOWN)
}

/// Label for a `controller.command` code.
pub fn state_label(id: i64) -> &'static str {
    STATE_MAPPING.get(&id).copied().unwrap_or(STATE_UNKNOWN)
}

/// Label for an eco-mode enable flag.
pub fn eco_label(id: i64) -> &'static str {
    ECO_MAPPING.get(&id).copied().unwrap_or(STATE_UNKNOWN)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
