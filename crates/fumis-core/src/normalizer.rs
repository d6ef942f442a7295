//! Normalizer — turns a WiRCU status document into a [`DeviceSnapshot`].
//!
//! The document is walked once, top-down. Missing objects at any level read
//! as empty and plain fields fall back to fixed defaults, but the five
//! id-keyed entries (pressure, rpm, stove temperature, burn temperature and
//! stove fuel) must be present: a payload without them fails with
//! [`NormalizeError::MissingRequiredField`] rather than reporting zeros.

use serde_json::Value;

use crate::config::Config;
use crate::error::NormalizeError;
use crate::lookup::{coercion_error, find_by_id, to_f64, to_i64, Field, Section};
use crate::tables::{self, DEFAULT_RSSI, UNKNOWN};
use crate::types::{DeviceSnapshot, Identifiers};

const VARIABLES: &str = "controller.diagnostic.variables";
const TEMPERATURES: &str = "controller.temperatures";
const FUELS: &str = "controller.fuels";

/// Map a raw radio level (dBm) onto a 0..=100 quality score.
///
/// -100 dBm and below is 0, -50 dBm and above is 100, linear in between.
pub fn signal_strength(rssi: i64) -> u8 {
    match rssi {
        i64::MIN..=-100 => 0,
        -50..=i64::MAX => 100,
        // (-100, -50) maps into (0, 100), always fits a u8.
        _ => (2 * (rssi + 100)) as u8,
    }
}

/// Convert a fuel fraction into percent. Rounded to 12 significant digits,
/// which drops the binary noise of `0.4 * 100` without touching real
/// precision or the magnitude of large values.
fn percentage(fraction: f64) -> f64 {
    let scaled = fraction * 100.0;
    format!("{scaled:.11e}").parse().unwrap_or(scaled)
}

/// Stateless payload normalizer. Cheap to copy and safe to share.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Normalizer {
    ids: Identifiers,
}

impl Normalizer {
    pub fn new(ids: Identifiers) -> Self {
        Self { ids }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.identifiers)
    }

    /// Normalize a parsed document.
    pub fn normalize(&self, payload: &Value) -> Result<DeviceSnapshot, NormalizeError> {
        let result = self.build(payload);
        match &result {
            Ok(snapshot) => tracing::debug!(
                unit_id = %snapshot.unit_id,
                status = snapshot.status,
                state = snapshot.state,
                "payload normalized"
            ),
            Err(error) => tracing::warn!(%error, snapshot_field = error.field(), "payload rejected"),
        }
        result
    }

    /// Parse and normalize a JSON string.
    pub fn normalize_str(&self, payload: &str) -> Result<DeviceSnapshot, NormalizeError> {
        self.normalize(&serde_json::from_str(payload)?)
    }

    /// Parse and normalize raw JSON bytes as received from the device.
    pub fn normalize_slice(&self, payload: &[u8]) -> Result<DeviceSnapshot, NormalizeError> {
        self.normalize(&serde_json::from_slice(payload)?)
    }

    fn build(&self, payload: &Value) -> Result<DeviceSnapshot, NormalizeError> {
        let root = Section::new(payload);
        let controller = root.section("controller");
        let unit = root.section("unit");

        let stats = controller.section("statistic");
        let power = controller.section("power");
        let eco = controller.section("ecoMode");

        let variables = controller.section("diagnostic").array("variables");
        let pressure = Section::entry(find_by_id(variables, self.ids.pressure, "pressure", VARIABLES)?);
        let rpm = Section::entry(find_by_id(variables, self.ids.rpm, "rpm", VARIABLES)?);

        let temperatures = controller.array("temperatures");
        let stove = Section::entry(find_by_id(temperatures, self.ids.stove, "temperature", TEMPERATURES)?);
        let burn = Section::entry(find_by_id(
            temperatures,
            self.ids.stove_burn,
            "temperature_burn",
            TEMPERATURES,
        )?);

        let fuel = Section::entry(find_by_id(controller.array("fuels"), self.ids.stove, "fuel", FUELS)?);

        let rssi = unit.i64_or("rssi", "rssi", DEFAULT_RSSI)?;
        // Codes only select a table entry when they are exact integers.
        let status_code = controller.code_or("status", -1);
        let state_code = controller.code_or("command", -1);

        Ok(DeviceSnapshot {
            unit_id: unit.string_or("id", UNKNOWN),
            unit_version: unit.string_or("version", UNKNOWN),
            controller_version: controller.string_or("version", UNKNOWN),
            ip: unit.string_or("ip", UNKNOWN),
            rssi,
            signal_strength: signal_strength(rssi),
            state: state_code.map_or(tables::STATE_UNKNOWN, tables::state_label),
            state_id: state_code.unwrap_or(-1),
            status: status_code.map_or(tables::STATUS_UNKNOWN, tables::status_label),
            status_id: status_code.unwrap_or(-1),
            temperature: stove.f64_or("actual", "temperature", 0.0)?,
            target_temperature: stove.f64_or("set", "target_temperature", 0.0)?,
            temperature_burn: burn.f64_or("actual", "temperature_burn", 0.0)?,
            pressure: pressure.f64_or("value", "pressure", 0.0)?,
            rpm: rpm.f64_or("value", "rpm", 0.0)?,
            heating_time: stats.i64_or("heatingTime", "heating_time", 0)?,
            igniter_starts: stats.i64_or("igniterStarts", "igniter_starts", 0)?,
            misfires: stats.i64_or("misfires", "misfires", 0)?,
            overheatings: stats.i64_or("overheatings", "overheatings", 0)?,
            uptime: stats.i64_or("uptime", "uptime", 0)?,
            fuel_quality: fuel_quality(&fuel)?,
            fuel_quantity: fuel_quantity(&fuel)?,
            ecomode_type: eco.i64_or("ecoModeSetType", "ecomode_type", -1)?,
            ecomode_state: eco
                .code_or("ecoModeEnable", 0)
                .map_or(tables::STATE_UNKNOWN, tables::eco_label),
            kw: power.f64_or("actualPower", "kw", 0.0)?,
            actualpower: power.f64_or("kw", "actualpower", 0.0)?,
            timers: timers(&controller),
        })
    }
}

/// Quality has no safe default: a missing value is the unknown marker, which
/// is not a number.
fn fuel_quality(fuel: &Section<'_>) -> Result<i64, NormalizeError> {
    match fuel.field("quality") {
        Field::Present(value) => to_i64("fuel_quality", value),
        Field::Null => Err(coercion_error("fuel_quality", "integer", &Value::Null)),
        Field::Absent => Err(coercion_error("fuel_quality", "integer", &Value::from(UNKNOWN))),
    }
}

/// An explicit `null` quantity means an empty hopper; a missing one is the
/// unknown marker and fails like any other non-number.
fn fuel_quantity(fuel: &Section<'_>) -> Result<f64, NormalizeError> {
    match fuel.field("quantity") {
        Field::Present(value) => Ok(percentage(to_f64("fuel_quantity", value)?)),
        Field::Null => Ok(0.0),
        Field::Absent => Err(coercion_error("fuel_quantity", "number", &Value::from(UNKNOWN))),
    }
}

/// Timers are passed through untouched, whatever their shape.
fn timers(controller: &Section<'_>) -> Value {
    match controller.field("timers") {
        Field::Present(value) => value.clone(),
        Field::Null => Value::Null,
        Field::Absent => Value::Array(Vec::new()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
