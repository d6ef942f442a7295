//! Core types for fumis-core.
//!
//! This module defines the flat [`DeviceSnapshot`] produced by the
//! normalizer, the [`Identifiers`] used to pick entries out of the id-keyed
//! payload arrays, and the [`DeviceInfo`] identity handed to host platforms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::tables::{
    ATTR_ACTUAL_POWER, ATTR_FUEL, ATTR_POWER, ATTR_STATUS, ATTR_STATUS_ID, ATTR_TEMPERATURE_BURN,
    DOMAIN, MANUFACTURER, PRESSURE_ID, RPM_ID, STOVE_BURN_ID, STOVE_ID,
};

/// Normalized telemetry of one stove, built fresh from every status payload.
///
/// Field names are the names consumers read them by; serializing a snapshot
/// yields exactly these keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSnapshot {
    pub unit_id: String,
    pub unit_version: String,
    pub controller_version: String,
    pub ip: String,
    /// Raw radio level in dBm.
    pub rssi: i64,
    /// `rssi` mapped onto 0..=100.
    pub signal_strength: u8,

    pub state: &'static str,
    pub state_id: i64,
    pub status: &'static str,
    pub status_id: i64,

    /// Room temperature measured by the stove.
    pub temperature: f64,
    pub target_temperature: f64,
    /// Burn-chamber temperature.
    pub temperature_burn: f64,
    pub pressure: f64,
    pub rpm: f64,

    pub heating_time: i64,
    pub igniter_starts: i64,
    pub misfires: i64,
    pub overheatings: i64,
    pub uptime: i64,

    pub fuel_quality: i64,
    /// Pellet level in percent.
    pub fuel_quantity: f64,

    pub ecomode_type: i64,
    pub ecomode_state: &'static str,

    /// Read from the payload's `actualPower`.
    pub kw: f64,
    /// Read from the payload's `kw`.
    pub actualpower: f64,

    /// Timer schedule exactly as the controller sent it: normally a list,
    /// `[]` when the payload has none.
    pub timers: Value,
}

impl DeviceSnapshot {
    /// Extra state attributes exposed next to the main climate entity.
    pub fn attributes(&self) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([
            (ATTR_POWER, Value::from(self.kw)),
            (ATTR_ACTUAL_POWER, Value::from(self.actualpower)),
            (ATTR_STATUS, Value::from(self.status)),
            (ATTR_STATUS_ID, Value::from(self.status_id)),
            (ATTR_FUEL, Value::from(self.fuel_quantity)),
            (ATTR_TEMPERATURE_BURN, Value::from(self.temperature_burn)),
        ])
    }

    pub fn device_info(&self) -> DeviceInfo {
        DeviceInfo {
            domain: DOMAIN,
            identifier: self.unit_id.clone(),
            manufacturer: MANUFACTURER,
            sw_version: self.controller_version.clone(),
            hw_version: self.unit_version.clone(),
        }
    }
}

/// Registry identity of the stove on a host platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceInfo {
    pub domain: &'static str,
    /// WiRCU unit id; `"Unknown"` when the payload carried none.
    pub identifier: String,
    pub manufacturer: &'static str,
    pub sw_version: String,
    pub hw_version: String,
}

/// Ids used to locate entries inside `temperatures`, `fuels` and
/// `diagnostic.variables`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifiers {
    #[serde(default = "default_stove")]
    pub stove: i64,
    #[serde(default = "default_stove_burn")]
    pub stove_burn: i64,
    #[serde(default = "default_pressure")]
    pub pressure: i64,
    #[serde(default = "default_rpm")]
    pub rpm: i64,
}

fn default_stove() -> i64 { STOVE_ID }
fn default_stove_burn() -> i64 { STOVE_BURN_ID }
fn default_pressure() -> i64 { PRESSURE_ID }
fn default_rpm() -> i64 { RPM_ID }

impl Default for Identifiers {
    fn default() -> Self {
        Self {
            stove: default_stove(),
            stove_burn: default_stove_burn(),
            pressure: default_pressure(),
            rpm: default_rpm(),
        }
    }
}
