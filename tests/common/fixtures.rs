//! Static payloads used across harnesses.
//!
//! `WIRCU_STATUS` is shaped like a real status response, including the
//! sections the normalizer ignores (`parameters`, extra variables, a second
//! fuel, timers), so tests exercise lookups against realistic noise.

use fumis_core::tables::{PRESSURE_ID, RPM_ID, STOVE_BURN_ID, STOVE_ID};
use serde_json::{json, Value};

/// A full status document as returned by the WiRCU `status` endpoint.
pub const WIRCU_STATUS: &str = r#"{
  "apiVersion": "1",
  "unit": {
    "id": "AABBCCDDEEFF",
    "type": 0,
    "version": "2.0.0",
    "command": null,
    "ip": "192.168.1.50",
    "timezone": "Europe/Amsterdam",
    "rssi": "-62"
  },
  "controller": {
    "type": 0,
    "version": "4.0.1",
    "command": 2,
    "status": 30,
    "heatingSlope": 0,
    "error": 0,
    "power": { "kw": 6.2, "actualPower": 3, "setPower": 3 },
    "statistic": {
      "igniterStarts": 412,
      "uptime": 9816342,
      "heatingTime": 2203987,
      "serviceTime": 60,
      "overheatings": 1,
      "misfires": 7
    },
    "diagnostic": {
      "parameters": [ { "id": 1, "value": 2 } ],
      "variables": [
        { "id": 11, "value": 18 },
        { "id": 34, "value": 2310 },
        { "id": 35, "value": 57.5 },
        { "id": 40, "value": 0 }
      ]
    },
    "temperatures": [
      { "id": 1, "actual": 20.6, "set": 21.5, "onMainScreen": true, "weight": 0 },
      { "id": 7, "actual": 412.0, "set": 0.0, "onMainScreen": false, "weight": 0 }
    ],
    "fuels": [
      { "id": 1, "type": 1, "quality": 2, "quantity": "0.4" },
      { "id": 2, "type": 2, "quality": 0, "quantity": null }
    ],
    "ecoMode": { "ecoModeSetType": 1, "ecoModeEnable": 1 },
    "timers": [
      { "id": 1, "on": "07:00", "off": "09:30" },
      { "id": 2, "on": "17:00", "off": "22:00" }
    ]
  }
}"#;

/// Document from the round-trip scenario: every required entry, nothing else
/// but the status codes.
pub fn round_trip_payload() -> Value {
    json!({
        "controller": {
            "status": 2,
            "command": 1,
            "diagnostic": {
                "variables": [
                    { "id": PRESSURE_ID, "value": 1.2 },
                    { "id": RPM_ID, "value": 3000 },
                ]
            },
            "temperatures": [
                { "id": STOVE_ID, "actual": 21.5, "set": 22.0 },
                { "id": STOVE_BURN_ID, "actual": 310.0 },
            ],
            "fuels": [ { "id": STOVE_ID, "quantity": "0.75", "quality": 90 } ],
        }
    })
}

/// The parsed form of [`WIRCU_STATUS`].
pub fn wircu_status() -> Value {
    serde_json::from_str(WIRCU_STATUS).expect("fixture must be valid JSON")
}
