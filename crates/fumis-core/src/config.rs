//! Configuration types for fumis.
//!
//! [`Config::load`] layers an optional user file (`--config PATH`, or
//! `~/.config/fumis/config.toml`) on top of the embedded defaults. The file
//! is only ever read. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::types::Identifiers;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[identifiers]
stove      = 1
stove_burn = 7
pressure   = 35
rpm        = 34

[output]
format = "snapshot"
pretty = true
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub identifiers: Identifiers,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What the caller prints for a normalized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full snapshot, one key per field.
    Snapshot,
    /// Only the host-platform state attributes.
    Attributes,
}

/// `[output]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: OutputFormat,
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_format() -> OutputFormat { OutputFormat::Snapshot }
fn default_pretty() -> bool { true }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: default_pretty(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the embedded defaults, overridden by `path` when given (which
    /// must then exist) or by the user config file when present.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let user_file = match path {
            Some(explicit) => config::File::from(explicit).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(user_file)
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("fumis")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
