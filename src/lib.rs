//! fumis — command-line front end for the WiRCU payload normalizer.
//!
//! Reads one status document (a file or stdin), normalizes it with
//! [`fumis_core`] and renders the result as JSON. This crate stands where a
//! poller or host-platform integration would sit; everything with real logic
//! lives in `fumis-core` and is re-exported here so integration tests can
//! import a single crate.
//!
//! ```text
//! Input ──► fumis_core::Normalizer ──► render ──► stdout
//! ```

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;

pub use fumis_core::config::{Config, OutputConfig, OutputFormat};
pub use fumis_core::{
    normalize, normalize_slice, normalize_str, DeviceInfo, DeviceSnapshot, Identifiers,
    NormalizeError, Normalizer,
};

/// Where the raw payload comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// `None` and `-` both mean stdin.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Input::File(path),
            _ => Input::Stdin,
        }
    }

    pub fn read(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin()
                    .read_to_end(&mut buf)
                    .context("failed to read payload from stdin")?;
                Ok(buf)
            }
            Input::File(path) => std::fs::read(path)
                .with_context(|| format!("failed to read payload from {}", path.display())),
        }
    }
}

/// Normalize one raw payload and render it according to `config.output`.
pub fn process(raw: &[u8], config: &Config) -> anyhow::Result<String> {
    let snapshot = Normalizer::from_config(config)
        .normalize_slice(raw)
        .context("failed to normalize stove payload")?;
    render(&snapshot, &config.output)
}

pub fn render(snapshot: &DeviceSnapshot, output: &OutputConfig) -> anyhow::Result<String> {
    let value = match output.format {
        OutputFormat::Snapshot => serde_json::to_value(snapshot)?,
        OutputFormat::Attributes => serde_json::to_value(snapshot.attributes())?,
    };
    let text = if output.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}
