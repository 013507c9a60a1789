//! Generator configuration: TOML file with the artifact destination and
//! optional table/manifest settings. Every field has a default, so an empty
//! file (or no file at all) is a valid configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default destination of the generated lookup module.
pub const DEFAULT_OUTPUT: &str = "generated/hpack_static_table.rs";

/// Errors produced when loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Generator options, loadable from TOML. Unknown keys are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenConfig {
    /// Destination of the generated module.
    pub output: PathBuf,
    /// Alternate table spec file; the embedded RFC 7541 table when absent.
    pub table: Option<PathBuf>,
    /// Also write `<output>.manifest.json` next to the artifact.
    pub manifest: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            table: None,
            manifest: false,
        }
    }
}

impl GenConfig {
    /// Load a config from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
