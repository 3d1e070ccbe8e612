//! Run configuration, loadable from a TOML file.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for parsing and running a simulation.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Longest accepted robot program. Longer records are skipped by the parser.
    pub max_instruction_length: usize,

    /// `tracing-subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_instruction_length: 99,
            log_filter: "martian_robots=info".to_string(),
        }
    }
}

impl SimulationConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
