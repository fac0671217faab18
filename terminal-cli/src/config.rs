use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Table settings loaded from YAML (flags override them).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    pub starting_balance: f64,
    /// Raw bet text, parsed like keyboard input.
    pub default_bet: Option<String>,
    /// Raw probability text such as `"75%"`.
    pub default_probability: Option<String>,
    pub stop_on_max_level: bool,
    pub seed: Option<u64>,
}

impl TableConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        // An empty document deserializes to unit, not a mapping
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }
}
