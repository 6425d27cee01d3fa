//! CLI configuration: YAML file, then `ABIKIT_LOG`, then flags.

use abikit_observability::LogConfig;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CliConfig {
    #[serde(default)]
    pub log: LogConfig,
}

impl CliConfig {
    /// Load from a YAML file, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config file '{}'", path.display()))?;
        Self::from_yaml(&text).with_context(|| format!("parse config file '{}'", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Apply `ABIKIT_LOG` and command-line overrides, flags last.
    pub fn apply_overrides(&mut self, env_level: Option<String>, flag_level: Option<&str>, json: bool) {
        if let Some(level) = env_level.filter(|l| !l.is_empty()) {
            self.log.level = level;
        }
        if let Some(level) = flag_level {
            self.log.level = level.to_string();
        }
        if json {
            self.log.json = true;
        }
    }
}
