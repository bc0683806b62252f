//! TOML overrides for the built-in catalog.
//!
//! Projects tune rules in a small TOML file:
//!
//! ```toml
//! [[rules]]
//! name = "LongSentence"
//! threshold = 30
//!
//! [[rules]]
//! name = "PassiveVoice"
//! enabled = false
//! ```
//!
//! A missing file means "use the defaults"; an unknown rule name or a
//! malformed file is an error, silently dropping a typoed override would
//! defeat the point of having one.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use redline::Severity;

use crate::registry::Registry;

/// Errors raised while loading rule overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read rule config {path}: {message}")]
    Read { path: String, message: String },

    #[error("failed to parse rule config: {message}")]
    Parse { message: String },

    #[error("rule config refers to unknown rule {name:?}")]
    UnknownRule { name: String },
}

/// One override entry; absent fields keep the built-in value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleOverride {
    pub name: String,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub threshold: Option<u32>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// A parsed override file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RulesFile {
    #[serde(default)]
    pub rules: Vec<RuleOverride>,
}

impl RulesFile {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load an override file; a missing file is the empty override set.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!(path = %path.display(), "no rule config file, using defaults");
            return Ok(RulesFile::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        RulesFile::from_toml_str(&content)
    }
}

impl Registry {
    /// The built-in catalog with `overrides` applied on top.
    pub fn with_overrides(overrides: &RulesFile) -> Result<Registry, ConfigError> {
        let mut registry = Registry::builtin().clone();

        for entry in &overrides.rules {
            let rule = registry
                .get_mut(&entry.name)
                .ok_or_else(|| ConfigError::UnknownRule {
                    name: entry.name.clone(),
                })?;

            if let Some(severity) = entry.severity {
                rule.severity = severity;
            }
            if let Some(threshold) = entry.threshold {
                rule.threshold = Some(threshold);
            }
            if let Some(enabled) = entry.enabled {
                rule.enabled = enabled;
            }
        }

        Ok(registry)
    }
}
