//! Per-user configuration stored in the home directory
//!
//! The file is optional. A missing or unparsable file is reported as
//! [`HomeConfigLookup::Absent`], never as an error.

use crate::constants;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Settings read from the home configuration file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HomeConfig {
    values: BTreeMap<String, Value>,
}

impl HomeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse YAML (or JSON) text into a configuration
    pub fn parse(content: &str) -> Result<Self, serde_yaml::Error> {
        let values: BTreeMap<String, Value> = serde_yaml::from_str(content)?;
        Ok(Self { values })
    }

    pub fn with_value(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.values.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Value of `key` when it holds a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Outcome of looking for the home configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HomeConfigLookup {
    Found(HomeConfig),
    #[default]
    Absent,
}

impl HomeConfigLookup {
    /// Look up the configuration at its usual location
    ///
    /// `GABBS_HOME_CONFIG` overrides the path; otherwise `~/.gabbs.yaml` is used.
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Self::Absent,
        }
    }

    /// Look up the configuration at `path`
    pub fn load_from(path: &Path) -> Self {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|content| HomeConfig::parse(&content).ok())
            .map_or(Self::Absent, Self::Found)
    }

    pub fn default_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(constants::env::HOME_CONFIG_OVERRIDE) {
            return Some(PathBuf::from(path));
        }
        dirs::home_dir().map(|home| home.join(constants::paths::HOME_CONFIG))
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    pub fn config(&self) -> Option<&HomeConfig> {
        match self {
            Self::Found(config) => Some(config),
            Self::Absent => None,
        }
    }

    /// Shortcut for a string value of a found configuration
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.config().and_then(|config| config.get_str(key))
    }
}
