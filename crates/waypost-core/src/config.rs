//! Core configuration trait
//!
//! Configuration is read from a file (TOML or JSON by extension), then
//! overridden from `WAYPOST_*` environment variables, then validated.

use crate::{Result, WaypostError};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "WAYPOST_";

/// Core trait for Waypost configuration types
pub trait WaypostConfig: DeserializeOwned + Clone + Default + Send + Sync + 'static {
    /// Load configuration from a file
    fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            other => Err(WaypostError::invalid(format!(
                "Unsupported config format: {}",
                other.unwrap_or("<none>")
            ))),
        }
    }

    /// Apply environment overrides
    fn merge_with_env(&mut self) -> Result<()>;

    /// Validate the configuration
    fn validate(&self) -> Result<()>;

    /// Load, apply environment overrides and validate
    fn load(path: &Path) -> Result<Self> {
        let mut config = Self::load_from_file(path)?;
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}

/// Read a boolean override such as `WAYPOST_SYMMETRIC_CONNECTIONS`.
///
/// `key` is given without the prefix. Returns `Ok(None)` when unset.
pub fn env_flag(key: &str) -> Result<Option<bool>> {
    let name = format!("{ENV_PREFIX}{key}");
    match std::env::var(&name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| WaypostError::invalid(format!("Invalid boolean in {name}: {raw}"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => {
            Err(WaypostError::invalid(format!("{name} is not valid unicode")))
        }
    }
}
