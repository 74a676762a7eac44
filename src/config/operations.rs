//! Config loading, discovery, validation, and serialization.

use super::model::Config;
use crate::error::{PromptcraftError, Result};
use std::path::{Path, PathBuf};

/// File name looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".promptcraft.yaml";

/// A config together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when no config file was found and defaults are in effect.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptcraftError::ConfigError)` - Read, parse, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptcraftError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Find and load the effective config.
    ///
    /// An explicit path must exist. Without one, `.promptcraft.yaml` in the
    /// current working directory is used if present, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig> {
        if let Some(path) = explicit {
            let config = Self::load(path)?;
            return Ok(LoadedConfig {
                config,
                source: Some(path.to_path_buf()),
            });
        }

        let candidate = PathBuf::from(DEFAULT_CONFIG_FILE);
        if candidate.is_file() {
            let config = Self::load(&candidate)?;
            return Ok(LoadedConfig {
                config,
                source: Some(candidate),
            });
        }

        Ok(LoadedConfig {
            config: Self::default(),
            source: None,
        })
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the default config.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PromptcraftError::ConfigError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptcraftError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Tone and specificity tags are not checked here: unknown tags are a
    /// supported input and fall back to `balanced`.
    pub fn validate(&self) -> Result<()> {
        if self
            .event_log
            .as_ref()
            .is_some_and(|path| path.as_os_str().is_empty())
        {
            return Err(PromptcraftError::ConfigError(
                "config validation failed: event_log must not be empty (remove the key to disable the event log)"
                    .to_string(),
            ));
        }

        Ok(())
    }
}
