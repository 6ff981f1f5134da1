//! Configuration system for the keycapture control.
//!
//! Holds the capture policy settings in their serialisable form and handles
//! loading and saving them as YAML:
//!
//! ```yaml
//! modifiers_allowed: true
//! max_combination_length: 3
//! ```
//!
//! Missing fields fall back to their defaults.

pub mod defaults;
mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Capture policy settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureConfig {
    /// Whether held modifiers are recorded alongside the primary key
    #[serde(default = "defaults::modifiers_allowed")]
    pub modifiers_allowed: bool,

    /// Maximum number of tokens (modifiers plus primary key) in a combination
    #[serde(default = "defaults::max_combination_length")]
    pub max_combination_length: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            modifiers_allowed: defaults::modifiers_allowed(),
            max_combination_length: defaults::max_combination_length(),
        }
    }
}

impl CaptureConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml(contents: &str) -> Result<Self, ConfigError> {
        let config: CaptureConfig = serde_yaml_ng::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::info!("Loading capture config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load the config at [`default_path`](Self::default_path), or the
    /// defaults if no file exists there.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            Some(path) => {
                log::debug!("No config at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => {
                log::debug!("No config directory on this platform, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save the config as YAML, creating parent directories as needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        self.validate()?;
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml_ng::to_string(self)?;
        fs::write(path, yaml)?;
        log::info!("Saved capture config to {:?}", path);
        Ok(())
    }

    /// Check field values that the type system does not rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_combination_length < 1 {
            return Err(ConfigError::Validation(format!(
                "max_combination_length must be at least 1, got {}",
                self.max_combination_length
            )));
        }
        Ok(())
    }

    /// `<config dir>/keycapture/config.yaml`, if the platform has a config
    /// directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("keycapture").join("config.yaml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CaptureConfig::default();
        assert!(config.modifiers_allowed);
        assert_eq!(config.max_combination_length, 3);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = CaptureConfig::from_yaml("modifiers_allowed: false\n").unwrap();
        assert!(!config.modifiers_allowed);
        assert_eq!(config.max_combination_length, 3);
    }

    #[test]
    fn test_empty_mapping() {
        let config = CaptureConfig::from_yaml("{}").unwrap();
        assert_eq!(config, CaptureConfig::default());
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = CaptureConfig::from_yaml("max_combination_length: 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_invalid_yaml() {
        let err = CaptureConfig::from_yaml("max_combination_length: [oops").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_path_file_name() {
        if let Some(path) = CaptureConfig::default_path() {
            assert!(path.ends_with("keycapture/config.yaml"));
        }
    }
}
