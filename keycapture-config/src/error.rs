//! Typed error variants for the keycapture-config crate.

use thiserror::Error;

/// Errors that can occur when loading, saving or validating configuration.
///
/// # Example
///
/// ```rust,no_run
/// use keycapture_config::{CaptureConfig, ConfigError};
///
/// match CaptureConfig::load("keycapture.yaml") {
///     Ok(config) => println!("max length {}", config.max_combination_length),
///     Err(ConfigError::Io(io)) => eprintln!("I/O error: {io}"),
///     Err(ConfigError::Parse(p)) => eprintln!("YAML parse error: {p}"),
///     Err(ConfigError::Validation(msg)) => eprintln!("Validation: {msg}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML that could not be parsed.
    #[error("YAML parse error in config: {0}")]
    Parse(#[from] serde_yaml_ng::Error),

    /// A field value failed semantic validation.
    #[error("Config validation error: {0}")]
    Validation(String),
}
