//! Error types for the settings crate.
//!
//! This module provides structured error types for project file loading,
//! measure parsing, and typed access to resolved settings.

use cutbox_core::CoreError;
use thiserror::Error;

/// Errors that can occur during settings operations.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The project file could not be loaded.
    #[error("Failed to load project: {0}")]
    LoadError(String),

    /// A setting is present but its value cannot be used.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },

    /// A required setting is absent from every layer.
    #[error("Missing setting: {0}")]
    MissingKey(String),

    /// A unit or number could not be interpreted.
    #[error("Measure error: {0}")]
    Measure(#[from] CoreError),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A project structure error occurred.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to the structure of a project file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The requested section does not exist.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// The project file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A `key=value` override could not be split.
    #[error("Malformed override '{0}', expected KEY=VALUE")]
    MalformedOverride(String),
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_error_display() {
        let err = SettingsError::InvalidSetting {
            key: "length".to_string(),
            reason: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid setting 'length': must be positive");

        let err = SettingsError::MissingKey("width".to_string());
        assert_eq!(err.to_string(), "Missing setting: width");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnknownSection("tray".to_string());
        assert_eq!(err.to_string(), "Unknown section: tray");

        let err = ConfigError::MalformedOverride("length".to_string());
        assert_eq!(
            err.to_string(),
            "Malformed override 'length', expected KEY=VALUE"
        );
    }

    #[test]
    fn test_error_conversion() {
        let config_err = ConfigError::UnknownSection("lid".to_string());
        let settings_err: SettingsError = config_err.into();
        assert!(matches!(settings_err, SettingsError::Config(_)));

        let core_err = CoreError::UnknownUnit("ft".to_string());
        let settings_err: SettingsError = core_err.into();
        assert!(matches!(settings_err, SettingsError::Measure(_)));
    }
}
