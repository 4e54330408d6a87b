//! Error types for Plexus

use thiserror::Error;

/// The main error type for Plexus field operations
#[derive(Debug, Error)]
pub enum FieldError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Value out of range: {field} must be between {min} and {max}, got {value}")]
    ValueOutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),
}

/// Result type alias for Plexus field operations
pub type Result<T> = std::result::Result<T, FieldError>;

impl From<toml::de::Error> for FieldError {
    fn from(err: toml::de::Error) -> Self {
        FieldError::TomlParseError(err.to_string())
    }
}
