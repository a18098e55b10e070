//! Configuration errors.

use thiserror::Error;

/// Errors that can occur when loading or validating a machine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration was supplied, or the document was `null`.
    #[error("Configuration is missing")]
    Missing,

    #[error("Initial state is empty")]
    EmptyInitial,

    #[error("Initial state '{initial}' is not a configured state")]
    UnknownInitial { initial: String },

    /// The document could not be parsed as a configuration.
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported configuration format for '{path}', expected .json, .yaml or .yml")]
    UnsupportedFormat { path: String },
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
