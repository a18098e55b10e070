//! Build errors for configuration builders.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors that can occur when building a configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error("State '{name}' is defined more than once")]
    DuplicateState { name: String },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ConfigError),
}
