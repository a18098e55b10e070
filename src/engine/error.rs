//! Engine errors.

use crate::core::ConfigError;
use thiserror::Error;

/// Errors returned by [`crate::engine::Fsm`] operations.
///
/// A failed operation never changes the machine's history.
#[derive(Debug, Error)]
pub enum FsmError {
    /// The machine could not be constructed from its configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("State '{state}' is not configured")]
    InvalidState { state: String },

    #[error("No transition for event '{event}' from state '{state}'")]
    NoTransition { state: String, event: String },
}
