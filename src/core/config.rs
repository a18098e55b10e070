//! Declarative machine configuration.
//!
//! A configuration names the initial state and, for every state, the table
//! of events it reacts to. It is plain data: it can be written by hand,
//! built with [`crate::builder::FsmConfigBuilder`], or loaded from JSON or
//! YAML documents of the shape
//!
//! ```json
//! {
//!   "initial": "red",
//!   "states": {
//!     "red":   { "transitions": { "next": "green" } },
//!     "green": { "transitions": { "next": "red" } }
//!   }
//! }
//! ```
//!
//! Maps keep declaration order, which is the order reported by
//! [`crate::engine::Fsm::states`].

use super::error::ConfigError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Outgoing transitions of a single state.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateConfig {
    /// Event name -> destination state name
    #[serde(default)]
    pub transitions: IndexMap<String, String>,
}

impl StateConfig {
    /// A state with no outgoing events.
    pub fn new() -> Self {
        Self::default()
    }

    /// Destination for `event`, if this state reacts to it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether the state reacts to `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Complete machine configuration.
///
/// # Example
///
/// ```rust
/// use linear_fsm::core::FsmConfig;
///
/// let config = FsmConfig::from_json_str(
///     r#"{"initial": "idle", "states": {"idle": {"transitions": {"start": "busy"}}, "busy": {}}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.transition("idle", "start"), Some("busy"));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FsmConfig {
    /// State entered by [`crate::engine::Fsm::reset`]
    #[serde(default)]
    pub initial: String,
    /// State name -> transition table, in declaration order
    #[serde(default)]
    pub states: IndexMap<String, StateConfig>,
}

impl FsmConfig {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            initial: initial.into(),
            states: IndexMap::new(),
        }
    }

    /// Add or replace a state, returning the updated configuration.
    pub fn with_state(mut self, name: impl Into<String>, state: StateConfig) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Parse a JSON document. A `null` or blank document is [`ConfigError::Missing`].
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        let config: Option<Self> = serde_json::from_str(source)?;
        config.ok_or(ConfigError::Missing)
    }

    /// Parse a YAML document. A `null` or blank document is [`ConfigError::Missing`].
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        if source.trim().is_empty() {
            return Err(ConfigError::Missing);
        }
        let config: Option<Self> = serde_yaml::from_str(source)?;
        config.ok_or(ConfigError::Missing)
    }

    /// Load a configuration file, choosing the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!("Loading FSM configuration from: {}", path.display());

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&std::fs::read_to_string(path)?),
            Some("yaml" | "yml") => Self::from_yaml_str(&std::fs::read_to_string(path)?),
            _ => Err(ConfigError::UnsupportedFormat {
                path: path.display().to_string(),
            }),
        }
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the configuration can drive a machine.
    ///
    /// The initial state must be non-empty and configured. Destinations
    /// that name unconfigured states are allowed but reported as warnings,
    /// since triggering them fails later with an invalid state error.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial.is_empty() {
            return Err(ConfigError::EmptyInitial);
        }
        if !self.contains_state(&self.initial) {
            return Err(ConfigError::UnknownInitial {
                initial: self.initial.clone(),
            });
        }

        for (state, config) in &self.states {
            for (event, target) in &config.transitions {
                if !self.contains_state(target) {
                    warn!(
                        state = %state,
                        event = %event,
                        target = %target,
                        "transition targets an unconfigured state"
                    );
                }
            }
        }

        Ok(())
    }

    /// Check whether `name` is a configured state.
    pub fn contains_state(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Look up the destination of `event` from `state`.
    pub fn transition(&self, state: &str, event: &str) -> Option<&str> {
        self.states.get(state).and_then(|config| config.target(event))
    }

    /// Configured state names in declaration order.
    pub fn state_names(&self) -> impl Iterator<Item = &str> {
        self.states.keys().map(String::as_str)
    }
}
