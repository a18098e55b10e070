//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::builder::state::StateBuilder;
use crate::core::{FsmConfig, StateConfig};
use indexmap::IndexMap;

/// Builder for [`FsmConfig`] with a fluent API.
#[derive(Default)]
pub struct FsmConfigBuilder {
    initial: Option<String>,
    states: IndexMap<String, StateConfig>,
}

impl FsmConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state using a builder.
    /// Returns an error if a state with the same name was already added.
    pub fn state(mut self, builder: StateBuilder) -> Result<Self, BuildError> {
        let (name, state) = builder.build();
        if self.states.contains_key(&name) {
            return Err(BuildError::DuplicateState { name });
        }
        self.states.insert(name, state);
        Ok(self)
    }

    /// Add or replace a pre-built state.
    pub fn add_state(mut self, name: impl Into<String>, state: StateConfig) -> Self {
        self.states.insert(name.into(), state);
        self
    }

    /// Add multiple states at once.
    pub fn states(self, builders: Vec<StateBuilder>) -> Result<Self, BuildError> {
        builders
            .into_iter()
            .try_fold(self, |builder, state| builder.state(state))
    }

    /// Build and validate the configuration.
    pub fn build(self) -> Result<FsmConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let config = FsmConfig {
            initial,
            states: self.states,
        };
        config.validate()?;

        Ok(config)
    }
}
