//! Configuration-driven state machine with linear undo/redo.

use crate::core::{ConfigError, FsmConfig, HistoryLog};
use crate::engine::error::FsmError;
use std::sync::Arc;
use tracing::{debug, warn};
use uuid::Uuid;

/// State machine driven by a shared, read-only [`FsmConfig`].
///
/// A new machine reports the bootstrap state `"normal"`; it does not enter
/// the configured initial state until [`Fsm::reset`] is called. Every
/// successful transition appends to the machine's [`HistoryLog`], which
/// backs [`Fsm::undo`] and [`Fsm::redo`].
///
/// # Example
///
/// ```rust
/// use linear_fsm::engine::Fsm;
/// use linear_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: red,
///     states: {
///         red => { next => green },
///         green => { next => red },
///     }
/// };
///
/// let mut fsm = Fsm::new(config).unwrap();
/// assert_eq!(fsm.state(), "normal");
///
/// fsm.reset().unwrap();
/// fsm.trigger("next").unwrap();
/// assert_eq!(fsm.state(), "green");
///
/// assert!(fsm.undo());
/// assert_eq!(fsm.state(), "red");
/// assert!(fsm.redo());
/// assert_eq!(fsm.state(), "green");
/// ```
#[derive(Debug)]
pub struct Fsm {
    id: Uuid,
    config: Arc<FsmConfig>,
    history: HistoryLog,
}

impl Fsm {
    /// Create a machine after validating its configuration.
    pub fn new(config: impl Into<Arc<FsmConfig>>) -> Result<Self, FsmError> {
        let config = config.into();
        config.validate()?;

        let id = Uuid::new_v4();
        debug!(
            fsm = %id,
            initial = %config.initial,
            states = config.states.len(),
            "created state machine"
        );

        Ok(Self {
            id,
            config,
            history: HistoryLog::new(),
        })
    }

    /// Create a machine from a configuration that may be absent.
    pub fn try_from_option(config: Option<FsmConfig>) -> Result<Self, FsmError> {
        Self::new(config.ok_or(ConfigError::Missing)?)
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json_str(source: &str) -> Result<Self, FsmError> {
        Self::new(FsmConfig::from_json_str(source)?)
    }

    /// Create a machine from a YAML configuration document.
    pub fn from_yaml_str(source: &str) -> Result<Self, FsmError> {
        Self::new(FsmConfig::from_yaml_str(source)?)
    }

    /// Instance id attached to every log event of this machine.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The configuration this machine reads on every operation.
    pub fn config(&self) -> &FsmConfig {
        &self.config
    }

    /// Every recorded transition, including undone ones.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Name of the active state.
    pub fn state(&self) -> &str {
        &self.history.current().end
    }

    /// Move directly to `state`, ignoring the current state's event table.
    ///
    /// Any pending redo is discarded.
    pub fn change_state(&mut self, state: &str) -> Result<(), FsmError> {
        if !self.config.contains_state(state) {
            warn!(fsm = %self.id, state, "rejected change to unconfigured state");
            return Err(FsmError::InvalidState {
                state: state.to_string(),
            });
        }

        let record = self.history.record(state);
        debug!(
            fsm = %self.id,
            step = record.step,
            from = %record.start,
            to = %record.end,
            "state changed"
        );
        Ok(())
    }

    /// Follow the transition for `event` from the active state.
    ///
    /// An entry with an empty destination counts as no transition.
    pub fn trigger(&mut self, event: &str) -> Result<(), FsmError> {
        let config = Arc::clone(&self.config);
        let next = config
            .transition(self.state(), event)
            .filter(|next| !next.is_empty());
        let Some(next) = next else {
            warn!(fsm = %self.id, state = %self.state(), event, "no transition for event");
            return Err(FsmError::NoTransition {
                state: self.state().to_string(),
                event: event.to_string(),
            });
        };

        debug!(fsm = %self.id, event, "triggering transition");
        self.change_state(next)
    }

    /// Move to the configured initial state.
    pub fn reset(&mut self) -> Result<(), FsmError> {
        let config = Arc::clone(&self.config);
        self.change_state(&config.initial)
    }

    /// Configured state names in declaration order.
    ///
    /// With an `event`, only the states whose event table contains it.
    /// An empty event name is treated as no event.
    pub fn states(&self, event: Option<&str>) -> Vec<String> {
        let event = event.filter(|event| !event.is_empty());
        self.config
            .states
            .iter()
            .filter(|(_, state)| event.map_or(true, |event| state.handles(event)))
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Events the active state reacts to, in declaration order.
    pub fn events(&self) -> Vec<String> {
        self.config
            .states
            .get(self.state())
            .map(|state| state.transitions.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Step back to the previous state. Returns `false` if there is none.
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo();
        if undone {
            debug!(fsm = %self.id, state = %self.state(), "undid transition");
        }
        undone
    }

    /// Re-apply the next undone transition. Returns `false` if nothing was
    /// undone since the last transition.
    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo();
        if redone {
            debug!(fsm = %self.id, state = %self.state(), "redid transition");
        }
        redone
    }

    /// Whether [`Fsm::undo`] would step back, without changing anything.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Whether [`Fsm::redo`] would step forward, without changing anything.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget every transition and return to the bootstrap state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        debug!(fsm = %self.id, "cleared history");
    }
}
