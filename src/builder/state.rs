//! Builder for a single state and its event table.

use crate::core::StateConfig;
use indexmap::IndexMap;

/// Builder for one state's transitions with a fluent API.
pub struct StateBuilder {
    name: String,
    transitions: IndexMap<String, String>,
}

impl StateBuilder {
    /// Start a state named `name` with no events.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transitions: IndexMap::new(),
        }
    }

    /// Move to `target` when `event` is triggered.
    /// A repeated event replaces the earlier target.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Drop every event, leaving a state that `trigger` cannot leave.
    pub fn terminal(mut self) -> Self {
        self.transitions.clear();
        self
    }

    /// Split into the state name and its configuration.
    pub fn build(self) -> (String, StateConfig) {
        (
            self.name,
            StateConfig {
                transitions: self.transitions,
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn on_adds_events_in_order() {
        let (name, state) = StateBuilder::new("green")
            .on("next", "yellow")
            .on("stop", "red")
            .build();

        assert_eq!(name, "green");
        let events: Vec<&String> = state.transitions.keys().collect();
        assert_eq!(events, vec!["next", "stop"]);
        assert_eq!(state.target("stop"), Some("red"));
    }

    #[test]
    fn repeated_event_replaces_target() {
        let (_, state) = StateBuilder::new("a").on("go", "b").on("go", "c").build();
        assert_eq!(state.transitions.len(), 1);
        assert_eq!(state.target("go"), Some("c"));
    }

    #[test]
    fn terminal_clears_events() {
        let (_, state) = StateBuilder::new("done").on("go", "b").terminal().build();
        assert!(state.transitions.is_empty());
    }
}
