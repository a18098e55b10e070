//! Builder API for ergonomic configuration construction.
//!
//! This module provides fluent builders and a macro for creating machine
//! configurations in code instead of loading them from documents.

pub mod error;
pub mod machine;
pub mod macros;
pub mod state;

pub use error::BuildError;
pub use machine::FsmConfigBuilder;
pub use state::StateBuilder;

use crate::core::FsmConfig;

/// Create a cyclic configuration where `event` advances through `states`
/// in order and wraps around from the last state to the first.
///
/// The first state is the initial state.
///
/// # Example
///
/// ```
/// use linear_fsm::builder::cycle;
///
/// let config = cycle("next", ["red", "green", "yellow"]).unwrap();
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(config.transition("yellow", "next"), Some("red"));
/// ```
pub fn cycle<I, S>(event: &str, states: I) -> Result<FsmConfig, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let names: Vec<String> = states.into_iter().map(Into::into).collect();
    let first = names.first().cloned().ok_or(BuildError::NoStates)?;

    let builders = names
        .iter()
        .zip(names.iter().cycle().skip(1))
        .map(|(name, next)| StateBuilder::new(name.as_str()).on(event, next.as_str()))
        .collect();

    FsmConfigBuilder::new()
        .initial(first)
        .states(builders)?
        .build()
}
