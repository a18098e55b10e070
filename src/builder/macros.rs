//! Macros for ergonomic configuration construction.

/// Build an [`FsmConfig`](crate::core::FsmConfig) from identifiers.
///
/// State and event names are the stringified identifiers. The result is
/// not validated; [`Fsm::new`](crate::engine::Fsm::new) does that.
///
/// # Example
///
/// ```
/// use linear_fsm::fsm_config;
///
/// let config = fsm_config! {
///     initial: draft,
///     states: {
///         draft => { submit => review },
///         review => { approve => published, reject => draft },
///         published => {},
///     }
/// };
///
/// assert_eq!(config.initial, "draft");
/// assert_eq!(config.transition("review", "reject"), Some("draft"));
/// ```
#[macro_export]
macro_rules! fsm_config {
    (
        initial: $initial:ident,
        states: {
            $(
                $state:ident => { $($event:ident => $target:ident),* $(,)? }
            ),* $(,)?
        } $(,)?
    ) => {{
        let mut config = $crate::core::FsmConfig::new(stringify!($initial));
        $(
            #[allow(unused_mut)]
            let mut state = $crate::core::StateConfig::new();
            $(
                state.transitions.insert(
                    stringify!($event).to_string(),
                    stringify!($target).to_string(),
                );
            )*
            config.states.insert(stringify!($state).to_string(), state);
        )*
        config
    }};
}
