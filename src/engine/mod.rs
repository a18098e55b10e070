//! The state machine engine.
//!
//! [`Fsm`] owns a transition history and reads a shared [`crate::core::FsmConfig`]
//! on every operation. Callers either set a state directly with
//! [`Fsm::change_state`] or follow a configured edge with [`Fsm::trigger`].
//! Failed operations return [`FsmError`] and leave history untouched;
//! [`Fsm::undo`] and [`Fsm::redo`] report "nothing to do" with `false`.

mod error;
mod machine;

pub use error::FsmError;
pub use machine::Fsm;
