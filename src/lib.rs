//! Linear FSM: a configuration-driven state machine with undo/redo
//!
//! A machine is described by plain data: an initial state and, for every
//! state, a table mapping event names to destination states. The engine
//! tracks the active state and keeps every transition in a single linear
//! history, so transitions can be undone and redone.
//!
//! # Core Concepts
//!
//! - **Configuration**: [`FsmConfig`], loaded from JSON/YAML or built in code
//! - **Engine**: [`Fsm`] applies direct state changes and event triggers
//! - **History**: [`HistoryLog`], an append-only log where undo marks
//!   records instead of removing them
//!
//! # Example
//!
//! ```rust
//! use linear_fsm::Fsm;
//!
//! let mut fsm = Fsm::from_json_str(r#"{
//!     "initial": "red",
//!     "states": {
//!         "red": { "transitions": { "next": "green" } },
//!         "green": { "transitions": { "next": "red" } }
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(fsm.state(), "normal");
//! fsm.change_state("red").unwrap();
//! fsm.trigger("next").unwrap();
//! assert_eq!(fsm.state(), "green");
//!
//! assert!(fsm.undo());
//! assert!(fsm.undo());
//! assert!(!fsm.undo());
//! assert_eq!(fsm.state(), "normal");
//!
//! assert!(fsm.redo());
//! assert_eq!(fsm.state(), "red");
//! ```

pub mod builder;
pub mod core;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, FsmConfigBuilder, StateBuilder};
pub use crate::core::{
    ConfigError, FsmConfig, HistoryLog, HistoryRecord, StateConfig, BOOTSTRAP_STATE,
};
pub use crate::engine::{Fsm, FsmError};
