//! Core machine data: configuration and transition history.
//!
//! Everything here is plain data with no knowledge of the engine:
//! - [`FsmConfig`] describes states and their event tables
//! - [`HistoryLog`] records transitions and implements linear undo/redo

mod config;
mod error;
mod history;

pub use config::{FsmConfig, StateConfig};
pub use error::ConfigError;
pub use history::{HistoryLog, HistoryRecord, BOOTSTRAP_STATE};
