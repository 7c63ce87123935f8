//! Core history types and logic.
//!
//! This module contains the pure functional core of the history engine:
//! - Document snapshots with identity comparison
//! - Actions and the control actions the engine recognizes
//! - The base reducer contract
//! - Immutable past/present/future history transitions
//!
//! Nothing in this module performs I/O or logging.

mod action;
mod history;
mod reducer;
mod snapshot;

pub use action::{
    Action, DynAction, HistoryAction, CONTROL_TYPES, CREATE_UNDO_LEVEL, INIT, REDO, UNDO,
};
pub use history::HistoryState;
pub use reducer::Reducer;
pub use snapshot::Snapshot;
