//! Rewind: a pure functional undo/redo history for document reducers
//!
//! Rewind wraps an arbitrary base reducer, a pure `(state, action) -> state`
//! function, so the document it manages gains undo and redo without the
//! base reducer knowing anything about history. The core is pure: each call
//! consumes a history and an action and yields the next history, returning
//! the very same handle whenever nothing changed.
//!
//! # Core Concepts
//!
//! - **Snapshot**: Shared immutable document state compared by identity
//! - **Checkpoint**: A committed, undoable snapshot in `past`
//! - **Provisional edit**: A present that differs from the last checkpoint
//! - **Reset action**: An action type that collapses history to one checkpoint
//!
//! # Example
//!
//! ```rust
//! use rewind::core::{Action, HistoryAction, Snapshot};
//! use rewind::enhancer::{enhance, HistoryStore};
//! use rewind::options::HistoryOptions;
//!
//! #[derive(Default)]
//! enum CounterAction {
//!     #[default]
//!     Init,
//!     Increment,
//! }
//!
//! impl Action for CounterAction {
//!     fn action_type(&self) -> &str {
//!         match self {
//!             Self::Init => "INIT",
//!             Self::Increment => "INCREMENT",
//!         }
//!     }
//! }
//!
//! fn counter(state: Option<&Snapshot<i64>>, action: &CounterAction) -> Snapshot<i64> {
//!     match (state, action) {
//!         (None, _) => Snapshot::new(0),
//!         (Some(count), CounterAction::Increment) => Snapshot::new(**count + 1),
//!         (Some(count), CounterAction::Init) => count.clone(),
//!     }
//! }
//!
//! let mut store = HistoryStore::new(enhance::<i64, CounterAction, _>(
//!     counter,
//!     HistoryOptions::default(),
//! ));
//!
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(HistoryAction::CreateUndoLevel);
//! assert_eq!(**store.present(), 1);
//!
//! store.undo();
//! assert_eq!(**store.present(), 0);
//!
//! store.redo();
//! assert_eq!(**store.present(), 1);
//! ```

pub mod checkpoint;
pub mod core;
pub mod enhancer;
mod macros;
pub mod options;

// Re-export commonly used types
pub use checkpoint::{CheckpointError, HistoryCheckpoint};
pub use self::core::{Action, DynAction, HistoryAction, HistoryState, Reducer, Snapshot};
pub use enhancer::{enhance, HistoryReducer, HistoryStore};
pub use options::{HistoryOptions, OptionsError};
