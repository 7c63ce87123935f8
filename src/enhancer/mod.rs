//! The history reducer enhancer and the store that drives it.
//!
//! This module is the thin shell around the pure core: it routes actions to
//! the history transitions, forwards edits to the base reducer and logs what
//! happened through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::{DynAction, HistoryAction, Snapshot};
//! use rewind::enhancer::enhance;
//! use rewind::options::HistoryOptions;
//!
//! fn title(state: Option<&Snapshot<String>>, action: &DynAction) -> Snapshot<String> {
//!     match (state, action.get("title").and_then(|t| t.as_str())) {
//!         (None, _) => Snapshot::new(String::new()),
//!         (Some(state), Some(title)) if state.as_str() != title => Snapshot::new(title.to_string()),
//!         (Some(state), _) => state.clone(),
//!     }
//! }
//!
//! let reducer = enhance::<String, DynAction, _>(title, HistoryOptions::default());
//!
//! let edit = HistoryAction::Dispatch(DynAction::new("EDIT_POST").with("title", "Hello"));
//! let state = reducer.reduce(None, &edit);
//! let state = reducer.reduce(Some(state), &HistoryAction::CreateUndoLevel);
//! assert_eq!(state.past().len(), 2);
//!
//! let state = reducer.reduce(Some(state), &HistoryAction::Undo);
//! assert_eq!(state.present().as_str(), "");
//! ```

mod reducer;
mod store;

pub use reducer::HistoryReducer;
pub use store::HistoryStore;

use crate::core::{Action, Reducer};
use crate::options::HistoryOptions;

/// Wrap `base` so that it gains undo/redo semantics.
pub fn enhance<D, A, R>(base: R, options: HistoryOptions) -> HistoryReducer<D, A, R>
where
    A: Action + Default,
    R: Reducer<D, A>,
{
    HistoryReducer::new(base, options)
}
