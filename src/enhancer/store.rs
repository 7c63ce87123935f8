//! Owner that threads a history through successive dispatches.

use crate::checkpoint::{CheckpointError, HistoryCheckpoint};
use crate::core::{Action, HistoryAction, HistoryState, Reducer, Snapshot};
use crate::enhancer::reducer::HistoryReducer;
use std::sync::Arc;
use tracing::trace;

/// Holds the current history and feeds it one action at a time.
///
/// Calls must be serialized by the owner, exactly as for a plain reducer;
/// `dispatch` takes `&mut self` for that reason.
pub struct HistoryStore<D, A, R> {
    reducer: HistoryReducer<D, A, R>,
    state: Arc<HistoryState<D>>,
}

impl<D, A, R> HistoryStore<D, A, R>
where
    A: Action + Default,
    R: Reducer<D, A>,
{
    /// Create a store in the reducer's initial state.
    pub fn new(reducer: HistoryReducer<D, A, R>) -> Self {
        let state = reducer.initial_state();
        Self { reducer, state }
    }

    /// Create a store around an existing history.
    pub fn with_state(reducer: HistoryReducer<D, A, R>, state: HistoryState<D>) -> Self {
        Self {
            reducer,
            state: Arc::new(state),
        }
    }

    /// Resume a store from a saved checkpoint.
    pub fn restore(
        reducer: HistoryReducer<D, A, R>,
        checkpoint: HistoryCheckpoint<D>,
    ) -> Result<Self, CheckpointError> {
        let state = checkpoint.restore()?;
        Ok(Self::with_state(reducer, state))
    }

    /// Run one action. Returns `true` when the history changed.
    ///
    /// While no outside handle from [`state`](Self::state) is alive, the
    /// history is updated in place.
    pub fn dispatch(&mut self, action: impl Into<HistoryAction<A>>) -> bool {
        let action = action.into();
        let changed = self.reducer.step(&mut self.state, &action);

        trace!(action_type = action.action_type(), changed, "Dispatched");
        changed
    }

    pub fn undo(&mut self) -> bool {
        self.dispatch(HistoryAction::Undo)
    }

    pub fn redo(&mut self) -> bool {
        self.dispatch(HistoryAction::Redo)
    }

    pub fn create_undo_level(&mut self) -> bool {
        self.dispatch(HistoryAction::CreateUndoLevel)
    }

    /// Current history handle. Clone it to keep a stable view.
    pub fn state(&self) -> &Arc<HistoryState<D>> {
        &self.state
    }

    pub fn present(&self) -> &Snapshot<D> {
        self.state.present()
    }

    /// Whether [`undo`](Self::undo) would change anything.
    ///
    /// This is also true when only a pending edit exists and `past` holds a
    /// single checkpoint, since undo then discards the edit. A selector that
    /// only offers undo across checkpoints should test
    /// `state().past().len() > 1` instead.
    pub fn can_undo(&self) -> bool {
        self.state.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.state.can_redo()
    }

    pub fn reducer(&self) -> &HistoryReducer<D, A, R> {
        &self.reducer
    }

    /// Capture the current history for later [`restore`](Self::restore).
    pub fn checkpoint(&self) -> HistoryCheckpoint<D> {
        HistoryCheckpoint::capture(&self.state)
    }
}
