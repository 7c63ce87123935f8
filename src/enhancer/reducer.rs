//! Reducer enhancer that adds undo/redo to a base reducer.

use crate::core::{Action, HistoryAction, HistoryState, Reducer};
use crate::options::HistoryOptions;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, trace};

/// A base reducer wrapped with history semantics.
///
/// Control actions (`Undo`, `Redo`, `CreateUndoLevel`) are handled here and
/// never reach the base reducer. Every other action is forwarded; its result
/// becomes a provisional present until a checkpoint or reset commits it.
pub struct HistoryReducer<D, A, R> {
    base: R,
    options: HistoryOptions,
    _phantom: PhantomData<fn(&A) -> D>,
}

impl<D, A, R> HistoryReducer<D, A, R>
where
    A: Action + Default,
    R: Reducer<D, A>,
{
    pub fn new(base: R, options: HistoryOptions) -> Self {
        Self {
            base,
            options,
            _phantom: PhantomData,
        }
    }

    pub fn options(&self) -> &HistoryOptions {
        &self.options
    }

    /// Seed a history by running the base reducer on no state and the
    /// empty action.
    pub fn initial_state(&self) -> Arc<HistoryState<D>> {
        let initial = self.base.reduce(None, &A::default());
        Arc::new(HistoryState::new(initial))
    }

    /// Compute the next history.
    ///
    /// `None` stands for an uninitialized store: the initial history is
    /// created first and `action` is then applied to it. Whenever the
    /// history does not change, the given handle is returned as is.
    ///
    /// Panics raised by the base reducer propagate to the caller.
    pub fn reduce(
        &self,
        state: Option<Arc<HistoryState<D>>>,
        action: &HistoryAction<A>,
    ) -> Arc<HistoryState<D>> {
        let mut state = state.unwrap_or_else(|| self.initial_state());
        self.step(&mut state, action);
        state
    }

    /// Apply `action` to the history behind `state`, returning whether it
    /// changed.
    ///
    /// A caller holding the only handle gets the update in place, without
    /// copying `past` or `future`. If other handles exist, `state` is
    /// pointed at a fresh history and the others keep the old one.
    pub fn step(&self, state: &mut Arc<HistoryState<D>>, action: &HistoryAction<A>) -> bool {
        match action {
            HistoryAction::Undo => {
                let discards_pending = state.has_pending_edit();
                if !HistoryState::undo_in_place(state) {
                    trace!("Undo ignored: no checkpoint or pending edit to step back from");
                    return false;
                }
                debug!(
                    past = state.past().len(),
                    future = state.future().len(),
                    discards_pending,
                    "Undo"
                );
                true
            }
            HistoryAction::Redo => {
                if !HistoryState::redo_in_place(state) {
                    trace!("Redo ignored: future is empty");
                    return false;
                }
                debug!(
                    past = state.past().len(),
                    future = state.future().len(),
                    "Redo"
                );
                true
            }
            HistoryAction::CreateUndoLevel => {
                if !HistoryState::create_undo_level_in_place(state) {
                    trace!("Checkpoint ignored: present is already committed");
                    return false;
                }
                debug!(past = state.past().len(), "Created undo level");
                true
            }
            HistoryAction::Dispatch(edit) => self.dispatch(state, edit),
        }
    }

    fn dispatch(&self, state: &mut Arc<HistoryState<D>>, edit: &A) -> bool {
        let next = self.base.reduce(Some(state.present()), edit);

        if self.options.is_reset(edit.action_type()) {
            debug!(
                action_type = edit.action_type(),
                discarded_past = state.past().len() - 1,
                discarded_future = state.future().len(),
                "History reset"
            );
            return HistoryState::reset_in_place(state, next);
        }

        if !HistoryState::apply_in_place(state, next) {
            trace!(action_type = edit.action_type(), "Edit left the document unchanged");
            return false;
        }
        true
    }
}
