//! Undo/redo history of document snapshots.
//!
//! The history uses a merged-present layout: the provisional edit lives
//! directly in `present`, and the last entry of `past` is the most recent
//! checkpoint. An edit is pending exactly when `present` is not the same
//! snapshot as that last checkpoint.
//!
//! Transitions take the history by `Arc` and hand one back. A transition
//! that changes nothing returns the very handle it was given; a changing
//! transition copies on write, so anyone still holding the previous handle
//! keeps seeing the previous history.

use super::snapshot::Snapshot;
use std::collections::VecDeque;
use std::mem;
use std::sync::Arc;

/// Past checkpoints, the present document and the redo list.
///
/// # Example
///
/// ```rust
/// use rewind::core::{HistoryState, Snapshot};
/// use std::sync::Arc;
///
/// let history = Arc::new(HistoryState::new(Snapshot::new(0)));
///
/// // A provisional edit replaces the present without touching the past.
/// let history = history.apply(Snapshot::new(1));
/// assert!(history.has_pending_edit());
/// assert_eq!(history.past().len(), 1);
///
/// // Committing it makes it undoable.
/// let history = history.create_undo_level();
/// assert_eq!(history.past().len(), 2);
///
/// let history = history.undo();
/// assert_eq!(**history.present(), 0);
/// assert_eq!(*history.future()[0], 1);
/// ```
#[derive(Debug)]
pub struct HistoryState<D> {
    past: Vec<Snapshot<D>>,
    present: Snapshot<D>,
    future: VecDeque<Snapshot<D>>,
}

impl<D> Clone for HistoryState<D> {
    fn clone(&self) -> Self {
        Self {
            past: self.past.clone(),
            present: self.present.clone(),
            future: self.future.clone(),
        }
    }
}

impl<D> HistoryState<D> {
    /// Create a history whose only checkpoint is `initial`.
    pub fn new(initial: Snapshot<D>) -> Self {
        Self {
            past: vec![initial.clone()],
            present: initial,
            future: VecDeque::new(),
        }
    }

    /// Rebuild a history from its parts.
    ///
    /// Returns `None` when `past` is empty, since every history has at
    /// least one checkpoint.
    pub fn from_parts(
        past: Vec<Snapshot<D>>,
        present: Snapshot<D>,
        future: VecDeque<Snapshot<D>>,
    ) -> Option<Self> {
        if past.is_empty() {
            return None;
        }
        Some(Self {
            past,
            present,
            future,
        })
    }

    /// Checkpoints, oldest first. Never empty.
    pub fn past(&self) -> &[Snapshot<D>] {
        &self.past
    }

    /// The current document.
    pub fn present(&self) -> &Snapshot<D> {
        &self.present
    }

    /// Undone states, nearest redo first.
    pub fn future(&self) -> &VecDeque<Snapshot<D>> {
        &self.future
    }

    /// The most recent checkpoint.
    pub fn last_checkpoint(&self) -> &Snapshot<D> {
        // `past` is never empty: `new` seeds it and no transition drains it.
        &self.past[self.past.len() - 1]
    }

    /// Whether `present` holds an edit that has not been committed yet.
    pub fn has_pending_edit(&self) -> bool {
        !Snapshot::ptr_eq(&self.present, self.last_checkpoint())
    }

    /// Whether [`undo`](Self::undo) would change anything.
    ///
    /// True when an edit is pending or an earlier checkpoint exists. This is
    /// broader than `past().len() > 1`: a pending edit on the first
    /// checkpoint can still be undone.
    pub fn can_undo(&self) -> bool {
        self.has_pending_edit() || self.past.len() >= 2
    }

    /// Whether [`redo`](Self::redo) would change anything.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Snapshot-wise identity: both histories hold the same snapshots in
    /// the same slots.
    pub fn is_identical(&self, other: &Self) -> bool {
        Snapshot::ptr_eq(&self.present, &other.present)
            && self.past.len() == other.past.len()
            && self.future.len() == other.future.len()
            && self
                .past
                .iter()
                .zip(&other.past)
                .all(|(a, b)| Snapshot::ptr_eq(a, b))
            && self
                .future
                .iter()
                .zip(&other.future)
                .all(|(a, b)| Snapshot::ptr_eq(a, b))
    }

    /// Step back.
    ///
    /// With a pending edit, the present returns to the last checkpoint and
    /// the discarded edit becomes the nearest redo; `past` is unchanged.
    /// Otherwise the last checkpoint moves to the redo list and the one
    /// before it becomes the present. No-op when neither applies.
    pub fn undo(mut self: Arc<Self>) -> Arc<Self> {
        Self::undo_in_place(&mut self);
        self
    }

    /// Re-apply the nearest undone state, committing it as a checkpoint.
    /// No-op when there is nothing to redo.
    ///
    /// A pending edit is dropped: the redone state replaces it.
    pub fn redo(mut self: Arc<Self>) -> Arc<Self> {
        Self::redo_in_place(&mut self);
        self
    }

    /// Commit the present as a checkpoint and drop the redo list.
    /// No-op when the present is already the last checkpoint.
    pub fn create_undo_level(mut self: Arc<Self>) -> Arc<Self> {
        Self::create_undo_level_in_place(&mut self);
        self
    }

    /// Record `next` as a provisional present.
    ///
    /// `past` and `future` are left alone. No-op when `next` is the same
    /// snapshot as the current present.
    pub fn apply(mut self: Arc<Self>, next: Snapshot<D>) -> Arc<Self> {
        Self::apply_in_place(&mut self, next);
        self
    }

    /// Collapse the history to a single checkpoint of `next`.
    ///
    /// Unconditional: all past and future entries are discarded even when
    /// `next` is the current present.
    pub fn reset(mut self: Arc<Self>, next: Snapshot<D>) -> Arc<Self> {
        Self::reset_in_place(&mut self, next);
        self
    }

    // The `*_in_place` forms update through `&mut Arc` and report whether
    // anything changed. A uniquely held history is mutated without copying;
    // a shared one is cloned first. A no-op never touches the handle.

    pub(crate) fn undo_in_place(this: &mut Arc<Self>) -> bool {
        if !this.can_undo() {
            return false;
        }

        let history = Arc::make_mut(this);
        if history.has_pending_edit() {
            let checkpoint = history.last_checkpoint().clone();
            let discarded = mem::replace(&mut history.present, checkpoint);
            history.future.push_front(discarded);
        } else if let Some(undone) = history.past.pop() {
            history.present = history.last_checkpoint().clone();
            history.future.push_front(undone);
        }
        true
    }

    pub(crate) fn redo_in_place(this: &mut Arc<Self>) -> bool {
        if !this.can_redo() {
            return false;
        }

        let history = Arc::make_mut(this);
        match history.future.pop_front() {
            Some(redone) => {
                history.past.push(redone.clone());
                history.present = redone;
                true
            }
            None => false,
        }
    }

    pub(crate) fn create_undo_level_in_place(this: &mut Arc<Self>) -> bool {
        if !this.has_pending_edit() {
            return false;
        }

        let history = Arc::make_mut(this);
        history.past.push(history.present.clone());
        history.future.clear();
        true
    }

    pub(crate) fn apply_in_place(this: &mut Arc<Self>, next: Snapshot<D>) -> bool {
        if Snapshot::ptr_eq(&this.present, &next) {
            return false;
        }

        Arc::make_mut(this).present = next;
        true
    }

    /// Always reports a change.
    pub(crate) fn reset_in_place(this: &mut Arc<Self>, next: Snapshot<D>) -> bool {
        match Arc::get_mut(this) {
            Some(history) => *history = Self::new(next),
            None => *this = Arc::new(Self::new(next)),
        }
        true
    }
}
