//! The base reducer contract.
//!
//! A base reducer is the pure state-transition function that the history
//! engine wraps. It knows nothing about undo or redo.

use super::snapshot::Snapshot;

/// Pure function computing the next document state from the previous one.
///
/// Implementations must be deterministic and must honor the identity
/// contract: return a clone of the input snapshot when nothing changed and a
/// new snapshot when something did. `None` means "no state yet" and is only
/// passed while the history is being initialized.
///
/// Any `Fn(Option<&Snapshot<D>>, &A) -> Snapshot<D>` is a reducer.
///
/// # Example
///
/// ```rust
/// use rewind::core::{Reducer, Snapshot};
///
/// fn counter(state: Option<&Snapshot<i64>>, delta: &i64) -> Snapshot<i64> {
///     match state {
///         Some(state) if *delta == 0 => state.clone(),
///         Some(state) => Snapshot::new(**state + delta),
///         None => Snapshot::new(0),
///     }
/// }
///
/// let initial = counter.reduce(None, &0);
/// let same = counter.reduce(Some(&initial), &0);
/// let next = counter.reduce(Some(&initial), &5);
///
/// assert!(Snapshot::ptr_eq(&initial, &same));
/// assert_eq!(*next, 5);
/// ```
pub trait Reducer<D, A> {
    /// Compute the next state.
    fn reduce(&self, state: Option<&Snapshot<D>>, action: &A) -> Snapshot<D>;
}

impl<D, A, F> Reducer<D, A> for F
where
    F: Fn(Option<&Snapshot<D>>, &A) -> Snapshot<D>,
{
    fn reduce(&self, state: Option<&Snapshot<D>>, action: &A) -> Snapshot<D> {
        self(state, action)
    }
}
