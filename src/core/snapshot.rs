//! Shared immutable handles for document states.
//!
//! The history engine never inspects document contents. It only asks
//! whether two snapshots are the *same* value, which is an O(1) pointer
//! comparison on the shared handle.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{self, Debug};
use std::ops::Deref;
use std::sync::Arc;

/// Immutable, cheaply cloneable handle to a document state.
///
/// Cloning a snapshot shares the underlying value. A base reducer that makes
/// no change must hand back a clone of its input snapshot; a reducer that
/// changes the document must return a freshly created one.
///
/// # Example
///
/// ```rust
/// use rewind::core::Snapshot;
///
/// let a = Snapshot::new(vec![1, 2, 3]);
/// let b = a.clone();
/// let c = Snapshot::new(vec![1, 2, 3]);
///
/// assert!(Snapshot::ptr_eq(&a, &b));
/// assert!(!Snapshot::ptr_eq(&a, &c));
/// assert_eq!(a, c); // structural equality still works
/// ```
pub struct Snapshot<D>(Arc<D>);

impl<D> Snapshot<D> {
    /// Wrap a document state in a new handle with its own identity.
    pub fn new(document: D) -> Self {
        Self(Arc::new(document))
    }

    /// Identity comparison: `true` only when both handles share one value.
    ///
    /// This is the only comparison the history engine performs.
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(&this.0, &other.0)
    }

    /// Borrow the document state.
    pub fn document(&self) -> &D {
        &self.0
    }
}

impl<D> Clone for Snapshot<D> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<D> Deref for Snapshot<D> {
    type Target = D;

    fn deref(&self) -> &D {
        &self.0
    }
}

impl<D> From<D> for Snapshot<D> {
    fn from(document: D) -> Self {
        Self::new(document)
    }
}

impl<D: PartialEq> PartialEq for Snapshot<D> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<D: Debug> Debug for Snapshot<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<D: Serialize> Serialize for Snapshot<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_ref().serialize(serializer)
    }
}

impl<'de, D: Deserialize<'de>> Deserialize<'de> for Snapshot<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        D::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Counter {
        count: i64,
    }

    #[test]
    fn clones_share_identity() {
        let snapshot = Snapshot::new(Counter { count: 0 });
        let cloned = snapshot.clone();
        assert!(Snapshot::ptr_eq(&snapshot, &cloned));
    }

    #[test]
    fn equal_values_have_distinct_identity() {
        let a = Snapshot::new(Counter { count: 1 });
        let b = Snapshot::new(Counter { count: 1 });

        assert_eq!(a, b);
        assert!(!Snapshot::ptr_eq(&a, &b));
    }

    #[test]
    fn deref_exposes_document() {
        let snapshot = Snapshot::from(Counter { count: 7 });
        assert_eq!(snapshot.count, 7);
        assert_eq!(snapshot.document(), &Counter { count: 7 });
    }

    #[test]
    fn serializes_as_inner_document() {
        let snapshot = Snapshot::new(Counter { count: 3 });
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"count":3}"#);

        let restored: Snapshot<Counter> = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
        assert!(!Snapshot::ptr_eq(&restored, &snapshot));
    }

    #[test]
    fn debug_is_transparent() {
        let snapshot = Snapshot::new(Counter { count: 2 });
        assert_eq!(format!("{snapshot:?}"), "Counter { count: 2 }");
    }
}
