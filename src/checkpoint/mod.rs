//! Checkpoint and resume for editing histories.
//!
//! A [`HistoryCheckpoint`] captures the whole undo/redo history so an editor
//! session can be saved and resumed later. Snapshots shared between slots are
//! written once: a committed present is not stored separately from the last
//! past entry, so restoring keeps it committed.

use crate::core::{HistoryState, Snapshot};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable capture of a history.
///
/// # Example
///
/// ```rust
/// use rewind::checkpoint::HistoryCheckpoint;
/// use rewind::core::{HistoryState, Snapshot};
/// use std::sync::Arc;
///
/// let history = Arc::new(HistoryState::new(Snapshot::new("draft".to_string())))
///     .apply(Snapshot::new("final".to_string()))
///     .create_undo_level();
///
/// let json = HistoryCheckpoint::capture(&history).to_json().unwrap();
/// let restored = HistoryCheckpoint::<String>::from_json(&json)
///     .unwrap()
///     .restore()
///     .unwrap();
///
/// assert_eq!(restored.past().len(), 2);
/// assert_eq!(restored.present().as_str(), "final");
/// assert!(!restored.has_pending_edit());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HistoryCheckpoint<D> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was taken
    pub timestamp: DateTime<Utc>,

    /// Committed states, oldest first
    pub past: Vec<Snapshot<D>>,

    /// Provisional present, if an edit was pending
    pub pending: Option<Snapshot<D>>,

    /// Undone states, nearest redo first
    pub future: Vec<Snapshot<D>>,
}

impl<D> HistoryCheckpoint<D> {
    /// Capture a history. Snapshots are shared, not copied.
    pub fn capture(history: &HistoryState<D>) -> Self {
        let pending = history
            .has_pending_edit()
            .then(|| history.present().clone());

        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            past: history.past().to_vec(),
            pending,
            future: history.future().iter().cloned().collect(),
        }
    }

    /// Check that this checkpoint can be restored.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if self.past.is_empty() {
            return Err(CheckpointError::EmptyPast {
                id: self.id.clone(),
            });
        }
        Ok(())
    }

    /// Rebuild the captured history.
    pub fn restore(self) -> Result<HistoryState<D>, CheckpointError> {
        self.validate()?;

        let present = match self.pending {
            Some(pending) => pending,
            None => match self.past.last() {
                Some(last) => last.clone(),
                None => return Err(CheckpointError::EmptyPast { id: self.id }),
            },
        };

        debug!(
            id = %self.id,
            past = self.past.len(),
            future = self.future.len(),
            "Restoring history checkpoint"
        );

        HistoryState::from_parts(self.past, present, self.future.into_iter().collect())
            .ok_or(CheckpointError::EmptyPast { id: self.id })
    }
}

impl<D: Serialize> HistoryCheckpoint<D> {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }
}

impl<D: DeserializeOwned> HistoryCheckpoint<D> {
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    struct Post {
        title: String,
        blocks: Vec<String>,
    }

    fn post(title: &str, blocks: &[&str]) -> Snapshot<Post> {
        Snapshot::new(Post {
            title: title.to_string(),
            blocks: blocks.iter().map(|b| b.to_string()).collect(),
        })
    }

    fn sample_history() -> Arc<HistoryState<Post>> {
        Arc::new(HistoryState::new(post("", &[])))
            .apply(post("Hello", &[]))
            .create_undo_level()
            .apply(post("Hello", &["intro"]))
            .create_undo_level()
            .apply(post("Hello", &["intro", "body"]))
            .create_undo_level()
            .undo()
            .apply(post("Hello world", &["intro"]))
    }

    fn titles(snapshots: &[Snapshot<Post>]) -> Vec<&str> {
        snapshots.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn capture_records_pending_edit() {
        let history = sample_history();
        let checkpoint = HistoryCheckpoint::capture(&history);

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(titles(&checkpoint.past), vec!["", "Hello", "Hello"]);
        assert_eq!(
            checkpoint.pending.as_ref().map(|p| p.title.as_str()),
            Some("Hello world")
        );
        assert_eq!(checkpoint.future.len(), 1);
        assert!(Snapshot::ptr_eq(&checkpoint.past[2], &history.past()[2]));
    }

    #[test]
    fn capture_omits_committed_present() {
        let history = Arc::new(HistoryState::new(post("", &[])));
        let checkpoint = HistoryCheckpoint::capture(&history);
        assert!(checkpoint.pending.is_none());
    }

    #[test]
    fn json_checkpoint_restores_history() {
        let history = sample_history();
        let json = HistoryCheckpoint::capture(&history).to_json().unwrap();

        let restored = HistoryCheckpoint::<Post>::from_json(&json)
            .unwrap()
            .restore()
            .unwrap();

        assert_eq!(restored.past(), history.past());
        assert_eq!(restored.present(), history.present());
        assert_eq!(restored.future(), history.future());
        assert!(restored.has_pending_edit());
    }

    #[test]
    fn binary_checkpoint_restores_history() {
        let history = Arc::new(HistoryState::new(post("", &[])))
            .apply(post("Title", &["p"]))
            .create_undo_level();
        let bytes = HistoryCheckpoint::capture(&history).to_binary().unwrap();

        let restored = HistoryCheckpoint::<Post>::from_binary(&bytes)
            .unwrap()
            .restore()
            .unwrap();

        assert_eq!(restored.past().len(), 2);
        assert!(!restored.has_pending_edit());
        assert!(Snapshot::ptr_eq(
            restored.present(),
            restored.last_checkpoint()
        ));
    }

    #[test]
    fn restored_history_keeps_undoing() {
        let history = sample_history();
        let json = HistoryCheckpoint::capture(&history).to_json().unwrap();
        let restored = Arc::new(
            HistoryCheckpoint::<Post>::from_json(&json)
                .unwrap()
                .restore()
                .unwrap(),
        );

        let restored = restored.undo();
        assert_eq!(restored.present().title, "Hello");
        assert_eq!(restored.present().blocks, vec!["intro".to_string()]);
        assert_eq!(restored.future().len(), 2);
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let mut checkpoint = HistoryCheckpoint::capture(&sample_history());
        checkpoint.version = CHECKPOINT_VERSION + 1;

        match checkpoint.restore() {
            Err(CheckpointError::UnsupportedVersion { found, supported }) => {
                assert_eq!(found, CHECKPOINT_VERSION + 1);
                assert_eq!(supported, CHECKPOINT_VERSION);
            }
            other => panic!("Expected UnsupportedVersion, got {other:?}"),
        }
    }

    #[test]
    fn empty_past_is_rejected() {
        let mut checkpoint = HistoryCheckpoint::capture(&sample_history());
        checkpoint.past.clear();

        assert!(matches!(
            checkpoint.restore(),
            Err(CheckpointError::EmptyPast { .. })
        ));
    }

    #[test]
    fn corrupt_input_fails_to_decode() {
        assert!(matches!(
            HistoryCheckpoint::<Post>::from_json("{\"version\": 1"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            HistoryCheckpoint::<Post>::from_binary(&[0xff, 0x01]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn checkpoint_ids_are_unique() {
        let history = sample_history();
        let a = HistoryCheckpoint::capture(&history);
        let b = HistoryCheckpoint::capture(&history);
        assert_ne!(a.id, b.id);
    }
}
