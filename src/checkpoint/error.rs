//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or restoring a history checkpoint.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the checkpoint as JSON or binary failed
    #[error("Failed to encode history checkpoint: {0}")]
    SerializationFailed(String),

    /// Decoding a JSON or binary checkpoint failed
    #[error("Failed to decode history checkpoint: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint holds no committed state to restore
    #[error("Checkpoint {id} has no committed states")]
    EmptyPast { id: String },
}
