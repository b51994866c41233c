//! Errors raised while saving or restoring an engine position.

use thiserror::Error;

/// Why a checkpoint could not be written, read back, or resumed from.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The snapshot could not be encoded as JSON or bincode.
    #[error("Could not encode checkpoint: {0}")]
    SerializationFailed(String),

    /// The input is not a checkpoint for this state type.
    #[error("Could not decode checkpoint: {0}")]
    DeserializationFailed(String),

    /// Written by a checkpoint format this crate cannot resume from.
    #[error("Checkpoint format {found} cannot be resumed (expected {supported})")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The resuming table has no row for a state named by the checkpoint.
    #[error("Checkpointed state '{state}' is not defined by the transition table")]
    UnknownState { state: String },
}
