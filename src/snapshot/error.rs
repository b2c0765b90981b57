//! Snapshot error types.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or applying snapshots.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Snapshot format version is not supported by this version
    #[error("Unsupported snapshot version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The snapshot's per-step arrays disagree with each other or with the
    /// form it is being applied to
    #[error("Snapshot length mismatch: expected {expected} steps, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// The snapshot's open step index does not name a step
    #[error("Snapshot open step index {index} out of range for {step_count} steps")]
    OpenIndexOutOfRange { index: usize, step_count: usize },
}
