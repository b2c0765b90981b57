//! Snapshot and restore for form controllers.
//!
//! A snapshot captures everything needed to rebuild the user-visible state
//! of a form across process interruption: the open step index, per-step
//! completion flags, subtitles, and error messages, all index-aligned with
//! the step collection. Snapshots are plain serializable values independent
//! of any platform persistence mechanism; JSON and binary codecs are
//! provided.

use crate::controller::FormController;
use crate::render::FormRenderer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::SnapshotError;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of a form controller.
///
/// Error message entries are `None` for completed steps and for steps that
/// never reported a validation failure; `Some("")` marks a step that was
/// explicitly uncompleted without a visible error.
///
/// # Example
///
/// ```rust
/// use stepform::builder::FormBuilder;
/// use stepform::render::NullRenderer;
/// use stepform::snapshot::FormSnapshot;
///
/// let mut form = FormBuilder::new()
///     .step("Account")
///     .step("Address")
///     .build(NullRenderer)
///     .unwrap();
/// form.mark_open_step_as_completed(false);
///
/// let snapshot = FormSnapshot::capture(&form);
/// let json = snapshot.to_json().unwrap();
///
/// let restored = FormSnapshot::from_json(&json).unwrap();
/// assert_eq!(restored.completed, vec![true, false, false]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSnapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: String,

    /// When the snapshot was captured
    pub created_at: DateTime<Utc>,

    /// Index of the step that was open, `None` if nothing was open
    pub open_step_index: Option<usize>,

    /// Per-step completion flags, index-aligned with the step collection
    pub completed: Vec<bool>,

    /// Per-step subtitles; empty string means none
    pub subtitles: Vec<String>,

    /// Per-step error messages; `None` for completed steps
    pub error_messages: Vec<Option<String>>,
}

impl FormSnapshot {
    /// Snapshot the current state of a controller.
    ///
    /// Error messages are captured only for uncompleted steps; completed
    /// steps always snapshot as `None`.
    pub fn capture<R: FormRenderer>(controller: &FormController<R>) -> Self {
        let steps = controller.steps();

        let completed = steps.iter().map(|s| s.is_completed()).collect();
        let subtitles = steps.iter().map(|s| s.subtitle().to_string()).collect();
        let error_messages = steps
            .iter()
            .map(|s| {
                if s.is_completed() {
                    None
                } else {
                    s.error_message().map(str::to_string)
                }
            })
            .collect();

        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now(),
            open_step_index: controller.open_step_index(),
            completed,
            subtitles,
            error_messages,
        }
    }

    /// Validate internal consistency: supported version, mutually agreeing
    /// array lengths, and an open index that names a step.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            });
        }

        let expected = self.completed.len();
        for found in [self.subtitles.len(), self.error_messages.len()] {
            if found != expected {
                return Err(SnapshotError::LengthMismatch { expected, found });
            }
        }

        // Restoration must never reach the completion trigger; an open
        // index equal to the step count would do exactly that.
        if let Some(index) = self.open_step_index {
            if index >= expected {
                return Err(SnapshotError::OpenIndexOutOfRange {
                    index,
                    step_count: expected,
                });
            }
        }

        Ok(())
    }

    /// Encode to JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from JSON and validate.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(json)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Encode to a compact binary representation.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        bincode::serialize(self).map_err(|e| SnapshotError::SerializationFailed(e.to_string()))
    }

    /// Decode from the binary representation and validate.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = bincode::deserialize(bytes)
            .map_err(|e| SnapshotError::DeserializationFailed(e.to_string()))?;
        snapshot.validate()?;
        Ok(snapshot)
    }
}
