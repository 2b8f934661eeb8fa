use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::JobStatus;

/// Mutable progress record of a background fact-check job.
///
/// The engine only writes into this record; storage and expiry belong to the
/// job transport.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JobState {
    pub status: JobStatus,
    pub progress: u8,
    pub stage: String,
    pub message: String,
}

impl JobState {
    #[must_use]
    pub fn queued() -> Self {
        Self {
            status: JobStatus::Queued,
            progress: 0,
            stage: "initializing".to_string(),
            message: "Job queued...".to_string(),
        }
    }

    /// Placeholder returned for ids the store has never seen.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            status: JobStatus::Unknown,
            progress: 0,
            stage: "unknown".to_string(),
            message: "Job not found".to_string(),
        }
    }
}
