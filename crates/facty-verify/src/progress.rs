//! Progress reporting.
//!
//! The pipeline reports coarse milestones through a [`ProgressObserver`].
//! [`JobBoard`] is an in-memory job-state store whose observers write those
//! milestones into a job record for polling.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use facty_core::JobState;
use facty_core::enums::{JobStatus, Stage};

/// One progress milestone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub percent: u8,
    pub stage: Stage,
    pub message: String,
}

impl ProgressUpdate {
    #[must_use]
    pub fn new(percent: u8, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            percent: percent.min(100),
            stage,
            message: message.into(),
        }
    }
}

/// Receives progress milestones. Fire-and-forget: the pipeline ignores
/// whatever the observer does with them.
pub trait ProgressObserver: Send + Sync {
    fn on_progress(&self, update: &ProgressUpdate);
}

impl<F> ProgressObserver for F
where
    F: Fn(&ProgressUpdate) + Send + Sync,
{
    fn on_progress(&self, update: &ProgressUpdate) {
        self(update);
    }
}

/// Observer that discards every update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&self, _update: &ProgressUpdate) {}
}

// ── Job board ──────────────────────────────────────────────────────

/// In-memory store of job records keyed by job id.
///
/// Cloning is cheap and clones share the same records.
#[derive(Debug, Clone, Default)]
pub struct JobBoard {
    jobs: Arc<Mutex<HashMap<String, JobState>>>,
}

impl JobBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a job as queued, replacing any previous record for the id.
    pub fn queue(&self, job_id: &str) {
        self.with_jobs(|jobs| {
            jobs.insert(job_id.to_string(), JobState::queued());
        });
    }

    /// Current record for a job; unknown ids get a "Job not found" record.
    #[must_use]
    pub fn status(&self, job_id: &str) -> JobState {
        self.with_jobs(|jobs| jobs.get(job_id).cloned())
            .unwrap_or_else(JobState::unknown)
    }

    /// Observer that writes milestones into this job's record.
    #[must_use]
    pub fn observer(&self, job_id: &str) -> JobObserver {
        JobObserver {
            board: self.clone(),
            job_id: job_id.to_string(),
        }
    }

    pub fn complete(&self, job_id: &str) {
        self.transition(job_id, JobStatus::Completed, |job| {
            job.progress = 100;
            job.stage = Stage::Complete.as_str().to_string();
            job.message = "Analysis complete".to_string();
        });
    }

    pub fn fail(&self, job_id: &str, message: &str) {
        self.transition(job_id, JobStatus::Failed, |job| {
            job.progress = 0;
            job.stage = Stage::Error.as_str().to_string();
            job.message = message.to_string();
        });
    }

    fn record_progress(&self, job_id: &str, update: &ProgressUpdate) {
        self.transition(job_id, JobStatus::Processing, |job| {
            job.progress = update.percent;
            job.stage = update.stage.as_str().to_string();
            job.message.clone_from(&update.message);
        });
    }

    /// Apply `update` if the job exists and may move to `next`.
    fn transition(&self, job_id: &str, next: JobStatus, update: impl FnOnce(&mut JobState)) {
        self.with_jobs(|jobs| {
            let Some(job) = jobs.get_mut(job_id) else {
                tracing::warn!(job_id, next = %next, "update for unknown job ignored");
                return;
            };
            if !job.status.can_transition_to(next) {
                tracing::warn!(
                    job_id,
                    from = %job.status,
                    to = %next,
                    "illegal job transition ignored"
                );
                return;
            }
            job.status = next;
            update(job);
        });
    }

    fn with_jobs<R>(&self, f: impl FnOnce(&mut HashMap<String, JobState>) -> R) -> R {
        let mut jobs = self.jobs.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut jobs)
    }
}

/// [`ProgressObserver`] bound to one job on a [`JobBoard`].
#[derive(Debug, Clone)]
pub struct JobObserver {
    board: JobBoard,
    job_id: String,
}

impl ProgressObserver for JobObserver {
    fn on_progress(&self, update: &ProgressUpdate) {
        self.board.record_progress(&self.job_id, update);
    }
}
